use disruptor_classifier::infrastructure::observability::TracingConfig;
use disruptor_classifier::presentation::config::{Environment, LoggingSettings};

#[test]
fn given_no_settings_when_creating_default_then_uses_plain_local_output() {
    let config = TracingConfig::default();

    assert!(!config.json_format);
    assert_eq!(config.environment, Environment::Local);
    assert!(config.default_filter.contains("disruptor_classifier=debug"));
}

#[test]
fn given_prod_logging_settings_when_building_config_then_carries_filter_and_format() {
    let logging = LoggingSettings {
        level: "warn".to_string(),
        json_format: true,
    };

    let config = TracingConfig::from_settings(Environment::Prod, &logging);

    assert!(config.json_format);
    assert_eq!(config.environment, Environment::Prod);
    assert_eq!(config.default_filter, "warn");
}
