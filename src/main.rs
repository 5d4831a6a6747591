use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use disruptor_classifier::application::services::ClassificationService;
use disruptor_classifier::infrastructure::InferenceStrategyFactory;
use disruptor_classifier::infrastructure::observability::{TracingConfig, init_tracing};
use disruptor_classifier::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(&TracingConfig::from_settings(environment, &settings.logging));

    if settings.llm.api_key.is_none() {
        tracing::warn!(
            variable = settings.llm.provider.api_key_var(),
            "Reasoning service key is not set; classification requests will fail"
        );
    }

    let strategy = InferenceStrategyFactory::create(&settings)?;
    let classification_service = Arc::new(ClassificationService::new(strategy));

    let router = create_router(AppState::new(classification_service));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    tracing::info!(%addr, environment = %environment, "Listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
