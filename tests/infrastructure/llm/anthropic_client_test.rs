use disruptor_classifier::application::ports::{ContentBlock, LlmClient, LlmClientError};
use disruptor_classifier::infrastructure::llm::AnthropicClient;
use disruptor_classifier::presentation::config::{LlmProvider, LlmSettings};

use crate::helpers::start_mock_server;

fn settings(base_url: &str, api_key: Option<&str>) -> LlmSettings {
    LlmSettings {
        provider: LlmProvider::Anthropic,
        api_key: api_key.map(String::from),
        base_url: Some(base_url.to_string()),
        model: "claude-test".to_string(),
        max_tokens: 20,
        temperature: 0.0,
        timeout_secs: 5,
    }
}

fn prompt_with_audio() -> Vec<ContentBlock> {
    vec![
        ContentBlock::text("classify"),
        ContentBlock::InputAudio {
            data: "AAEC".to_string(),
            format: "webm".to_string(),
        },
        ContentBlock::text("[FOOD RECORDING]"),
    ]
}

#[tokio::test]
async fn given_split_text_reply_when_completing_then_concatenates_segments_in_order() {
    let server = start_mock_server(
        "/v1/messages",
        200,
        r#"{"content":[{"type":"text","text":"gut"},{"type":"text","text":"dysbiosis"}]}"#,
    )
    .await;
    let client = AnthropicClient::new(&settings(&server.base_url, Some("test-key"))).unwrap();

    let result = client.complete(&prompt_with_audio()).await.unwrap();

    assert_eq!(result, "gutdysbiosis");
}

#[tokio::test]
async fn given_request_when_completing_then_sends_key_version_and_pinned_parameters() {
    let server = start_mock_server(
        "/v1/messages",
        200,
        r#"{"content":[{"type":"text","text":"circadian"}]}"#,
    )
    .await;
    let client = AnthropicClient::new(&settings(&server.base_url, Some("test-key"))).unwrap();

    client.complete(&prompt_with_audio()).await.unwrap();

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].header("x-api-key").as_deref(), Some("test-key"));
    assert_eq!(
        requests[0].header("anthropic-version").as_deref(),
        Some("2023-06-01")
    );

    let body = requests[0].json();
    assert_eq!(body["model"], "claude-test");
    assert_eq!(body["max_tokens"], 20);
    assert_eq!(body["temperature"], 0.0);
    assert_eq!(body["messages"][0]["role"], "user");
    let content = &body["messages"][0]["content"];
    assert_eq!(content[0]["type"], "text");
    assert_eq!(content[1]["type"], "input_audio");
    assert_eq!(content[1]["input_audio"]["data"], "AAEC");
    assert_eq!(content[1]["input_audio"]["format"], "webm");
    assert_eq!(content[2]["text"], "[FOOD RECORDING]");
}

#[tokio::test]
async fn given_error_status_when_completing_then_returns_upstream_status_with_body() {
    let server = start_mock_server(
        "/v1/messages",
        401,
        r#"{"type":"error","error":{"type":"authentication_error"}}"#,
    )
    .await;
    let client = AnthropicClient::new(&settings(&server.base_url, Some("bad-key"))).unwrap();

    let result = client.complete(&prompt_with_audio()).await;

    match result {
        Err(LlmClientError::UpstreamStatus { status, body }) => {
            assert_eq!(status, 401);
            assert!(body.contains("authentication_error"));
        }
        other => panic!("expected upstream status, got {:?}", other),
    }
}

#[tokio::test]
async fn given_non_text_blocks_only_when_completing_then_returns_empty_text() {
    let server = start_mock_server(
        "/v1/messages",
        200,
        r#"{"content":[{"type":"thinking","thinking":"hmm"}]}"#,
    )
    .await;
    let client = AnthropicClient::new(&settings(&server.base_url, Some("test-key"))).unwrap();

    let result = client.complete(&prompt_with_audio()).await.unwrap();

    assert_eq!(result, "");
}

#[tokio::test]
async fn given_missing_api_key_when_completing_then_fails_before_sending() {
    let server = start_mock_server("/v1/messages", 200, r#"{"content":[]}"#).await;
    let client = AnthropicClient::new(&settings(&server.base_url, None)).unwrap();

    assert!(matches!(
        client.verify_configuration(),
        Err(LlmClientError::MissingApiKey(_))
    ));
    assert!(matches!(
        client.complete(&prompt_with_audio()).await,
        Err(LlmClientError::MissingApiKey(_))
    ));
    assert!(server.requests().is_empty());
}

#[tokio::test]
async fn given_blank_api_key_when_verifying_then_treated_as_missing() {
    let client = AnthropicClient::new(&settings("http://127.0.0.1:9", Some("  "))).unwrap();

    assert!(client.verify_configuration().is_err());
}
