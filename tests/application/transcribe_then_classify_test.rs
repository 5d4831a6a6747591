use std::sync::Arc;

use disruptor_classifier::application::ports::{InferenceError, InferenceStrategy};
use disruptor_classifier::application::services::{
    AssessmentRequest, ClassificationError, ClassificationService, TranscribeThenClassify,
    normalize,
};
use disruptor_classifier::domain::{AttachmentKind, DisruptorCategory};

use crate::helpers::{MockLlmClient, MockTranscriptionEngine, audio_data_uri};

fn recordings() -> AssessmentRequest {
    AssessmentRequest {
        food_audio: audio_data_uri("audio/webm", b"food bytes"),
        routine_audio: audio_data_uri("audio/mpeg", b"routine bytes"),
        ..Default::default()
    }
}

#[tokio::test]
async fn given_two_recordings_when_inferring_then_transcribes_food_then_routine() {
    let engine = Arc::new(MockTranscriptionEngine::new());
    let llm_client = Arc::new(MockLlmClient::replying("microplastic"));
    let strategy = TranscribeThenClassify::new(engine.clone(), llm_client.clone());

    let output = strategy.infer(&normalize(recordings())).await.unwrap();

    let captured = engine.captured();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0], (AttachmentKind::Food, b"food bytes".to_vec()));
    assert_eq!(
        captured[1],
        (AttachmentKind::Routine, b"routine bytes".to_vec())
    );
    assert_eq!(
        output.transcripts.food.as_deref(),
        Some("I talk about my food every day")
    );
    assert_eq!(output.raw_text, "microplastic");
}

#[tokio::test]
async fn given_transcripts_when_inferring_then_reasoning_call_is_text_only() {
    let engine = Arc::new(MockTranscriptionEngine::new());
    let llm_client = Arc::new(MockLlmClient::replying("microplastic"));
    let strategy = TranscribeThenClassify::new(engine, llm_client.clone());

    strategy.infer(&normalize(recordings())).await.unwrap();

    let captured = llm_client.captured();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].len(), 1);
    let text = captured[0][0].as_text().unwrap();
    assert!(text.contains("I talk about my routine every day"));
}

#[tokio::test]
async fn given_no_recordings_when_inferring_then_skips_transcription() {
    let engine = Arc::new(MockTranscriptionEngine::new());
    let llm_client = Arc::new(MockLlmClient::replying("circadian"));
    let strategy = TranscribeThenClassify::new(engine.clone(), llm_client.clone());

    let output = strategy
        .infer(&normalize(AssessmentRequest::default()))
        .await
        .unwrap();

    assert_eq!(engine.calls(), 0);
    assert_eq!(llm_client.calls(), 1);
    assert!(output.transcripts.is_empty());
}

#[tokio::test]
async fn given_undecodable_payload_when_inferring_then_drops_that_recording() {
    let engine = Arc::new(MockTranscriptionEngine::new());
    let llm_client = Arc::new(MockLlmClient::replying("circadian"));
    let strategy = TranscribeThenClassify::new(engine.clone(), llm_client);
    let request = AssessmentRequest {
        food_audio: "data:audio/webm;base64,@@not-base64@@".to_string(),
        routine_audio: audio_data_uri("audio/webm", b"routine bytes"),
        ..Default::default()
    };

    let output = strategy.infer(&normalize(request)).await.unwrap();

    assert_eq!(engine.calls(), 1);
    assert_eq!(output.transcripts.food, None);
    assert!(output.transcripts.routine.is_some());
}

#[tokio::test]
async fn given_malformed_media_type_when_classifying_then_succeeds_without_that_recording() {
    let engine = Arc::new(MockTranscriptionEngine::new());
    let llm_client = Arc::new(MockLlmClient::replying("sedentarymetabolism"));
    let service = ClassificationService::new(Arc::new(TranscribeThenClassify::new(
        engine.clone(),
        llm_client,
    )));
    let request = AssessmentRequest {
        food_audio: "data:audio/we bm;base64,AAAA".to_string(),
        routine_audio: audio_data_uri("audio/webm", b"routine bytes"),
        ..Default::default()
    };

    let result = service.classify(normalize(request)).await.unwrap();

    assert_eq!(result.category(), DisruptorCategory::SedentaryMetabolism);
    assert_eq!(engine.calls(), 1);
    assert_eq!(engine.captured()[0].0, AttachmentKind::Routine);
}

#[tokio::test]
async fn given_transcription_rejected_when_inferring_then_skips_reasoning_call() {
    let engine = Arc::new(MockTranscriptionEngine::failing(400, "bad audio"));
    let llm_client = Arc::new(MockLlmClient::replying("circadian"));
    let strategy = TranscribeThenClassify::new(engine, llm_client.clone());

    let result = strategy.infer(&normalize(recordings())).await;

    assert!(matches!(result, Err(InferenceError::Transcription(_))));
    assert_eq!(llm_client.calls(), 0);
}

#[tokio::test]
async fn given_missing_transcription_key_when_classifying_then_makes_no_calls() {
    let engine = Arc::new(MockTranscriptionEngine::unconfigured());
    let llm_client = Arc::new(MockLlmClient::replying("circadian"));
    let service = ClassificationService::new(Arc::new(TranscribeThenClassify::new(
        engine.clone(),
        llm_client.clone(),
    )));

    let result = service.classify(normalize(recordings())).await;

    assert!(matches!(result, Err(ClassificationError::Configuration(_))));
    assert_eq!(engine.calls(), 0);
    assert_eq!(llm_client.calls(), 0);
}

#[tokio::test]
async fn given_missing_reasoning_key_when_classifying_then_makes_no_transcription_calls() {
    let engine = Arc::new(MockTranscriptionEngine::new());
    let llm_client = Arc::new(MockLlmClient::unconfigured());
    let service = ClassificationService::new(Arc::new(TranscribeThenClassify::new(
        engine.clone(),
        llm_client.clone(),
    )));

    let result = service.classify(normalize(recordings())).await;

    assert!(matches!(result, Err(ClassificationError::Configuration(_))));
    assert_eq!(engine.calls(), 0);
}

#[tokio::test]
async fn given_transcription_upstream_error_when_classifying_then_reports_transcription_service() {
    let engine = Arc::new(MockTranscriptionEngine::failing(401, "invalid key"));
    let llm_client = Arc::new(MockLlmClient::replying("circadian"));
    let service =
        ClassificationService::new(Arc::new(TranscribeThenClassify::new(engine, llm_client)));

    let result = service.classify(normalize(recordings())).await;

    assert!(matches!(
        result,
        Err(ClassificationError::Upstream {
            service: "transcription",
            status: 401,
            ..
        })
    ));
}

#[tokio::test]
async fn given_debug_request_when_classifying_then_debug_carries_transcripts() {
    let engine = Arc::new(MockTranscriptionEngine::new());
    let llm_client = Arc::new(MockLlmClient::replying("digitaloverstimulation"));
    let service =
        ClassificationService::new(Arc::new(TranscribeThenClassify::new(engine, llm_client)));
    let request = AssessmentRequest {
        debug: true,
        ..recordings()
    };

    let result = service.classify(normalize(request)).await.unwrap();

    assert_eq!(result.category(), DisruptorCategory::DigitalOverstimulation);
    let debug = result.debug.unwrap();
    assert_eq!(debug.strategy, "transcription");
    assert!(debug.transcripts.food.is_some());
    assert!(debug.transcripts.routine.is_some());
}

#[tokio::test]
async fn given_debug_not_requested_when_classifying_then_result_carries_transcripts() {
    let engine = Arc::new(MockTranscriptionEngine::new());
    let llm_client = Arc::new(MockLlmClient::replying("nutritionaldeficiency"));
    let service =
        ClassificationService::new(Arc::new(TranscribeThenClassify::new(engine, llm_client)));

    let result = service.classify(normalize(recordings())).await.unwrap();

    assert!(result.debug.is_none());
    assert_eq!(result.raw_model_text, "nutritionaldeficiency");
    assert_eq!(
        result.transcripts.food.as_deref(),
        Some("I talk about my food every day")
    );
    assert_eq!(
        result.transcripts.routine.as_deref(),
        Some("I talk about my routine every day")
    );
}
