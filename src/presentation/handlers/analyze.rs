use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::{AssessmentRequest, ClassificationError, normalize};
use crate::domain::{ClassificationDebug, ClassificationResult, DisruptorCategory};
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AnalyzeQuery {
    pub debug: Option<String>,
}

impl AnalyzeQuery {
    fn debug_enabled(&self) -> bool {
        self.debug
            .as_deref()
            .is_some_and(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub success: bool,
    pub disruptor: DisruptorCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<ClassificationDebug>,
}

impl From<ClassificationResult> for AnalyzeResponse {
    fn from(result: ClassificationResult) -> Self {
        Self {
            success: true,
            disruptor: result.category(),
            full_name: result.identity.full_name,
            phone: result.identity.phone,
            debug: result.debug,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    fn new(error: &str, details: Option<String>) -> Self {
        Self {
            success: false,
            error: error.to_string(),
            upstream_status: None,
            details,
        }
    }
}

#[tracing::instrument(skip(state, query, body), fields(body_bytes = body.len()))]
pub async fn analyze_disruptor_handler(
    State(state): State<AppState>,
    Query(query): Query<AnalyzeQuery>,
    body: Bytes,
) -> Response {
    let request = match AssessmentRequest::from_json(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!(error = %e, "Request body is not valid JSON");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(
                    "Internal server error",
                    Some(format!("invalid request body: {}", e)),
                )),
            )
                .into_response();
        }
    };

    let mut input = normalize(request);
    input.debug |= query.debug_enabled();

    match state.classification_service.classify(input).await {
        Ok(result) => {
            log_model_exchange(&result);
            (StatusCode::OK, Json(AnalyzeResponse::from(result))).into_response()
        }
        Err(e) => classification_error_response(e),
    }
}

fn log_model_exchange(result: &ClassificationResult) {
    for (kind, transcript) in [
        ("food", &result.transcripts.food),
        ("routine", &result.transcripts.routine),
    ] {
        if let Some(text) = transcript {
            tracing::debug!(kind, transcript = %sanitize_prompt(text), "Recording transcript");
        }
    }

    if result.resolution.is_fallback() {
        tracing::warn!(
            raw_output = %sanitize_prompt(&result.raw_model_text),
            "Returning default category"
        );
    } else {
        tracing::debug!(
            raw_output = %sanitize_prompt(&result.raw_model_text),
            category = %result.category(),
            "Model reply resolved"
        );
    }
}

fn classification_error_response(error: ClassificationError) -> Response {
    match error {
        ClassificationError::Configuration(message) => {
            tracing::error!(error = %message, "Classification service is misconfigured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Server configuration error", Some(message))),
            )
                .into_response()
        }
        ClassificationError::Upstream {
            service,
            status,
            body,
        } => {
            tracing::error!(service, status, "Upstream service rejected the request");
            let response_status = StatusCode::from_u16(status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            (
                response_status,
                Json(ErrorResponse {
                    upstream_status: Some(status),
                    ..ErrorResponse::new("Upstream service error", Some(body))
                }),
            )
                .into_response()
        }
        ClassificationError::Inference(e) => {
            tracing::error!(error = %e, "Classification failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Internal server error", Some(e.to_string()))),
            )
                .into_response()
        }
    }
}

/// Preflight without CORS request headers.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed_handler() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method not allowed", None)),
    )
        .into_response()
}
