//! HTTP handlers and error-to-status mapping

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::AppState;
use crate::Error;

/// Body of a `/process` request
#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    /// Raw input text
    pub text: String,
    /// Optional target language code; the configured default applies
    /// when absent
    #[serde(default)]
    pub language: Option<String>,
}

/// Error payload returned for failed requests
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable failure description
    pub error: String,
}

/// Derive keywords, a summary, and a translated summary from raw text
pub async fn process(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ProcessRequest>,
) -> Response {
    let total = state.request_handled();
    debug!("Handling /process request #{}", total);

    let target = request
        .language
        .as_deref()
        .unwrap_or_else(|| state.default_target())
        .trim()
        .to_lowercase();

    // Reject targets the service does not know at all before routing
    if !state.pipeline().router().catalog().knows_language(&target) {
        return error_response(&Error::UnsupportedLanguage(target));
    }

    match state.pipeline().process(&request.text, &target).await {
        Ok(outcome) => (StatusCode::OK, Json(outcome)).into_response(),
        Err(error) => error_response(&error),
    }
}

/// Map a pipeline error to an HTTP status and JSON body
fn error_response(error: &Error) -> Response {
    let status = match error {
        Error::EmptyInput | Error::UnsupportedLanguage(_) => StatusCode::BAD_REQUEST,
        Error::NoTranslationPath { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        Error::TranslationStage { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    warn!("Request failed ({}): {}", status, error);

    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}
