use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::{classifier::ClassifierError, text::ValidationError};

/// Uniform JSON error envelope. The `code` field only appears on
/// protocol-level errors, matching the wire contract.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
}

/// Every failure a request can hit, translated to a response in exactly one
/// place. Internal detail is logged here and never leaks to the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Message is required")]
    MissingMessage,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
    #[error("malformed form body")]
    Form(FormRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingMessage => {
                tracing::warn!(target: "http", "rejected request without message field");
                envelope(StatusCode::BAD_REQUEST, "Message is required", false)
            }
            ApiError::Validation(err) => {
                tracing::warn!(target: "http", error = %err, "validation error");
                envelope(StatusCode::BAD_REQUEST, &err.to_string(), false)
            }
            ApiError::Classifier(err) => {
                tracing::error!(target: "http", error = %err, "unexpected error during prediction");
                envelope(StatusCode::INTERNAL_SERVER_ERROR, "An unexpected error occurred", false)
            }
            ApiError::Form(rejection) => {
                tracing::error!(target: "http", error = %rejection.body_text(), "form decoding error");
                envelope(rejection.status(), &rejection.body_text(), true)
            }
        }
    }
}

/// Envelope for framework-level failures (unknown route, wrong method).
pub fn protocol_error(status: StatusCode) -> Response {
    let description = status.canonical_reason().unwrap_or("HTTP error");
    tracing::error!(target: "http", code = status.as_u16(), "http error: {description}");
    envelope(status, description, true)
}

fn envelope(status: StatusCode, message: &str, with_code: bool) -> Response {
    let body = ErrorBody {
        error: message.to_string(),
        code: with_code.then(|| status.as_u16()),
    };
    (status, Json(body)).into_response()
}
