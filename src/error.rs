use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// Message sent to callers for every upstream or internal failure.
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "AI service not available";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    InvalidRequest(String),

    #[error("AI endpoint not configured on server")]
    Configuration,

    #[error("AI responder call failed: {0}")]
    UpstreamUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorReply {
    pub error: String,
}

impl RelayError {
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            RelayError::Configuration => StatusCode::INTERNAL_SERVER_ERROR,
            RelayError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            RelayError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-facing text. Upstream and internal causes stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            RelayError::InvalidRequest(msg) => msg.clone(),
            RelayError::Configuration => self.to_string(),
            RelayError::UpstreamUnavailable(_) | RelayError::Internal(_) => {
                SERVICE_UNAVAILABLE_MESSAGE.to_string()
            }
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        match &self {
            RelayError::InvalidRequest(_) => {}
            _ => error!("chat relay error: {}", self),
        }
        let body = ErrorReply {
            error: self.public_message(),
        };
        (self.status(), Json(body)).into_response()
    }
}
