//! Error kinds surfaced by configuration, the data source, rendering and routing.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Any failure reaching or decoding the GAS data source. Never retried.
#[derive(Debug, Error)]
pub enum DataSourceError {
    #[error("data source request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("data source returned status {0}")]
    Status(u16),
}

#[derive(Debug, Error)]
pub enum PanelError {
    /// Recoverable: the caller re-renders the root panel instead.
    #[error("category `{0}` is not in the menu")]
    CategoryNotFound(String),
}

/// Rejections that end an inbound request with a non-200 status.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Invalid Signature")]
    SignatureInvalid,
    #[error("Bad Request")]
    BadRequest(String),
    #[error("Method Not Allowed")]
    UnsupportedMethod,
    #[error("Unknown Type")]
    UnknownInteractionType,
}

impl RouteError {
    pub fn status(&self) -> StatusCode {
        match self {
            RouteError::SignatureInvalid => StatusCode::UNAUTHORIZED,
            RouteError::BadRequest(_) | RouteError::UnknownInteractionType => {
                StatusCode::BAD_REQUEST
            }
            RouteError::UnsupportedMethod => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        if let RouteError::BadRequest(detail) = &self {
            tracing::debug!(target = "server", detail = %detail, "bad request");
        }
        (self.status(), self.to_string()).into_response()
    }
}
