//! Unified error types for the birdfeed API
//!
//! This module defines error types for each layer:
//! - `UpstreamError`: Upstream timeline API client errors
//! - `RenderError`: Feed serialization errors
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)
//!
//! Whatever the cause, a failed request answers with one opaque JSON
//! envelope; the underlying error goes to the log only.

use std::any::Any;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// The one message every failed request reports.
const INTERNAL_ERROR_MESSAGE: &str = "There was an internal server error";

/// Upstream timeline API client errors
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("token exchange failed: {status} - {message}")]
    TokenExchange { status: u16, message: String },

    #[error("token endpoint returned non-bearer token type: {0}")]
    TokenType(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("unauthorized - bearer token rejected")]
    Unauthorized,

    #[error("rate limited")]
    RateLimited,

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Feed serialization errors
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("rss serialization failed: {0}")]
    Rss(#[from] rss::Error),

    #[error("rendered document was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("unable to fetch timeline: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("unable to render feed: {0}")]
    Render(#[from] RenderError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl ErrorResponse {
    fn internal() -> Self {
        Self {
            error: INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Upstream(e) => tracing::error!("unable to fetch timeline: {}", e),
            AppError::Render(e) => tracing::error!("unable to render feed: {}", e),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::internal()),
        )
            .into_response()
    }
}

/// Responder for the outermost catch-panic layer.
///
/// A programming error in a handler produces the same opaque envelope as a
/// handled failure, and the process keeps serving other requests.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!("request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal()),
    )
        .into_response()
}
