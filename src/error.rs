//! Errors surfaced by the HTTP layer.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::shell::UnknownNavItem;

/// Request failures for the shell endpoints.
#[derive(Error, Debug)]
pub enum AppError {
    /// No shell session with this ID.
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// Path segment names no sidebar entry.
    #[error("Unknown navigation item: {0}")]
    UnknownNavItem(String),
}

impl From<UnknownNavItem> for AppError {
    fn from(err: UnknownNavItem) -> Self {
        Self::UnknownNavItem(err.0)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::SessionNotFound(_) | Self::UnknownNavItem(_) => StatusCode::NOT_FOUND,
        };
        (status, self.to_string()).into_response()
    }
}

/// Result type alias for handlers.
pub type Result<T> = std::result::Result<T, AppError>;
