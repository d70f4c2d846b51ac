//! Mapping from gateway errors to HTTP responses

use anythink_core::error::{AnythinkError, ErrorKind};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;
use tracing::{debug, error, warn};

/// The gateway operation a request was performing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Fetch,
    Create,
    Update,
    Delete,
}

impl Operation {
    /// Message returned with a 500
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Fetch => "Failed to fetch comments",
            Operation::Create => "Failed to create comment",
            Operation::Update => "Failed to update comment",
            Operation::Delete => "Failed to delete comment",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Fetch => write!(f, "fetch"),
            Operation::Create => write!(f, "create"),
            Operation::Update => write!(f, "update"),
            Operation::Delete => write!(f, "delete"),
        }
    }
}

/// Error response: a status code plus a short `{"error": ...}` body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// Map a gateway error; internal details go to the log only
    pub fn from_error(operation: Operation, err: AnythinkError) -> Self {
        match err.kind() {
            ErrorKind::Validation => {
                warn!("Rejected {} request: {}", operation, err);
                Self::new(StatusCode::BAD_REQUEST, err.detail())
            }
            ErrorKind::NotFound => {
                debug!("{} on missing comment: {}", operation, err);
                Self::new(StatusCode::NOT_FOUND, "Comment not found")
            }
            ErrorKind::StorageUnavailable => {
                error!("Failed to {} comment: {}", operation, err);
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    operation.failure_message(),
                )
            }
        }
    }

    /// Body could not be parsed as the expected JSON
    pub fn malformed_body(operation: Operation, rejection: JsonRejection) -> Self {
        warn!("Malformed {} request body: {}", operation, rejection.body_text());
        Self::new(StatusCode::BAD_REQUEST, "Invalid JSON body")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
