//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type of the service. Each variant maps
//! to an HTTP status code and a structured JSON error response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::TodoId;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2001,
///     "message": "todo item not found"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code and human-readable message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code.
    pub code: u32,
    /// Human-readable error message.
    pub message: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category  | HTTP Status               |
/// |-----------|-----------|---------------------------|
/// | 2000–2999 | Not Found | 404 Not Found             |
/// | 3000–3999 | Server    | 500 Internal Server Error |
///
/// [`ApiError::TodoNotFound`] and [`ApiError::IdMismatch`] share code
/// 2001 and the same response message; only the `Display` text used in
/// logs tells them apart.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No todo item is stored under the given id.
    #[error("todo item not found: {0}")]
    TodoNotFound(TodoId),

    /// The id in the request path differs from the id in the body.
    #[error("todo id mismatch: path {path}, body {body}")]
    IdMismatch {
        /// Id taken from the request path.
        path: TodoId,
        /// Id carried by the request body.
        body: TodoId,
    },

    /// No further id can be allocated.
    #[error("todo id space exhausted")]
    IdSpaceExhausted,
}

impl ApiError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::TodoNotFound(_) | Self::IdMismatch { .. } => 2001,
            Self::IdSpaceExhausted => 3001,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::TodoNotFound(_) | Self::IdMismatch { .. } => StatusCode::NOT_FOUND,
            Self::IdSpaceExhausted => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Returns the message exposed to clients.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::TodoNotFound(_) | Self::IdMismatch { .. } => "todo item not found".to_string(),
            Self::IdSpaceExhausted => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.public_message(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
