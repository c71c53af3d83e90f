//! Draw error types with HTTP status code mapping.
//!
//! [`DrawError`] is the central error type of the service. Each variant
//! maps to a specific HTTP status code and structured JSON error response.
//! Repeat draws and an exhausted pool are normal outcomes, not errors; see
//! [`crate::service::DrawOutcome`].

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 1001,
///     "message": "IPv4 address required, got \"fe80::1\""
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
/// | Range     | Category        | HTTP Status               |
/// |-----------|-----------------|---------------------------|
/// | 1000–1999 | Validation      | 400 Bad Request           |
/// | 2000–2999 | Not Found       | 404 Not Found             |
/// | 3000–3999 | Server          | 500 Internal Server Error |
#[derive(Debug, thiserror::Error)]
pub enum DrawError {
    /// The request address does not resolve to an IPv4 identity.
    #[error("IPv4 address required, got {0:?}")]
    InvalidIdentity(String),

    /// The category table is malformed.
    ///
    /// Raised only while loading the table at startup, where it aborts the
    /// process through `anyhow`; no handler returns it.
    #[error("invalid category table: {0}")]
    InvalidCatalog(String),

    /// The rehearsal draw path is switched off.
    #[error("rehearsal draws are disabled")]
    RehearsalDisabled,

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl DrawError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidIdentity(_) => 1001,
            Self::InvalidCatalog(_) => 1002,
            Self::RehearsalDisabled => 2001,
            Self::Internal(_) => 3000,
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidIdentity(_) | Self::InvalidCatalog(_) => StatusCode::BAD_REQUEST,
            Self::RehearsalDisabled => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DrawError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                message: self.to_string(),
                details: None,
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}
