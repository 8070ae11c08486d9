//! HTTP error envelope and mapping from repository failures.
//!
//! Every error leaves the service as `{"statusCode": <int>, "msg": ...}`
//! where `msg` is either a plain string or, for validation failures, a
//! field-to-message object. Unclassified failures are logged with the
//! request path and reduced to a fixed message so internal details never
//! reach clients.

use std::collections::BTreeMap;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::FieldErrors;
use crate::domain::ports::RepositoryError;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Message payload of the error envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    /// Plain human-readable message.
    Text(String),
    /// Field-to-message mapping for validation failures.
    Fields(BTreeMap<String, String>),
}

/// Standard error envelope returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// HTTP status code, duplicated in the body for client convenience.
    #[schema(example = 422)]
    status_code: u16,
    /// Plain message, or a field map for validation failures.
    #[schema(value_type = Object)]
    msg: ErrorMessage,
}

impl ApiError {
    fn text(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            msg: ErrorMessage::Text(msg.into()),
        }
    }

    /// 422 with one entry per violated field.
    pub fn validation(errors: FieldErrors) -> Self {
        let fields = errors
            .into_iter()
            .map(|(field, message)| (field.to_owned(), message))
            .collect();
        Self {
            status_code: StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
            msg: ErrorMessage::Fields(fields),
        }
    }

    /// 400 for a body that is not valid JSON.
    pub fn invalid_json() -> Self {
        Self::text(StatusCode::BAD_REQUEST, "invalid JSON request data")
    }

    /// 400 for a path identifier that is not a valid UUID.
    pub fn invalid_identifier() -> Self {
        Self::text(
            StatusCode::BAD_REQUEST,
            "invalid identifier in request path",
        )
    }

    /// 404 for a lookup that matched no row.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::text(StatusCode::NOT_FOUND, msg)
    }

    /// 409 for a uniqueness or referential-integrity rejection.
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::text(StatusCode::CONFLICT, msg)
    }

    /// 503 when the store cannot be reached.
    pub fn unavailable() -> Self {
        Self::text(StatusCode::SERVICE_UNAVAILABLE, "service unavailable")
    }

    /// 500 with a fixed message; the cause stays server-side.
    pub fn internal() -> Self {
        Self::text(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }

    /// Status code carried by the envelope.
    pub fn status(&self) -> u16 {
        self.status_code
    }

    /// Message payload carried by the envelope.
    pub fn msg(&self) -> &ErrorMessage {
        &self.msg
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.msg {
            ErrorMessage::Text(text) => write!(f, "{}: {text}", self.status_code),
            ErrorMessage::Fields(fields) => {
                write!(f, "{}: {} invalid field(s)", self.status_code, fields.len())
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self)
    }
}

/// Translate a repository failure into the wire envelope.
///
/// Conflict and not-found are client-visible outcomes and are not logged as
/// server faults; unavailable and unknown failures are logged with the
/// request path before being reduced to generic messages.
pub fn map_repository_error(error: RepositoryError, path: &str) -> ApiError {
    match error {
        RepositoryError::Conflict { message } => ApiError::conflict(message),
        RepositoryError::NotFound { message } => ApiError::not_found(message),
        RepositoryError::Unavailable { message } => {
            error!(path, error = %message, "catalogue store unavailable");
            ApiError::unavailable()
        }
        RepositoryError::Unknown { message } => {
            error!(path, error = %message, "unclassified storage failure");
            ApiError::internal()
        }
    }
}
