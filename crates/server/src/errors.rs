use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use models::DomainError;
use service::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Handler failures. Responses carry only the status code; the cause is logged.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Mapping for `get_by_id`: malformed and unknown ids are both 404.
    pub fn from_lookup(e: ServiceError) -> Self {
        if e.is_lookup_miss() {
            ApiError::NotFound(e.to_string())
        } else {
            ApiError::Internal(e.to_string())
        }
    }

    /// Mapping for `add`: a rejected source type is the client's fault.
    pub fn from_create(e: ServiceError) -> Self {
        match e {
            ServiceError::Domain(DomainError::SourceTypeNotValid { .. }) => ApiError::BadRequest(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }

    /// Mapping for `update`: the record may vanish between lookup and replace.
    pub fn from_update(e: ServiceError) -> Self {
        match e {
            ServiceError::Domain(DomainError::EntityNotFound { .. }) => ApiError::NotFound(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }

    pub fn internal(e: ServiceError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        status.into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("document store unavailable: {0}")]
    Database(String),
}
