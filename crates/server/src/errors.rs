use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::MessageBody;
use service::auth::errors::AuthError;
use service::errors::ServiceError;
use tracing::error;

/// Handler error rendered as `{"message": ...}` with the given status.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }

    pub fn not_found(message: impl Into<String>) -> Self { Self::new(StatusCode::NOT_FOUND, message) }

    pub fn internal() -> Self { Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error") }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(MessageBody::new(self.message))).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound(msg) => ApiError::not_found(msg),
            other @ ServiceError::Storage(_) => {
                error!(error = %other, code = other.code(), "service error");
                ApiError::internal()
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Conflict => ApiError::new(StatusCode::BAD_REQUEST, "Username already exists"),
            AuthError::Unauthorized => ApiError::new(StatusCode::UNAUTHORIZED, "Invalid credentials"),
            AuthError::InvalidSession => ApiError::new(StatusCode::UNAUTHORIZED, "Invalid session"),
            other @ AuthError::Repository(_) => {
                error!(error = %other, code = other.code(), "auth error");
                ApiError::internal()
            }
        }
    }
}
