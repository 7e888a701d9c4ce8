//! Error handling - every failure is rendered as `{"success": false, "error": ...}`.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use std::fmt;
use synthra_core::DomainError;
use synthra_shared::ErrorResponse;

/// Application-level error type that converts to the error envelope.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) | AppError::BadRequest(msg) => f.write_str(msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse::new(self.to_string()))
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();
        match err {
            DomainError::MissingField(_) => AppError::BadRequest(message),
            DomainError::NotFound { .. } => AppError::NotFound(message),
        }
    }
}

/// Route JSON body rejections through the same envelope.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected request body");
    AppError::BadRequest(format!("JSON inválido: {err}")).into()
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppResult<HttpResponse> {
    Err(AppError::NotFound("Rota não encontrada".to_string()))
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
