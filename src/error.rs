//! Unified error handling for the clientes API.
//!
//! Request validation failures and database failures both flow through
//! `AppError`, which renders the JSON body each one has always produced:
//! validation errors use the `success` key, server errors use `estado`.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Message returned to clients on any database failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Error interno del servidor";

/// Unified application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required field was missing or empty, or the body was not valid JSON
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database errors from SQLx (pool checkout, connectivity, query failure)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Body of a 400 response for a rejected request.
#[derive(Debug, Serialize)]
pub struct ValidationFailure {
    pub success: bool,
    pub message: String,
}

/// Body of a 500 response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerFailure {
    pub estado: bool,
    pub message: String,
    pub error_details: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Validation(message) => {
                HttpResponse::build(self.status_code()).json(ValidationFailure {
                    success: false,
                    message: message.clone(),
                })
            }
            AppError::Database(e) => HttpResponse::build(self.status_code()).json(ServerFailure {
                estado: false,
                message: INTERNAL_ERROR_MESSAGE.to_string(),
                error_details: e.to_string(),
            }),
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
