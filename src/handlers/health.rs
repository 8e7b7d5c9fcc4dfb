//! Health check endpoint for the API.
//!
//! Reports whether the service is up and whether the database answers.

use actix_web::{web, HttpResponse};
use serde::Serialize;

use crate::services::ClienteRepository;

/// Health check response structure.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`
    pub status: String,
    /// `up` or `down`
    pub database: String,
}

/// Health check endpoint.
///
/// # Returns
///
/// `200 {"status": "healthy", "database": "up"}` when the database answers,
/// otherwise `503 {"status": "degraded", "database": "down"}`.
///
/// # Example
///
/// ```ignore
/// GET /health
/// Response: {"status": "healthy", "database": "up"}
/// ```
pub async fn health_check(repo: web::Data<dyn ClienteRepository>) -> HttpResponse {
    match repo.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: "healthy".to_string(),
            database: "up".to_string(),
        }),
        Err(e) => {
            tracing::warn!("Health check failed to reach database: {}", e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: "degraded".to_string(),
                database: "down".to_string(),
            })
        }
    }
}
