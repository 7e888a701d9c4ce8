//! Health check endpoint.

use actix_web::HttpResponse;
use synthra_shared::ApiResponse;
use synthra_shared::dto::HealthResponse;

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check() -> HttpResponse {
    let response = HealthResponse {
        timestamp: chrono::Local::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    HttpResponse::Ok().json(ApiResponse::ok_with_message(
        response,
        "API do Blog Synthra funcionando!",
    ))
}
