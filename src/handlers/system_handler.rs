//! Health and API documentation endpoints.

use actix_web::HttpResponse;
use utoipa::OpenApi;

use crate::constants::MSG_SERVER_RUNNING;
use crate::models::HealthResponse;
use crate::openapi::ApiDoc;

/// Liveness probe
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is running", body = HealthResponse)
    )
)]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}

/// OpenAPI document for this service
pub async fn openapi_json() -> HttpResponse {
    HttpResponse::Ok().json(ApiDoc::openapi())
}
