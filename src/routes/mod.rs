use actix_web::web;

use crate::config::CONFIG;
use crate::handlers;
use crate::middleware::AuthMiddleware;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(handlers::health_check))
            .route("/openapi.json", web::get().to(handlers::openapi_json))
            // Employee routes (protected)
            .service(
                web::scope("/employees")
                    .wrap(AuthMiddleware::new(CONFIG.jwt_secret.clone()))
                    // List employees, one cursor page at a time
                    .route("", web::get().to(handlers::get_employees))
                    .route("", web::post().to(handlers::create_employee))
                    .route("/{id}", web::get().to(handlers::get_employee))
                    .route("/{id}", web::delete().to(handlers::delete_employee)),
            ),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    #[actix_web::test]
    async fn test_health_is_public() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "OK");
    }

    #[actix_web::test]
    async fn test_openapi_lists_employee_paths() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/api/openapi.json").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert!(body["paths"]["/api/employees"]["get"].is_object());
        assert!(body["paths"]["/api/employees/{id}"]["delete"].is_object());
        assert!(body["components"]["schemas"]["Cursor"].is_object());
    }

    #[actix_web::test]
    async fn test_employees_require_token() {
        let app = test::init_service(App::new().configure(configure_routes)).await;
        let req = test::TestRequest::get().uri("/api/employees").to_request();
        let err = test::try_call_service(&app, req).await.unwrap_err();

        assert_eq!(err.as_response_error().status_code(), StatusCode::UNAUTHORIZED);
    }
}
