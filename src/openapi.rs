use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::models::{
    CreateEmployeeRequest, EmployeePageResponse, EmployeeResponse, EmploymentStatus,
    ErrorResponse, HealthResponse, Permission, Role,
};
use crate::pagination::{Cursor, Order};

/// OpenAPI documentation for the Employee Directory API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Directory API",
        version = "1.0.0",
        description = "REST API for browsing and managing employee records with role-based access control and cursor pagination.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT"),
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
        (url = "http://0.0.0.0:8080", description = "Docker development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Employees", description = "Employee listing with cursor pagination, lookup, creation and removal")
    ),
    paths(
        crate::handlers::health_check,
        crate::handlers::get_employees,
        crate::handlers::get_employee,
        crate::handlers::create_employee,
        crate::handlers::delete_employee
    ),
    components(
        schemas(
            CreateEmployeeRequest,
            EmployeeResponse,
            EmployeePageResponse,
            Cursor,
            Order,
            Role,
            Permission,
            EmploymentStatus,
            ErrorResponse,
            HealthResponse
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

/// Security configuration for Bearer token authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT issued by the company identity service"))
                        .build(),
                ),
            );
        }
    }
}
