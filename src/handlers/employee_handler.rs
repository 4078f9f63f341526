//! Employee handlers: cursor-paginated listing and basic CRUD.

use actix_web::{web, HttpRequest, HttpResponse};
use log::{debug, info};
use validator::Validate;

use crate::constants::{
    CODE_FORBIDDEN, ERR_CANNOT_DELETE_YOURSELF, MSG_EMPLOYEE_CREATED, MSG_EMPLOYEE_DELETED,
    MSG_EMPLOYEE_FOUND,
};
use crate::errors::ApiError;
use crate::middleware::{authorize, require_permission};
use crate::models::{
    ApiResponse, CreateEmployeeRequest, EmployeeListQuery, EmployeePageResponse,
    EmployeeResponse, Permission, Role,
};
use crate::services::EmployeeService;
use crate::validators::validation_errors_to_api_error;

/// List employees one page at a time
///
/// Pass the `afterCursor` of a response as `after` to get the next page, or
/// its `beforeCursor` as `before` to get the previous one. Keep `sort`,
/// `order` and the filters unchanged while paging.
#[utoipa::path(
    get,
    path = "/api/employees",
    tag = "Employees",
    params(EmployeeListQuery),
    responses(
        (status = 200, description = "One page of employees", body = EmployeePageResponse),
        (status = 400, description = "Invalid cursor, sort key or parameter", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 403, description = "Forbidden", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_employees(
    req: HttpRequest,
    employee_service: web::Data<EmployeeService>,
    query: web::Query<EmployeeListQuery>,
) -> Result<HttpResponse, ApiError> {
    authorize(&req, Permission::EmployeeRead)?;
    query.validate().map_err(validation_errors_to_api_error)?;

    let page = employee_service.list_employees(&query).await?;
    debug!("Returning {} employee(s)", page.data.len());

    Ok(HttpResponse::Ok().json(EmployeePageResponse::from(page)))
}

/// Get a specific employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 400, description = "Invalid employee ID", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 404, description = "Employee not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_employee(
    req: HttpRequest,
    employee_service: web::Data<EmployeeService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    authorize(&req, Permission::EmployeeRead)?;

    let employee = employee_service.get_employee(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        MSG_EMPLOYEE_FOUND,
        EmployeeResponse::from(employee),
    )))
}

/// Create an employee
///
/// Assigning any role other than `employee` also requires the
/// `role:manage` permission.
#[utoipa::path(
    post,
    path = "/api/employees",
    tag = "Employees",
    request_body = CreateEmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = EmployeeResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 403, description = "Forbidden", body = crate::models::ErrorResponse),
        (status = 409, description = "Email or employee number already in use", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_employee(
    req: HttpRequest,
    employee_service: web::Data<EmployeeService>,
    body: web::Json<CreateEmployeeRequest>,
) -> Result<HttpResponse, ApiError> {
    let claims = authorize(&req, Permission::EmployeeCreate)?;
    body.validate().map_err(validation_errors_to_api_error)?;

    let role = body.role.as_deref().and_then(Role::parse).unwrap_or_default();
    if role != Role::Employee {
        require_permission(&claims, Permission::RoleManage)?;
    }

    let employee = employee_service.create_employee(body.into_inner()).await?;
    info!("Employee {} created by {}", employee.employee_number, claims.sub);

    Ok(HttpResponse::Created().json(ApiResponse::success(
        MSG_EMPLOYEE_CREATED,
        EmployeeResponse::from(employee),
    )))
}

/// Delete an employee
///
/// Callers cannot delete their own record.
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    tag = "Employees",
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted"),
        (status = 400, description = "Invalid employee ID", body = crate::models::ErrorResponse),
        (status = 401, description = "Unauthorized", body = crate::models::ErrorResponse),
        (status = 403, description = "Forbidden", body = crate::models::ErrorResponse),
        (status = 404, description = "Employee not found", body = crate::models::ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_employee(
    req: HttpRequest,
    employee_service: web::Data<EmployeeService>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let claims = authorize(&req, Permission::EmployeeDelete)?;
    let id = path.into_inner();

    if claims.is_subject(&id) {
        return Err(ApiError::forbidden(CODE_FORBIDDEN, ERR_CANNOT_DELETE_YOURSELF));
    }

    employee_service.delete_employee(&id).await?;
    info!("Employee {} deleted by {}", id, claims.sub);

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message(MSG_EMPLOYEE_DELETED)))
}
