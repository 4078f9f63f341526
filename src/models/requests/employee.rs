//! Employee-related request models.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::validators::{
    validate_date, validate_employee_number, validate_order, validate_role, validate_status,
};

/// Query parameters for listing employees with cursor pagination, filters and search
#[derive(Debug, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmployeeListQuery {
    /// Cursor to resume after (next page)
    pub after: Option<String>,
    /// Cursor to resume before (previous page)
    pub before: Option<String>,
    /// Page size (default and maximum come from configuration)
    #[validate(range(min = 1, message = "Limit must be a positive integer"))]
    pub limit: Option<u64>,
    /// Sort direction: 'ASC' or 'DESC'
    #[validate(custom(function = "validate_order"))]
    pub order: Option<String>,
    /// Comma-separated sort keys, e.g. `last_name,hired_at`
    pub sort: Option<String>,
    /// Filter by department
    pub department: Option<String>,
    /// Filter by employment status
    #[validate(custom(function = "validate_status"))]
    pub status: Option<String>,
    /// Search by name, email or employee number
    pub search: Option<String>,
}

/// Request payload for creating an employee
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateEmployeeRequest {
    /// Company-issued employee number
    #[validate(
        length(min = 1, max = 20, message = "Employee number must be between 1 and 20 characters"),
        custom(function = "validate_employee_number")
    )]
    #[schema(example = "EMP-0042")]
    pub employee_number: String,
    #[validate(length(min = 1, max = 50, message = "First name must be between 1 and 50 characters"))]
    #[schema(example = "Jane")]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "Last name must be between 1 and 50 characters"))]
    #[schema(example = "Doe")]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "jane.doe@example.com")]
    pub email: String,
    #[validate(length(min = 1, max = 100, message = "Department must be between 1 and 100 characters"))]
    #[schema(example = "Engineering")]
    pub department: String,
    #[validate(length(min = 1, max = 100, message = "Position must be between 1 and 100 characters"))]
    #[schema(example = "Software Engineer")]
    pub position: String,
    /// Defaults to 'employee'
    #[validate(custom(function = "validate_role"))]
    #[schema(example = "employee")]
    pub role: Option<String>,
    /// Hire date in YYYY-MM-DD format
    #[validate(custom(function = "validate_date"))]
    #[schema(example = "2023-04-01")]
    pub hired_at: String,
    /// ObjectId of the reporting manager
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub manager_id: Option<String>,
}
