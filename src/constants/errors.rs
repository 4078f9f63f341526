//! Error message constants used throughout the application.

// Authentication errors
pub const ERR_AUTH_REQUIRED: &str = "Authentication required";
pub const ERR_INVALID_AUTH_HEADER: &str = "Missing or invalid authorization header";
pub const ERR_INVALID_TOKEN: &str = "Invalid or expired token";

// Authorization errors
pub const ERR_PERMISSION_DENIED: &str = "You don't have permission to perform this action";
pub const ERR_CANNOT_DELETE_YOURSELF: &str = "You cannot delete your own employee record";

// Employee errors
pub const ERR_EMPLOYEE_NOT_FOUND: &str = "Employee not found";
pub const ERR_INVALID_EMPLOYEE_ID: &str = "Invalid employee ID format";
pub const ERR_EMAIL_EXISTS: &str = "Email already registered to another employee";
pub const ERR_EMPLOYEE_NUMBER_EXISTS: &str = "Employee number already in use";
pub const ERR_FAILED_FETCH_EMPLOYEE: &str = "Failed to fetch created employee";

// Validation errors
pub const ERR_VALIDATION_FAILED: &str = "Validation failed";
pub const ERR_INVALID_ORDER: &str = "Order must be either 'ASC' or 'DESC'";
pub const ERR_INVALID_STATUS: &str = "Status must be one of 'active', 'on_leave' or 'terminated'";
pub const ERR_INVALID_ROLE: &str =
    "Role must be one of 'super_admin', 'admin', 'hr_manager' or 'employee'";
pub const ERR_INVALID_EMPLOYEE_NUMBER: &str =
    "Employee number can only contain uppercase letters, digits and hyphens";
pub const ERR_INVALID_DATE_FORMAT: &str = "Date must be in YYYY-MM-DD format";
