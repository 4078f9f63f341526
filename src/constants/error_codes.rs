//! Error code constants for API responses.
//!
//! These codes give API clients a machine-readable identifier for each
//! error, independent of the human-readable message.

// Validation errors
pub const CODE_VALIDATION_FAILED: &str = "VALIDATION_FAILED";
pub const CODE_INVALID_CURSOR: &str = "INVALID_CURSOR";
pub const CODE_INVALID_SORT_KEY: &str = "INVALID_SORT_KEY";

// Authentication errors
pub const CODE_AUTH_REQUIRED: &str = "AUTH_REQUIRED";
pub const CODE_INVALID_TOKEN: &str = "INVALID_TOKEN";

// Authorization errors
pub const CODE_FORBIDDEN: &str = "FORBIDDEN";

// Employee errors
pub const CODE_EMPLOYEE_NOT_FOUND: &str = "EMPLOYEE_NOT_FOUND";
pub const CODE_EMAIL_EXISTS: &str = "EMAIL_EXISTS";
pub const CODE_EMPLOYEE_NUMBER_EXISTS: &str = "EMPLOYEE_NUMBER_EXISTS";
pub const CODE_INVALID_EMPLOYEE_ID: &str = "INVALID_EMPLOYEE_ID";

// Generic errors
pub const CODE_INTERNAL_ERROR: &str = "INTERNAL_ERROR";
