//! Success message constants used throughout the application.

pub const MSG_EMPLOYEE_FOUND: &str = "Employee found";
pub const MSG_EMPLOYEE_CREATED: &str = "Employee created successfully";
pub const MSG_EMPLOYEE_DELETED: &str = "Employee deleted successfully";
pub const MSG_SERVER_RUNNING: &str = "Server is running";
