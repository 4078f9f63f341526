//! Services organized by domain concern.

pub mod employee_service;

pub use employee_service::EmployeeService;
