//! Repository layer for database operations.
//!
//! Services own the business rules; repositories own the MongoDB queries.

pub mod employee_repository;

pub use employee_repository::EmployeeRepository;
