//! HTTP request handlers organized by domain.

pub mod employee_handler;
pub mod system_handler;

pub use employee_handler::*;
pub use system_handler::*;
