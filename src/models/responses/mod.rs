//! Response models for API endpoints.

pub mod api;
pub mod employee;
pub mod pagination;

pub use api::*;
pub use employee::*;
pub use pagination::*;
