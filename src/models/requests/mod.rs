//! Request models for API endpoints.

pub mod employee;

pub use employee::*;
