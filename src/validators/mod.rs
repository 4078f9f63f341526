//! Request validation helpers and custom field validators.

pub mod common;
pub mod employee;

pub use common::*;
pub use employee::*;
