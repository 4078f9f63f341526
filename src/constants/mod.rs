//! Application constants module.
//!
//! Centralizes error codes, error and success messages, collection names,
//! pagination defaults and the role/permission tables.

pub mod collections;
pub mod error_codes;
pub mod errors;
pub mod messages;
pub mod pagination;
pub mod roles;

pub use collections::*;
pub use error_codes::*;
pub use errors::*;
pub use messages::*;
pub use pagination::*;
pub use roles::*;
