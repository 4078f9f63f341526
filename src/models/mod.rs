//! Data models organized by type.

pub mod claims;
pub mod employee;
pub mod requests;
pub mod responses;
pub mod role;

pub use claims::*;
pub use employee::*;
pub use requests::*;
pub use responses::*;
pub use role::*;
