//! MongoDB collection names.

pub const COLLECTION_EMPLOYEES: &str = "employees";
