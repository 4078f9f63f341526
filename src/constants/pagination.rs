//! Pagination constants for list endpoints.

use crate::pagination::KeyKind;

/// Page size used when a request does not specify one.
pub const DEFAULT_PAGE_LIMIT: u64 = 100;

/// Upper bound on the page size a client may request.
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Field every cursor falls back to for ordering and tie-breaking.
pub const IDENTITY_KEY: &str = "_id";

/// Sort keys a client may ask the employee list to be ordered by, with
/// how their cursor values are read back.
pub const EMPLOYEE_SORT_KEYS: [(&str, KeyKind); 6] = [
    ("_id", KeyKind::Inferred),
    ("employee_number", KeyKind::String),
    ("last_name", KeyKind::String),
    ("department", KeyKind::String),
    ("hired_at", KeyKind::Date),
    ("created_at", KeyKind::Date),
];
