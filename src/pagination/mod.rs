//! Cursor-based pagination over MongoDB collections.
//!
//! Records are paged with opaque composite-key cursors instead of skip/limit,
//! so deep pages stay cheap and concurrent inserts never shift page borders.

pub mod cursor;
pub mod paginator;
pub mod query;

#[cfg(test)]
pub(crate) mod memory;

pub use cursor::{CursorError, KeyKind};
pub use paginator::{Cursor, Order, PageSource, PaginationError, Paginator, PagingResult};
