//! Cursor pagination response models.

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::EmployeeResponse;
use crate::pagination::{Cursor, PagingResult};

/// One page of employees plus the cursors to continue from
#[derive(Debug, Serialize, ToSchema)]
pub struct EmployeePageResponse {
    /// Whether the request was successful
    pub success: bool,
    /// Employees in the requested order, at most `limit` of them
    pub data: Vec<EmployeeResponse>,
    /// Cursors for the following and preceding pages
    pub cursor: Cursor,
}

impl From<PagingResult<EmployeeResponse>> for EmployeePageResponse {
    fn from(page: PagingResult<EmployeeResponse>) -> Self {
        Self {
            success: true,
            data: page.data,
            cursor: page.cursor,
        }
    }
}
