//! Employee-related response models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Employee, EmploymentStatus, Role};

/// Employee data returned in API responses
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct EmployeeResponse {
    #[schema(example = "507f1f77bcf86cd799439011")]
    pub id: String,
    #[schema(example = "EMP-0042")]
    pub employee_number: String,
    #[schema(example = "Jane")]
    pub first_name: String,
    #[schema(example = "Doe")]
    pub last_name: String,
    #[schema(example = "jane.doe@example.com")]
    pub email: String,
    #[schema(example = "Engineering")]
    pub department: String,
    #[schema(example = "Software Engineer")]
    pub position: String,
    pub role: Role,
    pub status: EmploymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    pub hired_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id.map(|id| id.to_hex()).unwrap_or_default(),
            employee_number: employee.employee_number,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            department: employee.department,
            position: employee.position,
            role: employee.role,
            status: employee.status,
            manager_id: employee.manager_id.map(|id| id.to_hex()),
            hired_at: DateTime::from_timestamp_millis(employee.hired_at.timestamp_millis())
                .unwrap_or_default(),
            created_at: DateTime::from_timestamp_millis(employee.created_at.timestamp_millis())
                .unwrap_or_default(),
        }
    }
}
