use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use super::Role;

/// Employment status of an employee
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    #[default]
    Active,
    OnLeave,
    Terminated,
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmploymentStatus::Active => write!(f, "active"),
            EmploymentStatus::OnLeave => write!(f, "on_leave"),
            EmploymentStatus::Terminated => write!(f, "terminated"),
        }
    }
}

impl EmploymentStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "active" => Some(EmploymentStatus::Active),
            "on_leave" => Some(EmploymentStatus::OnLeave),
            "terminated" => Some(EmploymentStatus::Terminated),
            _ => None,
        }
    }
}

/// Employee document stored in MongoDB
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Employee {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub employee_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub status: EmploymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<ObjectId>,
    pub hired_at: DateTime,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
