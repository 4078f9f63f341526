use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use utoipa::ToSchema;

use crate::constants::{
    IMPLIED_ROLES, ROLE_ADMIN, ROLE_EMPLOYEE, ROLE_HR_MANAGER, ROLE_PERMISSIONS, ROLE_SUPER_ADMIN,
};

/// Roles for role-based access control
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    HrManager,
    #[default]
    Employee,
}

/// Actions a role may be allowed to perform
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
pub enum Permission {
    #[serde(rename = "employee:read")]
    EmployeeRead,
    #[serde(rename = "employee:create")]
    EmployeeCreate,
    #[serde(rename = "employee:update")]
    EmployeeUpdate,
    #[serde(rename = "employee:delete")]
    EmployeeDelete,
    #[serde(rename = "role:manage")]
    RoleManage,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Permission::EmployeeRead => write!(f, "employee:read"),
            Permission::EmployeeCreate => write!(f, "employee:create"),
            Permission::EmployeeUpdate => write!(f, "employee:update"),
            Permission::EmployeeDelete => write!(f, "employee:delete"),
            Permission::RoleManage => write!(f, "role:manage"),
        }
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::SuperAdmin => ROLE_SUPER_ADMIN,
            Role::Admin => ROLE_ADMIN,
            Role::HrManager => ROLE_HR_MANAGER,
            Role::Employee => ROLE_EMPLOYEE,
        }
    }

    /// Parse a role name, returning `None` for unknown roles.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            ROLE_SUPER_ADMIN => Some(Role::SuperAdmin),
            ROLE_ADMIN => Some(Role::Admin),
            ROLE_HR_MANAGER => Some(Role::HrManager),
            ROLE_EMPLOYEE => Some(Role::Employee),
            _ => None,
        }
    }

    /// This role plus every role it transitively implies.
    pub fn with_implied(&self) -> Vec<Role> {
        let mut seen = vec![*self];
        let mut pending = vec![*self];

        while let Some(role) = pending.pop() {
            for implied in IMPLIED_ROLES.get(&role).into_iter().flatten() {
                if !seen.contains(implied) {
                    seen.push(*implied);
                    pending.push(*implied);
                }
            }
        }

        seen
    }

    /// Effective permissions, including those inherited from implied roles.
    pub fn permissions(&self) -> HashSet<Permission> {
        self.with_implied()
            .iter()
            .filter_map(|role| ROLE_PERMISSIONS.get(role))
            .flatten()
            .copied()
            .collect()
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}
