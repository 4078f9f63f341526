//! JWT Claims model.

use serde::{Deserialize, Serialize};

use super::{Permission, Role};

/// JWT Claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // employee_id
    pub email: String,
    pub role: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    /// Role named in the token; unknown role names carry no permissions.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.role()
            .map(|role| role.has_permission(permission))
            .unwrap_or(false)
    }

    /// Check if the claims belong to the specified employee ID
    pub fn is_subject(&self, employee_id: &str) -> bool {
        self.sub == employee_id
    }
}
