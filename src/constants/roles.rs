//! Role and permission tables.
//!
//! Built once on first access and never mutated. Effective permissions are
//! resolved in [`Role::permissions`](crate::models::Role::permissions).

use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::models::{Permission, Role};

pub const ROLE_SUPER_ADMIN: &str = "super_admin";
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_HR_MANAGER: &str = "hr_manager";
pub const ROLE_EMPLOYEE: &str = "employee";

lazy_static! {
    /// Permissions granted directly to each role.
    pub static ref ROLE_PERMISSIONS: HashMap<Role, HashSet<Permission>> = HashMap::from([
        (Role::Employee, HashSet::from([Permission::EmployeeRead])),
        (
            Role::HrManager,
            HashSet::from([Permission::EmployeeCreate, Permission::EmployeeUpdate]),
        ),
        (Role::Admin, HashSet::from([Permission::EmployeeDelete])),
        (Role::SuperAdmin, HashSet::from([Permission::RoleManage])),
    ]);

    /// Subordinate roles each role implies.
    pub static ref IMPLIED_ROLES: HashMap<Role, Vec<Role>> = HashMap::from([
        (Role::SuperAdmin, vec![Role::Admin]),
        (Role::Admin, vec![Role::HrManager]),
        (Role::HrManager, vec![Role::Employee]),
        (Role::Employee, vec![]),
    ]);
}
