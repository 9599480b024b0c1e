//! Role and permission constants, plus the in-memory role→permission table.
//!
//! Role names must match the seed data in the `users` table migration.
//! Sessions carry a role name; handlers gate on permissions, never on role
//! names directly.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_ANALYST: &str = "analyst";
pub const ROLE_VIEWER: &str = "viewer";

pub const PERM_SIMULATIONS_RUN: &str = "simulations:run";
pub const PERM_DOCUMENTS_GENERATE: &str = "documents:generate";
pub const PERM_DOCUMENTS_READ: &str = "documents:read";
pub const PERM_INSPECTIONS_SCHEDULE: &str = "inspections:schedule";
pub const PERM_CUSTOMERS_READ: &str = "customers:read";
pub const PERM_ADMIN: &str = "admin";

/// Permissions granted to each role.
///
/// Admins hold every permission. Analysts run the day-to-day portal
/// features. Viewers get read-only access.
pub fn role_permissions(role: &str) -> &'static [&'static str] {
    match role {
        ROLE_ADMIN => &[
            PERM_SIMULATIONS_RUN,
            PERM_DOCUMENTS_GENERATE,
            PERM_DOCUMENTS_READ,
            PERM_INSPECTIONS_SCHEDULE,
            PERM_CUSTOMERS_READ,
            PERM_ADMIN,
        ],
        ROLE_ANALYST => &[
            PERM_SIMULATIONS_RUN,
            PERM_DOCUMENTS_GENERATE,
            PERM_DOCUMENTS_READ,
            PERM_INSPECTIONS_SCHEDULE,
            PERM_CUSTOMERS_READ,
        ],
        ROLE_VIEWER => &[PERM_DOCUMENTS_READ, PERM_CUSTOMERS_READ],
        _ => &[],
    }
}

/// Whether `role` holds `permission`.
///
/// Unknown roles hold nothing.
pub fn role_has_permission(role: &str, permission: &str) -> bool {
    role_permissions(role).contains(&permission)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
