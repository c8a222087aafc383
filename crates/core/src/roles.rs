//! Well-known MongoDB role names and role grants.

use serde::Serialize;

/// Built-in role allowing reads and writes on every non-system collection
/// of one database.
pub const ROLE_READ_WRITE: &str = "readWrite";

/// One `(role, database)` pair as it appears in a `createUser.roles` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleGrant {
    pub role: String,
    pub db: String,
}

impl RoleGrant {
    pub fn new(role: impl Into<String>, db: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            db: db.into(),
        }
    }

    /// `readWrite` restricted to `db`.
    pub fn read_write(db: impl Into<String>) -> Self {
        Self::new(ROLE_READ_WRITE, db)
    }
}
