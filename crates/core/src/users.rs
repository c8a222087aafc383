//! Database user to provision.

use std::fmt;

use crate::roles::RoleGrant;

/// A user record to create through the engine's `createUser` command.
///
/// The password is held in clear only for the lifetime of the request;
/// [`fmt::Debug`] never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct NewDatabaseUser {
    pub username: String,
    pub password: String,
    pub roles: Vec<RoleGrant>,
}

impl NewDatabaseUser {
    /// A user holding `readWrite` on `db` and nothing else.
    pub fn read_write(
        username: impl Into<String>,
        password: impl Into<String>,
        db: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            roles: vec![RoleGrant::read_write(db)],
        }
    }
}

impl fmt::Debug for NewDatabaseUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewDatabaseUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("roles", &self.roles)
            .finish()
    }
}
