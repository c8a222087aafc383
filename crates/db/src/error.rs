use mongodb::error::ErrorKind;

/// Server error code for `createUser` on an existing user.
pub const DUPLICATE_USER_CODE: i32 = 51003;
/// Index with the same name exists with different options.
pub const INDEX_OPTIONS_CONFLICT_CODE: i32 = 85;
/// Index with the same name exists with a different key pattern.
pub const INDEX_KEY_SPECS_CONFLICT_CODE: i32 = 86;

/// Errors returned by the admin commands.
///
/// Server-side command failures are lifted into [`DbError::Command`] so
/// callers can read the code without digging through the driver's error
/// kinds. Everything else stays wrapped as-is.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The server rejected a command.
    #[error("Command failed: {code_name} ({code}): {message}")]
    Command {
        code: i32,
        code_name: String,
        message: String,
    },

    /// A driver-level failure: network, authentication, server selection.
    #[error("Database error: {0}")]
    Mongo(#[source] mongodb::error::Error),

    /// A request could not be encoded as BSON.
    #[error("Failed to encode command: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),
}

impl DbError {
    /// `createUser` hit an existing user of the same name.
    pub fn is_duplicate_user(&self) -> bool {
        matches!(self, DbError::Command { code, .. } if *code == DUPLICATE_USER_CODE)
    }

    /// `createIndexes` hit an existing index with a conflicting definition.
    pub fn is_index_conflict(&self) -> bool {
        matches!(
            self,
            DbError::Command { code, .. }
                if *code == INDEX_OPTIONS_CONFLICT_CODE || *code == INDEX_KEY_SPECS_CONFLICT_CODE
        )
    }
}

impl From<mongodb::error::Error> for DbError {
    fn from(err: mongodb::error::Error) -> Self {
        if let ErrorKind::Command(cmd) = err.kind.as_ref() {
            return DbError::Command {
                code: cmd.code,
                code_name: cmd.code_name.clone(),
                message: cmd.message.clone(),
            };
        }
        DbError::Mongo(err)
    }
}
