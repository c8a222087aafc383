use pathpilot_db::DbError;

use crate::config::ConfigError;

/// Everything that can stop the initializer.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Database(#[from] DbError),

    /// Writing the confirmation line failed.
    #[error("Failed to write confirmation: {0}")]
    Output(#[from] std::io::Error),
}

pub type InitResult<T> = Result<T, InitError>;
