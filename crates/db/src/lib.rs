//! MongoDB access for the database bootstrap.
//!
//! Holds the connection helpers, the [`AdminCommands`] port the
//! initializer drives, and its MongoDB-backed implementation.

use mongodb::bson::doc;
use mongodb::options::ClientOptions;

pub mod admin;
pub mod error;

pub use admin::{AdminCommands, MongoAdmin};
pub use error::DbError;

pub type DbClient = mongodb::Client;

/// Application name reported to the server in the connection handshake.
const APP_NAME: &str = "pathpilot-initdb";

/// Create a client from a MongoDB connection string.
///
/// The driver connects lazily; use [`health_check`] to force a round trip.
pub async fn create_client(uri: &str) -> Result<DbClient, mongodb::error::Error> {
    let mut options = ClientOptions::parse(uri).await?;
    options.app_name = Some(APP_NAME.to_string());
    mongodb::Client::with_options(options)
}

/// Verify the server is reachable by running `ping` against `admin`.
pub async fn health_check(client: &DbClient) -> Result<(), DbError> {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 }, None)
        .await?;
    Ok(())
}
