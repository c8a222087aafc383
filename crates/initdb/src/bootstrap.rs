//! One-shot database bootstrap.
//!
//! Creates the application user with `readWrite` on its own database,
//! then the `2dsphere` index on `mongoClient.location`, then prints a
//! single confirmation line. Any failure stops the run before the line is
//! printed; nothing is retried.

use std::io::Write;

use pathpilot_core::indexes::IndexSpec;
use pathpilot_core::users::NewDatabaseUser;
use pathpilot_db::AdminCommands;

use crate::config::InitConfig;
use crate::error::InitResult;

/// What a successful run provisioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootstrapReport {
    pub database_name: String,
    pub username: String,
    pub index_name: String,
}

/// The exact line written to stdout on success.
pub fn confirmation_line(database_name: &str) -> String {
    format!("User created successfully for database: {database_name}")
}

/// Provision the user and location index described by `config`.
pub async fn run<A, W>(admin: &A, config: &InitConfig, out: &mut W) -> InitResult<BootstrapReport>
where
    A: AdminCommands + ?Sized,
    W: Write,
{
    let db_name = config.database_name.as_str();

    let user = NewDatabaseUser::read_write(&config.username, &config.password, db_name);
    if let Err(e) = admin.create_user(db_name, &user).await {
        if e.is_duplicate_user() {
            tracing::error!(db = %db_name, username = %user.username, "User already exists");
        } else {
            tracing::error!(db = %db_name, username = %user.username, error = %e, "createUser failed");
        }
        return Err(e.into());
    }
    tracing::info!(db = %db_name, username = %user.username, "User created");

    let spec = IndexSpec::location_2dsphere();
    let index_name = match admin.create_index(db_name, &spec).await {
        Ok(name) => name,
        Err(e) => {
            if e.is_index_conflict() {
                tracing::error!(
                    db = %db_name,
                    collection = %spec.collection,
                    field = %spec.field,
                    error = %e,
                    "Conflicting index already exists",
                );
            } else {
                tracing::error!(db = %db_name, collection = %spec.collection, error = %e, "createIndex failed");
            }
            return Err(e.into());
        }
    };
    tracing::info!(
        db = %db_name,
        collection = %spec.collection,
        index = %index_name,
        "Geospatial index created",
    );

    writeln!(out, "{}", confirmation_line(db_name))?;
    out.flush()?;

    Ok(BootstrapReport {
        database_name: config.database_name.clone(),
        username: user.username,
        index_name,
    })
}
