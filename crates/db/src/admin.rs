//! Administrative commands issued by the bootstrap.

use async_trait::async_trait;
use mongodb::bson::{doc, to_bson, Document};
use mongodb::IndexModel;
use pathpilot_core::indexes::IndexSpec;
use pathpilot_core::users::NewDatabaseUser;

use crate::error::DbError;
use crate::DbClient;

/// The administrative surface the initializer needs from a database engine.
#[async_trait]
pub trait AdminCommands: Send + Sync {
    /// Create `user` in `db_name`. Fails if the user already exists.
    async fn create_user(&self, db_name: &str, user: &NewDatabaseUser) -> Result<(), DbError>;

    /// Create `spec` in `db_name` and return the index name the engine reports.
    async fn create_index(&self, db_name: &str, spec: &IndexSpec) -> Result<String, DbError>;
}

// ---------------------------------------------------------------------------
// Command builders
// ---------------------------------------------------------------------------

/// Build the `createUser` command document for `user`.
pub fn create_user_command(user: &NewDatabaseUser) -> Result<Document, DbError> {
    Ok(doc! {
        "createUser": user.username.as_str(),
        "pwd": user.password.as_str(),
        "roles": to_bson(&user.roles)?,
    })
}

/// Key document for `spec`, e.g. `{ location: "2dsphere" }`.
pub fn index_keys(spec: &IndexSpec) -> Document {
    let mut keys = Document::new();
    keys.insert(spec.field.clone(), spec.kind.as_str());
    keys
}

// ---------------------------------------------------------------------------
// MongoDB adapter
// ---------------------------------------------------------------------------

/// [`AdminCommands`] backed by a live MongoDB client.
#[derive(Clone)]
pub struct MongoAdmin {
    client: DbClient,
}

impl MongoAdmin {
    pub fn new(client: DbClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AdminCommands for MongoAdmin {
    async fn create_user(&self, db_name: &str, user: &NewDatabaseUser) -> Result<(), DbError> {
        let command = create_user_command(user)?;
        self.client
            .database(db_name)
            .run_command(command, None)
            .await?;
        tracing::debug!(db = %db_name, username = %user.username, "createUser acknowledged");
        Ok(())
    }

    async fn create_index(&self, db_name: &str, spec: &IndexSpec) -> Result<String, DbError> {
        let model = IndexModel::builder().keys(index_keys(spec)).build();
        let result = self
            .client
            .database(db_name)
            .collection::<Document>(&spec.collection)
            .create_index(model, None)
            .await?;
        tracing::debug!(
            db = %db_name,
            collection = %spec.collection,
            index = %result.index_name,
            "createIndexes acknowledged",
        );
        Ok(result.index_name)
    }
}
