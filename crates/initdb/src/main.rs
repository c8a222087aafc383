//! `pathpilot-initdb` -- one-shot MongoDB bootstrap.
//!
//! Runs once when the database container starts: creates the application
//! user with `readWrite` on its database, creates the `2dsphere` index on
//! `mongoClient.location`, and prints one confirmation line to stdout.
//! Diagnostics go to stderr. Any failure exits non-zero without printing
//! the confirmation.
//!
//! # Environment variables
//!
//! | Variable            | Required | Default                     | Description                          |
//! |---------------------|----------|-----------------------------|--------------------------------------|
//! | `DATABASE_NAME`     | yes      | --                          | Database to initialize               |
//! | `DATABASE_USER`     | yes      | --                          | Username to create                   |
//! | `DATABASE_PASSWORD` | yes      | --                          | Password for that user               |
//! | `MONGODB_URI`       | no       | `mongodb://localhost:27017` | Administrative connection string     |

use anyhow::Context;
use pathpilot_db::MongoAdmin;
use pathpilot_initdb::bootstrap;
use pathpilot_initdb::config::{redact_uri, InitConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pathpilot_initdb=info,pathpilot_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = InitConfig::from_env()?;
    tracing::info!(
        db = %config.database_name,
        username = %config.username,
        uri = %redact_uri(&config.mongodb_uri),
        "Starting database bootstrap",
    );

    let client = pathpilot_db::create_client(&config.mongodb_uri)
        .await
        .context("Invalid MongoDB connection string")?;

    pathpilot_db::health_check(&client)
        .await
        .context("Database health check failed")?;
    tracing::info!("Database health check passed");

    let admin = MongoAdmin::new(client);
    let stdout = std::io::stdout();
    let report = bootstrap::run(&admin, &config, &mut stdout.lock()).await?;

    tracing::info!(
        db = %report.database_name,
        username = %report.username,
        index = %report.index_name,
        "Database bootstrap complete",
    );
    Ok(())
}
