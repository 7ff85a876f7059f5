use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tokio::sync::oneshot;
use tracing::debug;

use crate::config::DatabaseConfig;

pub mod migrations;
pub mod models;

/// Connects and starts applying pending migrations in the background.
///
/// The receiver resolves once the migrator has finished, so callers can keep
/// serving liveness probes while the schema is brought up to date.
pub async fn setup_database<AppMigrator: MigratorTrait>(
    db_config: &DatabaseConfig,
) -> Result<(DatabaseConnection, oneshot::Receiver<Result<(), DbErr>>), DbErr> {
    let connection = setup_database_connection(db_config).await?;
    let migrations_connection = connection.clone();

    let (sender, receiver) = oneshot::channel();

    tokio::spawn(async move {
        let migration_result = AppMigrator::up(&migrations_connection, None).await;
        let _ = sender.send(migration_result);
    });

    Ok((connection, receiver))
}

pub async fn setup_database_connection(
    db_config: &DatabaseConfig,
) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(db_config.url.clone());

    options.sqlx_logging(false);
    options.max_connections(db_config.pool_size);

    // Every connection to `sqlite::memory:` opens its own database
    if db_config.sqlite_path().is_none() {
        options.max_connections(1).min_connections(1);
    }

    debug!("Connecting to database at: {}", &db_config.url);

    sea_orm::Database::connect(options).await
}
