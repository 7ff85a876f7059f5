use std::{error::Error, io::ErrorKind, process};

use tracing::{debug, info};

use crate::{
    cli::MigrateAction, commands::migrate::handle_migration_command, config::Config,
    database::setup_database_connection,
};

/// Deletes the SQLite file and rebuilds the schema from the migrations.
pub async fn handle_db_reset_command<AppMigrator: sea_orm_migration::MigratorTrait>(
    config: &Config,
) {
    if let Err(e) = reset_database::<AppMigrator>(config).await {
        eprintln!("❌ Database reset failed: {e}");
        process::exit(1);
    }
}

async fn reset_database<AppMigrator: sea_orm_migration::MigratorTrait>(
    config: &Config,
) -> Result<(), Box<dyn Error>> {
    info!("🔄 Resetting database (this will delete every stored job!)...");

    let path = config
        .database
        .sqlite_path()
        .ok_or("Only file-backed SQLite databases can be reset")?;

    debug!("Database file: {}", path);

    match tokio::fs::remove_file(path).await {
        Ok(()) => info!("Deleted '{}'", path),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("'{}' does not exist, nothing to delete", path);
        }
        Err(e) => return Err(e.into()),
    }

    info!("Running migrations...");
    let db = setup_database_connection(&config.database).await?;

    handle_migration_command::<AppMigrator>(&db, MigrateAction::Up { steps: None }).await?;

    let _ = db.close().await;

    info!("✅ Database reset completed successfully");

    Ok(())
}
