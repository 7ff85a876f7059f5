use std::{cmp, error::Error, process};

use sea_orm::DatabaseConnection;
use sea_orm_migration::{Migration, MigratorTrait};

use crate::{cli::MigrateAction, config::Config, database::setup_database_connection};

pub async fn handle_migrate_command<AppMigrator: MigratorTrait>(
    config: &Config,
    action: MigrateAction,
) {
    let result = match setup_database_connection(&config.database).await {
        Ok(db) => handle_migration_command::<AppMigrator>(&db, action).await,
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("❌ Migration failed: {e}");
        process::exit(1);
    }
}

pub async fn handle_migration_command<AppMigrator: MigratorTrait>(
    db: &DatabaseConnection,
    action: MigrateAction,
) -> Result<(), Box<dyn Error>> {
    match action {
        MigrateAction::Up { steps } => migrate_up::<AppMigrator>(db, steps).await,
        MigrateAction::Down { steps } => migrate_down::<AppMigrator>(db, steps).await,
        MigrateAction::Status => print_status::<AppMigrator>(db).await,
        MigrateAction::Reset => reset::<AppMigrator>(db).await,
        MigrateAction::Reapply { steps } => reapply::<AppMigrator>(db, steps).await,
    }
}

fn print_migrations<'a>(migrations: impl IntoIterator<Item = &'a Migration>) {
    for migration in migrations {
        println!("  📄 {}", migration.name());
    }
    println!();
}

async fn migrate_up<AppMigrator: MigratorTrait>(
    db: &DatabaseConnection,
    steps: Option<u32>,
) -> Result<(), Box<dyn Error>> {
    let pending = AppMigrator::get_pending_migrations(db).await?;

    if pending.is_empty() {
        println!("✅ All migrations are already up to date");
        return Ok(());
    }

    let count = steps.map_or(pending.len(), |steps| {
        cmp::min(steps as usize, pending.len())
    });
    println!("Running {count} of {} pending migration(s) up:", pending.len());
    print_migrations(&pending[..count]);

    AppMigrator::up(db, steps).await?;
    println!("✅ Migrations completed successfully");
    Ok(())
}

async fn migrate_down<AppMigrator: MigratorTrait>(
    db: &DatabaseConnection,
    steps: u32,
) -> Result<(), Box<dyn Error>> {
    let applied = AppMigrator::get_applied_migrations(db).await?;

    if applied.is_empty() {
        println!("❌ No migrations to roll back");
        return Ok(());
    }

    let count = cmp::min(steps as usize, applied.len());
    println!("Rolling back {count} migration(s):");
    print_migrations(applied[applied.len() - count..].iter().rev());

    AppMigrator::down(db, Some(steps)).await?;
    println!("✅ Rollback completed successfully");
    Ok(())
}

async fn print_status<AppMigrator: MigratorTrait>(
    db: &DatabaseConnection,
) -> Result<(), Box<dyn Error>> {
    let pending = AppMigrator::get_pending_migrations(db).await?;
    if pending.is_empty() {
        println!("✅ All migrations are up to date");
    } else {
        println!("📋 Pending migrations:");
        for migration in &pending {
            println!("  - {}", migration.name());
        }
    }

    let applied = AppMigrator::get_applied_migrations(db).await?;
    println!("📋 Applied migrations:");
    for migration in &applied {
        println!("  ✓ {}", migration.name());
    }
    Ok(())
}

async fn reset<AppMigrator: MigratorTrait>(
    db: &DatabaseConnection,
) -> Result<(), Box<dyn Error>> {
    println!("🔄 Resetting database (this will drop all data!)...");

    let applied = AppMigrator::get_applied_migrations(db).await?;
    let num_applied = u32::try_from(applied.len()).map_err(|_| "Too many migrations to reset")?;

    if num_applied > 0 {
        println!("Rolling back {num_applied} applied migration(s):");
        print_migrations(applied.iter().rev());
        AppMigrator::down(db, Some(num_applied)).await?;
        println!("✅ All migrations rolled back");
    } else {
        println!("No migrations to roll back");
    }

    let pending = AppMigrator::get_pending_migrations(db).await?;
    println!("Running all {} migration(s) up:", pending.len());
    print_migrations(&pending);

    AppMigrator::up(db, None).await?;
    println!("✅ Database reset completed successfully");
    Ok(())
}

async fn reapply<AppMigrator: MigratorTrait>(
    db: &DatabaseConnection,
    steps: u32,
) -> Result<(), Box<dyn Error>> {
    let applied = AppMigrator::get_applied_migrations(db).await?;

    if applied.is_empty() {
        println!("❌ No migrations to reapply");
        return Ok(());
    }

    let count = cmp::min(steps as usize, applied.len());
    println!("🔄 Reapplying {count} migration(s):");
    print_migrations(applied[applied.len() - count..].iter().rev());

    AppMigrator::down(db, Some(steps)).await?;
    println!("✅ Rollback completed");
    AppMigrator::up(db, Some(steps)).await?;
    println!("✅ Reapply completed successfully");
    Ok(())
}
