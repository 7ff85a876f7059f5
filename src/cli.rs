use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server (default)
    Serve,
    /// Database migration commands
    Migrate {
        #[command(subcommand)]
        action: MigrateAction,
    },
    /// Database management commands
    Db {
        #[command(subcommand)]
        action: Option<DbAction>,
    },
    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum DbAction {
    /// Open the SQLite database with the sqlite3 shell
    Console,
    /// Delete the database file, then run all migrations
    Reset,
}

#[derive(Subcommand)]
pub enum MigrateAction {
    /// Run migrations up
    Up {
        /// Number of migrations to run (default: all)
        #[arg(short, long)]
        steps: Option<u32>,
    },
    /// Run migrations down
    Down {
        /// Number of migrations to rollback (default: 1)
        #[arg(short, long, default_value = "1")]
        steps: u32,
    },
    /// Show migration status
    Status,
    /// Roll back every migration, then apply them all again
    Reset,
    /// Reapply recent migrations (down then up)
    Reapply {
        /// Number of migrations to reapply (default: 1)
        #[arg(short, long, default_value = "1")]
        steps: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_serve() {
        let cli = Cli::try_parse_from(["dlsched"]).unwrap();

        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parses_migrate_down_steps() {
        let cli = Cli::try_parse_from(["dlsched", "migrate", "down", "--steps", "2"]).unwrap();

        assert!(matches!(
            cli.command,
            Some(Commands::Migrate {
                action: MigrateAction::Down { steps: 2 }
            })
        ));
    }

    #[test]
    fn test_db_without_action() {
        let cli = Cli::try_parse_from(["dlsched", "db"]).unwrap();

        assert!(matches!(cli.command, Some(Commands::Db { action: None })));
    }
}
