use std::{env, process, str::FromStr as _};

use clap::Parser as _;
use config_rs::{Config as ConfigRs, ConfigError};
use tracing::{debug, trace};

use crate::{
    app_info::AppInfo,
    cli::{Cli, Commands, DbAction},
    commands::{db, db_reset, migrate, serve, version},
    config::Config,
    database::migrations::Migrator,
    environment::Environment,
    setup_tracing::setup_tracing_for_command,
};

const ENVIRONMENT_VARIABLE: &str = "APP_ENVIRONMENT";

/// Parses the command line, loads configuration and runs the chosen command.
pub async fn boot(app_info: AppInfo) {
    let cli = Cli::parse();

    if matches!(cli.command, Some(Commands::Version)) {
        version::print_version_info(app_info);
        return;
    }

    let environment = set_environment();

    let app_config = match read_config(environment) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration for {environment}: {e}");
            process::exit(1);
        }
    };

    setup_tracing_for_command(&cli.command, &app_config.tracing.log_level);

    debug!("Environment set to: {:?}", environment);
    trace!("Configuration loaded: {:?}", app_config);

    handle_command(environment, app_config, cli, app_info).await;
}

#[must_use]
pub fn set_environment() -> Environment {
    env::var(ENVIRONMENT_VARIABLE)
        .ok()
        .and_then(|s| Environment::from_str(&s).ok())
        .unwrap_or_default()
}

/// Reads `config/<environment>.*`, then overlays `APP_*` variables.
///
/// Nested keys are separated by a double underscore: `APP_SERVER__PORT=9000`.
pub fn read_config(environment: Environment) -> Result<Config, ConfigError> {
    let config_file_name = environment.config_file_name();

    trace!("Reading configuration from: {}", config_file_name);

    ConfigRs::builder()
        .add_source(config_rs::File::with_name(&config_file_name))
        .add_source(
            config_rs::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

pub async fn handle_command(
    environment: Environment,
    config: Config,
    cli: Cli,
    app_info: AppInfo,
) {
    match cli.command {
        Some(Commands::Migrate { action }) => {
            migrate::handle_migrate_command::<Migrator>(&config, action).await;
        }
        Some(Commands::Db { action }) => match action {
            Some(DbAction::Console) | None => {
                db::handle_db_console_command(&config);
            }
            Some(DbAction::Reset) => {
                db_reset::handle_db_reset_command::<Migrator>(&config).await;
            }
        },
        Some(Commands::Version) => {
            version::print_version_info(app_info);
        }
        Some(Commands::Serve) | None => {
            serve::handle_serve_command::<Migrator>(environment, config).await;
        }
    }
}
