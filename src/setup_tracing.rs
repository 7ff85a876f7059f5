use time::format_description::parse;
use tracing_subscriber::fmt::time::OffsetTime;

use crate::cli::Commands;

/// Default filter when `RUST_LOG` is not set.
///
/// Maintenance commands stay quiet; the server logs at the configured level.
#[must_use]
pub fn default_level<'a>(command: &Option<Commands>, server_log_level: &'a str) -> &'a str {
    match command {
        Some(Commands::Migrate { .. } | Commands::Db { .. }) => "warn",
        Some(Commands::Version) => "error",
        Some(Commands::Serve) | None => server_log_level,
    }
}

pub fn setup_tracing_for_command(command: &Option<Commands>, server_log_level: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| {
            tracing_subscriber::EnvFilter::new(default_level(command, server_log_level))
        })
        .add_directive("sea_orm_migration::migrator=warn".parse().expect("valid directive"));

    let timer_format = parse("[hour]:[minute]:[second].[subsecond digits:2]")
        .expect("valid time format description");

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_level(true)
        .with_ansi(true)
        .with_timer(OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or(time::UtcOffset::UTC),
            timer_format,
        ))
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_uses_configured_level() {
        assert_eq!(default_level(&None, "debug"), "debug");
        assert_eq!(default_level(&Some(Commands::Serve), "info"), "info");
    }

    #[test]
    fn test_maintenance_commands_are_quiet() {
        assert_eq!(default_level(&Some(Commands::Version), "info"), "error");
        assert_eq!(
            default_level(&Some(Commands::Db { action: None }), "info"),
            "warn"
        );
    }
}
