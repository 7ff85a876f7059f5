use std::{
    io,
    net::{AddrParseError, SocketAddr},
    process,
};

use axum::{routing::get, Router};
use sea_orm_migration::MigratorTrait;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::{
    api::health_checks::ok,
    app::App,
    config::{Config, ServerConfig},
    database::setup_database,
    environment::Environment,
    router::router,
};

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("Invalid listen address: {0}")]
    InvalidAddress(#[from] AddrParseError),
    #[error("Database setup failed: {0}")]
    Database(#[from] sea_orm::DbErr),
    #[error("Database setup channel closed unexpectedly")]
    MigrationChannelClosed,
    #[error("Server error: {0}")]
    Io(#[from] io::Error),
}

pub async fn handle_serve_command<AppMigrator: MigratorTrait>(
    environment: Environment,
    config: Config,
) {
    if let Err(e) = serve::<AppMigrator>(environment, config).await {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn socket_addr(server: &ServerConfig) -> Result<SocketAddr, AddrParseError> {
    format!("{}:{}", server.host, server.port).parse()
}

async fn serve<AppMigrator: MigratorTrait>(
    environment: Environment,
    config: Config,
) -> Result<(), ServeError> {
    let addr = socket_addr(&config.server)?;

    // Answer liveness probes while migrations run
    let liveness_server_task = tokio::spawn(start_liveness_server(addr));

    let migrated = match setup_database::<AppMigrator>(&config.database).await {
        Ok((db, migration_receiver)) => match migration_receiver.await {
            Ok(Ok(())) => Ok(db),
            Ok(Err(e)) => Err(ServeError::Database(e)),
            Err(_) => Err(ServeError::MigrationChannelClosed),
        },
        Err(e) => Err(ServeError::Database(e)),
    };

    liveness_server_task.abort();
    let _ = liveness_server_task.await;

    let db = migrated?;
    info!("✅ Database is ready!");

    let app = App { config, db };

    start_server(router(app), addr, environment).await
}

async fn start_liveness_server(addr: SocketAddr) {
    let migration_router = Router::new().route("/liveness", get(ok));

    let result = match TcpListener::bind(addr).await {
        Ok(listener) => axum::serve(listener, migration_router).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!("Liveness server failed on {}: {}", addr, e);
    }
}

async fn start_server(
    router: Router,
    addr: SocketAddr,
    environment: Environment,
) -> Result<(), ServeError> {
    let listener = TcpListener::bind(addr).await?;

    info!("🌐 Server starting on http://{} ({})", addr, environment);
    axum::serve(listener, router).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr_from_config() {
        let server = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 8080,
        };

        assert_eq!(
            socket_addr(&server).unwrap(),
            SocketAddr::from(([127, 0, 0, 1], 8080))
        );
    }

    #[test]
    fn test_socket_addr_rejects_hostnames() {
        let server = ServerConfig {
            host: "localhost".to_string(),
            port: 8080,
        };

        assert!(socket_addr(&server).is_err());
    }
}
