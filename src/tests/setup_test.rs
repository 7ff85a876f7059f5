use sea_orm::{ConnectOptions, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tracing::debug;

use crate::{
    app::App, boot::read_config, config::Config, database::migrations::Migrator,
    environment::Environment, router::router,
};

static TRACING_INITIALIZED: std::sync::Once = std::sync::Once::new();

/// Initialize tracing for tests
fn init_tracing() {
    TRACING_INITIALIZED.call_once(|| {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

        tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(tracing_subscriber::fmt::layer().with_test_writer())
            .init();
    });
}

/// Opens a private, empty in-memory SQLite database.
///
/// The pool holds exactly one connection for its whole life; a second
/// connection would see a different database.
///
/// # Panics
///
/// Panics if SQLite cannot be opened.
pub async fn connect_in_memory() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:".to_string());
    options.sqlx_logging(false);
    options.max_connections(1);
    options.min_connections(1);

    sea_orm::Database::connect(options)
        .await
        .expect("Failed to open in-memory database")
}

/// An in-memory database with every migration applied.
///
/// # Panics
///
/// Panics if the migrations fail.
pub async fn test_database() -> DatabaseConnection {
    init_tracing();

    let db = connect_in_memory().await;
    Migrator::up(&db, None)
        .await
        .expect("Database migrations failed");
    db
}

/// Creates a test server around the full router.
///
/// Every call gets its own in-memory database, so tests never see each
/// other's jobs and may run in parallel.
///
/// # Panics
///
/// Panics if the test configuration cannot be read or the database cannot
/// be prepared.
pub async fn setup_test() -> TestUtils {
    init_tracing();

    debug!("Setting up test");

    let config = read_config(Environment::Test).expect("Failed to read test configuration");
    let db = test_database().await;

    let app = App {
        config: config.clone(),
        db: db.clone(),
    };

    let server = axum_test::TestServer::new(router(app)).expect("Failed to create test server");

    TestUtils { server, db, config }
}

/// A running test server plus direct access to its database.
pub struct TestUtils {
    pub server: axum_test::TestServer,
    pub db: DatabaseConnection,
    pub config: Config,
}

impl TestUtils {
    pub fn server(&self) -> &axum_test::TestServer {
        &self.server
    }
}
