//! Database connection and HTTP listener startup.

use dioxus_logger::tracing;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::server::{config::Config, error::Error, model::app::AppState, router};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Serve the API on `0.0.0.0:{port}` until the process is stopped
///
/// Cross-origin requests are allowed from any origin.
pub async fn serve(config: &Config, db: DatabaseConnection) -> Result<(), Error> {
    let app = router::routes()
        .with_state(AppState::from(db))
        .layer(CorsLayer::permissive());

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;

    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
