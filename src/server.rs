//! HTTP server initialization and runtime setup.
//!
//! Handles database connections, migrations, image storage setup and the
//! Axum server lifecycle.

use crate::application::services::{AnimalService, ImageService, SessionService};
use crate::config::Config;
use crate::infrastructure::persistence::{PgAnimalRepository, PgKeeperRepository};
use crate::infrastructure::storage::LocalImageStore;
use crate::routes::app_service;
use crate::state::AppState;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Connects the PostgreSQL pool using the configured pool settings.
///
/// # Errors
///
/// Returns an error if the database cannot be reached within
/// `db_connect_timeout`.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")
}

/// Builds the shared application state from a connected pool.
pub async fn build_state(config: &Config, pool: PgPool) -> Result<AppState> {
    let pool = Arc::new(pool);

    let animal_repository = Arc::new(PgAnimalRepository::new(pool.clone()));
    let keeper_repository = Arc::new(PgKeeperRepository::new(pool));
    let image_store = Arc::new(
        LocalImageStore::open(&config.image_dir)
            .await
            .context("Failed to open image store")?,
    );

    Ok(AppState::new(
        Arc::new(AnimalService::new(animal_repository, image_store.clone())),
        Arc::new(ImageService::new(image_store)),
        Arc::new(SessionService::new(
            keeper_repository,
            config.token_signing_secret.clone(),
        )),
        config.max_image_bytes,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool
/// - Apply migrations
/// - Image store directory
/// - Axum HTTP server with graceful shutdown on Ctrl+C
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - The image directory cannot be created
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = connect_pool(&config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;
    tracing::info!("Migrations applied");

    let state = build_state(&config, pool).await?;

    let app = app_service(state, Path::new(&config.image_dir));

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
