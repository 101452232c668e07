//! StayHub server — booking engine for room inventory and pricing.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use stayhub_core::config::AppConfig;
use stayhub_core::error::AppError;
use stayhub_database::connection::DatabasePool;
use stayhub_database::repositories::{BookingRepository, CatalogRepository, InventoryRepository};
use stayhub_service::{AvailabilityService, BookingService, InventoryService, QuoteService};

#[tokio::main]
async fn main() {
    let env = std::env::var("STAYHUB_ENV").unwrap_or_else(|_| "development".to_string());
    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting StayHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Database connection + migrations ─────────────────────────
    let db = DatabasePool::connect(&config.database).await?;
    stayhub_database::migration::run_migrations(db.pool()).await?;

    // ── Repositories ─────────────────────────────────────────────
    let catalog = Arc::new(CatalogRepository::new(db.pool().clone()));
    let inventory_repo = Arc::new(InventoryRepository::new(db.pool().clone()));
    let booking_repo = Arc::new(BookingRepository::new(db.pool().clone()));

    // ── Services ─────────────────────────────────────────────────
    let availability = AvailabilityService::new(inventory_repo.clone());
    let inventory = InventoryService::new(inventory_repo.clone(), catalog.clone());
    let quotes = QuoteService::new(catalog.clone(), config.pricing.clone());
    let bookings = BookingService::new(booking_repo, inventory_repo);

    let state = stayhub_api::AppState {
        config: Arc::new(config.clone()),
        availability,
        inventory,
        quotes,
        bookings,
    };

    // ── HTTP server ──────────────────────────────────────────────
    let app = stayhub_api::build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("StayHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db.close().await;
    tracing::info!("StayHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
