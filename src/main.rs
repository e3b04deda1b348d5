//! Hotel Access API server
//!
//! Main application entry point

use std::error::Error;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use hotel_access::adapters::{
    app_router, create_pool, HotelAppState, JwtSessionValidator, PostgresEnrollmentReader,
    PostgresHotelReader, PostgresTicketReader,
};
use hotel_access::config::{AppConfig, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server);
    info!(environment = ?config.server.environment, "Starting hotel-access");

    let pool = create_pool(&config.database).await?;

    let state = HotelAppState::new(
        Arc::new(PostgresEnrollmentReader::new(pool.clone())),
        Arc::new(PostgresTicketReader::new(pool.clone())),
        Arc::new(PostgresHotelReader::new(pool.clone())),
    );
    let validator = Arc::new(JwtSessionValidator::new(&config.auth));

    let app = app_router(state, validator, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    info!("Shut down cleanly");
    Ok(())
}

/// JSON logs in production, human-readable otherwise. `RUST_LOG` wins over
/// the configured filter.
fn init_tracing(server: &ServerConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if server.is_production() {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler, run until killed.
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
