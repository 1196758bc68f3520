//! Standalone REST API server binary.
//!
//! ## Purpose
//! Runs the REST API server on its own.
//!
//! ## Intended use
//! Useful for development and for front-ends that only need HTTP (with OpenAPI/Swagger UI). The
//! workspace's main `acuity-run` binary runs both gRPC and REST concurrently.

use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use acuity_core::config::{cors_origins_from_env_value, trend_threshold_from_env_value};
use acuity_core::constants::{
    CORS_ORIGINS_ENV, DEFAULT_REST_ADDR, REST_ADDR_ENV, TREND_THRESHOLD_ENV,
};
use acuity_core::CoreConfig;
use api_rest::{router, AppState};

/// Main entry point for the acuity REST API server
///
/// # Environment Variables
/// - `ACUITY_REST_ADDR`: Server address (default: "0.0.0.0:3000")
/// - `ACUITY_TREND_THRESHOLD`: Default trend threshold (default: 0.5)
/// - `CORS_ORIGINS`: Comma-separated allowed origins (default: any)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var(REST_ADDR_ENV).unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let cfg = Arc::new(CoreConfig::new(trend_threshold_from_env_value(
        std::env::var(TREND_THRESHOLD_ENV).ok(),
    )?)?);
    let cors_origins = cors_origins_from_env_value(std::env::var(CORS_ORIGINS_ENV).ok());

    tracing::info!("-- Starting acuity REST API on {}", addr);

    let app = router(AppState::new(cfg), &cors_origins);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
