use std::net::SocketAddr;
use std::sync::Arc;
use tonic::transport::Server;
use tonic_reflection::server::Builder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use acuity_core::CoreConfig;
use acuity_core::config::{cors_origins_from_env_value, trend_threshold_from_env_value};
use acuity_core::constants::{
    API_KEY_ENV, CORS_ORIGINS_ENV, DEFAULT_GRPC_ADDR, DEFAULT_REST_ADDR, ENABLE_REFLECTION_ENV,
    GRPC_ADDR_ENV, REST_ADDR_ENV, TREND_THRESHOLD_ENV,
};
use api_grpc::{AcuityService, ApiKeyInterceptor, pb::acuity_server::AcuityServer};
use api_rest::{AppState, router};
use api_shared::FILE_DESCRIPTOR_SET;

/// Main entry point for the acuity application
///
/// Starts both gRPC and REST servers concurrently:
/// - gRPC server on port 50051 (configurable via ACUITY_ADDR)
/// - REST server on port 3000 (configurable via ACUITY_REST_ADDR)
///
/// The gRPC server requires authentication via x-api-key header.
/// The REST server is open, as the scoring engine holds no patient data.
///
/// # Environment Variables
/// - `ACUITY_ADDR`: gRPC server address (default: "0.0.0.0:50051")
/// - `ACUITY_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `ACUITY_TREND_THRESHOLD`: Default trend threshold (default: 0.5)
/// - `ACUITY_ENABLE_REFLECTION`: Set to "true" to enable gRPC reflection
/// - `CORS_ORIGINS`: Comma-separated allowed origins for REST (default: any)
/// - `API_KEY`: API key for gRPC authentication
///
/// # Returns
/// * `Ok(())` - If servers start and run successfully
/// * `Err(anyhow::Error)` - If configuration, server startup or runtime fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("acuity_run=info".parse()?)
                .add_directive("acuity_core=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("api_grpc=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let grpc_addr: SocketAddr = std::env::var(GRPC_ADDR_ENV)
        .unwrap_or_else(|_| DEFAULT_GRPC_ADDR.into())
        .parse()?;
    let rest_addr = std::env::var(REST_ADDR_ENV).unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let api_key = std::env::var(API_KEY_ENV)
        .map_err(|_| anyhow::anyhow!("{API_KEY_ENV} must be set for the gRPC server"))?;
    let cfg = Arc::new(CoreConfig::new(trend_threshold_from_env_value(
        std::env::var(TREND_THRESHOLD_ENV).ok(),
    )?)?);
    let cors_origins = cors_origins_from_env_value(std::env::var(CORS_ORIGINS_ENV).ok());

    tracing::info!("++ Starting acuity gRPC on {}", grpc_addr);
    tracing::info!("++ Starting acuity REST on {}", rest_addr);

    // Start REST server
    let rest_app = router(AppState::new(cfg.clone()), &cors_origins);
    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    let rest_server = tokio::spawn(async move { axum::serve(listener, rest_app).await });

    // Start gRPC server
    let mut grpc_builder = Server::builder().add_service(AcuityServer::with_interceptor(
        AcuityService::new(cfg),
        ApiKeyInterceptor::new(api_key),
    ));
    if std::env::var(ENABLE_REFLECTION_ENV).unwrap_or_else(|_| "false".to_string()) == "true" {
        let reflection_service = Builder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()?;
        grpc_builder = grpc_builder.add_service(reflection_service);
        tracing::info!("gRPC server reflection enabled");
    }
    let grpc_server = grpc_builder.serve(grpc_addr);

    // Run both
    let (rest_result, grpc_result) = tokio::join!(rest_server, grpc_server);
    rest_result??;
    grpc_result?;

    Ok(())
}
