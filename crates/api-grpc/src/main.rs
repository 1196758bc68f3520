//! Standalone gRPC API server binary.
//!
//! ## Purpose
//! Runs the gRPC server on its own. The workspace's main `acuity-run` binary runs both gRPC and
//! REST concurrently.

use std::net::SocketAddr;
use std::sync::Arc;
use tonic::transport::Server;
use tonic_reflection::server::Builder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use acuity_core::config::trend_threshold_from_env_value;
use acuity_core::constants::{
    API_KEY_ENV, DEFAULT_GRPC_ADDR, ENABLE_REFLECTION_ENV, GRPC_ADDR_ENV, TREND_THRESHOLD_ENV,
};
use acuity_core::CoreConfig;
use api_grpc::{pb::acuity_server::AcuityServer, AcuityService, ApiKeyInterceptor};
use api_shared::FILE_DESCRIPTOR_SET;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("api_grpc=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr: SocketAddr = std::env::var(GRPC_ADDR_ENV)
        .unwrap_or_else(|_| DEFAULT_GRPC_ADDR.into())
        .parse()?;
    let api_key = std::env::var(API_KEY_ENV)
        .map_err(|_| anyhow::anyhow!("{API_KEY_ENV} must be set for the gRPC server"))?;
    let cfg = Arc::new(CoreConfig::new(trend_threshold_from_env_value(
        std::env::var(TREND_THRESHOLD_ENV).ok(),
    )?)?);

    tracing::info!("-- Starting acuity gRPC on {}", addr);

    let mut server_builder = Server::builder().add_service(AcuityServer::with_interceptor(
        AcuityService::new(cfg),
        ApiKeyInterceptor::new(api_key),
    ));

    if std::env::var(ENABLE_REFLECTION_ENV).unwrap_or_else(|_| "false".to_string()) == "true" {
        let reflection_service = Builder::configure()
            .register_encoded_file_descriptor_set(FILE_DESCRIPTOR_SET)
            .build_v1()?;
        server_builder = server_builder.add_service(reflection_service);
        tracing::info!("gRPC server reflection enabled");
    } else {
        tracing::info!("gRPC server reflection disabled");
    }

    server_builder.serve(addr).await?;

    Ok(())
}
