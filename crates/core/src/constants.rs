//! Constants used throughout the acuity core crate.
//!
//! Score ceilings and environment variable names live here so that the engine and the
//! binaries agree on them.

/// Maximum contribution of a single vital category.
pub const MAX_SUB_SCORE: u8 = 3;

/// Ceiling applied to the summed sub-scores.
pub const MAX_SEVERITY_SCORE: u8 = 10;

/// Default difference between two scores that counts as a change in trend.
pub const DEFAULT_TREND_THRESHOLD: f64 = 0.5;

/// Environment variable holding the default trend threshold.
pub const TREND_THRESHOLD_ENV: &str = "ACUITY_TREND_THRESHOLD";

/// Environment variable holding the gRPC listen address.
pub const GRPC_ADDR_ENV: &str = "ACUITY_ADDR";

/// Default gRPC listen address.
pub const DEFAULT_GRPC_ADDR: &str = "0.0.0.0:50051";

/// Environment variable holding the REST listen address.
pub const REST_ADDR_ENV: &str = "ACUITY_REST_ADDR";

/// Default REST listen address.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Environment variable holding a comma-separated list of allowed CORS origins.
pub const CORS_ORIGINS_ENV: &str = "CORS_ORIGINS";

/// Environment variable enabling gRPC server reflection.
pub const ENABLE_REFLECTION_ENV: &str = "ACUITY_ENABLE_REFLECTION";

/// Environment variable holding the API key required by the gRPC service.
pub const API_KEY_ENV: &str = "API_KEY";
