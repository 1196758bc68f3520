//! # API gRPC
//!
//! gRPC server implementation for acuity.
//!
//! Handles:
//! - gRPC service setup and API-key authentication
//! - Service implementations using `acuity-core` for scoring
//! - gRPC-specific concerns (interceptors, tonic integration)
//!
//! Uses `api-shared` for common types and utilities.

#![warn(rust_2018_idioms)]

pub use service::{pb, AcuityService, ApiKeyInterceptor};

pub mod service;
