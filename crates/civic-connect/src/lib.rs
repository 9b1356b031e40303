//! Civic engagement data for client applications: ZIP metadata, elected representatives,
//! and a community resource catalog, each exposed as an axum router.

pub mod civic;
pub mod config;
pub mod error;
pub mod telemetry;
