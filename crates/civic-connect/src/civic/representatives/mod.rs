//! Elected-representative resolution for a ZIP code or street address.
//!
//! Requests run through three tiers: synthetic data when no credential is configured, the
//! live civic directory when one is, and a reduced synthetic roster when the live call fails
//! without an answer. Upstream rejections are surfaced to the caller instead of downgraded.

pub mod directory;
pub mod domain;
pub mod normalizer;
mod resolver;
pub mod router;
mod synthetic;

pub use directory::{CivicDirectory, DirectoryError, GoogleCivicClient};
pub use domain::{
    LocationQuery, OfficialRecord, ResolutionError, ResolutionKey, ResolutionResult,
    ResolutionSource,
};
pub use normalizer::{normalize, normalize_payload};
pub use resolver::RepresentativeResolver;
pub use router::representatives_router;
