//! Community resource catalog: item intake, lookup, and ZIP-scoped resource search.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

pub use domain::{
    CatalogItem, ItemFields, ItemId, ItemSubmission, MissingItemFields, ResourceFacets,
    ResourceFilter, ResourceQuery, ResourceSearch,
};
pub use repository::{ItemRepository, RepositoryError};
pub use router::catalog_router;
pub use service::{CatalogError, CatalogService};
