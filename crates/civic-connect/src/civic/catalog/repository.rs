use super::domain::{CatalogItem, ItemFields, ItemId, ResourceFilter};

/// Storage abstraction for catalog items so routes can run against any backend.
pub trait ItemRepository: Send + Sync {
    fn insert(&self, fields: ItemFields) -> Result<CatalogItem, RepositoryError>;
    fn fetch(&self, id: ItemId) -> Result<Option<CatalogItem>, RepositoryError>;
    fn search(&self, filter: &ResourceFilter) -> Result<Vec<CatalogItem>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
