use std::sync::Arc;

use tracing::info;

use super::domain::{
    CatalogItem, ItemId, ItemSubmission, MissingItemFields, ResourceFacets, ResourceQuery,
    ResourceSearch,
};
use super::repository::{ItemRepository, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error(transparent)]
    MissingFields(#[from] MissingItemFields),
    #[error("not found")]
    NotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Catalog operations over an [`ItemRepository`].
pub struct CatalogService<R> {
    repository: Arc<R>,
}

impl<R> CatalogService<R>
where
    R: ItemRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn create(&self, submission: ItemSubmission) -> Result<CatalogItem, CatalogError> {
        let fields = submission.validate()?;
        let item = self.repository.insert(fields)?;
        info!(item_id = item.id.0, object_type = %item.fields.object_type, "catalog item created");
        Ok(item)
    }

    /// Ids that are not numeric cannot exist and report as not found.
    pub fn get(&self, raw_id: &str) -> Result<CatalogItem, CatalogError> {
        let id = raw_id
            .trim()
            .parse::<u64>()
            .map(ItemId)
            .map_err(|_| CatalogError::NotFound)?;
        self.repository.fetch(id)?.ok_or(CatalogError::NotFound)
    }

    pub fn search(&self, query: &ResourceQuery) -> Result<ResourceSearch, CatalogError> {
        let filter = query.filter();
        let results = self.repository.search(&filter)?;
        let facets = ResourceFacets::from_items(&results);
        Ok(ResourceSearch { results, facets })
    }
}
