use civic_connect::civic::catalog::{
    CatalogItem, ItemFields, ItemId, ItemRepository, RepositoryError, ResourceFilter,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local catalog storage; contents are lost on restart.
#[derive(Default, Clone)]
pub(crate) struct InMemoryItemRepository {
    sequence: Arc<AtomicU64>,
    items: Arc<Mutex<BTreeMap<ItemId, CatalogItem>>>,
}

impl InMemoryItemRepository {
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, BTreeMap<ItemId, CatalogItem>>, RepositoryError> {
        self.items
            .lock()
            .map_err(|_| RepositoryError::Unavailable("item store lock poisoned".to_string()))
    }
}

impl ItemRepository for InMemoryItemRepository {
    fn insert(&self, fields: ItemFields) -> Result<CatalogItem, RepositoryError> {
        let id = ItemId(self.sequence.fetch_add(1, Ordering::Relaxed) + 1);
        let item = CatalogItem { id, fields };
        self.lock()?.insert(id, item.clone());
        Ok(item)
    }

    fn fetch(&self, id: ItemId) -> Result<Option<CatalogItem>, RepositoryError> {
        Ok(self.lock()?.get(&id).cloned())
    }

    fn search(&self, filter: &ResourceFilter) -> Result<Vec<CatalogItem>, RepositoryError> {
        let guard = self.lock()?;
        Ok(filter.select(guard.values().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use civic_connect::civic::catalog::{ItemSubmission, ResourceQuery};

    fn fields(title: &str) -> ItemFields {
        ItemSubmission {
            object_type: Some("event".to_string()),
            title: Some(title.to_string()),
            ..ItemSubmission::default()
        }
        .validate()
        .expect("valid submission")
    }

    #[test]
    fn assigns_sequential_ids() {
        let repository = InMemoryItemRepository::default();
        let first = repository.insert(fields("one")).expect("insert");
        let second = repository.insert(fields("two")).expect("insert");
        assert_eq!(first.id, ItemId(1));
        assert_eq!(second.id, ItemId(2));
        assert_eq!(
            repository.fetch(ItemId(2)).expect("fetch").map(|item| item.fields.title),
            Some("two".to_string())
        );
        assert!(repository.fetch(ItemId(3)).expect("fetch").is_none());
    }

    #[test]
    fn search_applies_filter() {
        let repository = InMemoryItemRepository::default();
        repository.insert(fields("one")).expect("insert");
        repository.insert(fields("two")).expect("insert");

        let filter = ResourceQuery {
            limit: Some("1".to_string()),
            ..ResourceQuery::default()
        }
        .filter();
        assert_eq!(repository.search(&filter).expect("search").len(), 1);
    }
}
