use std::sync::Arc;

use crate::database::{DatabaseError, Entity, Filter, Store};
use crate::services::patch::Merge;

/// The list / get / create / update / delete flow shared by every entity.
pub struct CrudService<T: Entity> {
    store: Arc<dyn Store<T>>,
}

impl<T: Entity> Clone for CrudService<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<T: Entity> CrudService<T> {
    pub fn new(store: Arc<dyn Store<T>>) -> Self {
        Self { store }
    }

    pub async fn find_all(&self) -> Result<Vec<T>, DatabaseError> {
        self.store.find_all().await
    }

    pub async fn find_by_id(&self, id: i64) -> Result<T, DatabaseError> {
        self.store.find_by_id(id).await
    }

    pub async fn find_where(&self, filters: &[Filter]) -> Result<Vec<T>, DatabaseError> {
        self.store.find_where(filters).await
    }

    pub async fn create(&self, entity: T) -> Result<T, DatabaseError> {
        let created = self.store.insert(&entity).await?;
        tracing::info!("Created {} {}", T::LABEL, created.id());
        Ok(created)
    }

    /// Read the row, overlay the request, write the whole row back.
    /// Concurrent updates to the same row are last-writer-wins.
    pub async fn update<R>(&self, id: i64, request: &R) -> Result<T, DatabaseError>
    where
        T: Merge<R>,
        R: Sync,
    {
        let existing = self.store.find_by_id(id).await?;
        let merged = existing.merge(request);
        self.store.update(&merged).await
    }

    /// Returns the row as it was before deletion.
    pub async fn delete(&self, id: i64) -> Result<T, DatabaseError> {
        let existing = self.store.find_by_id(id).await?;
        self.store.delete(id).await?;
        tracing::info!("Deleted {} {}", T::LABEL, id);
        Ok(existing)
    }

    pub async fn sum(&self, column: &'static str, filters: &[Filter]) -> Result<i64, DatabaseError> {
        self.store.sum(column, filters).await
    }
}
