use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::config::AppConfig;
use crate::database::{DatabaseError, Entity, Filter, SqlValue, Store};
use crate::services::upload::{ObjectStorage, UploadError, UploadFile};

/// In-memory `Store` used by unit and router tests.
pub struct MemoryStore<T> {
    rows: RwLock<Vec<T>>,
    next_id: RwLock<i64>,
}

impl<T: Entity> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            next_id: RwLock::new(1),
        }
    }

    /// Insert a row keeping its id.
    pub async fn seed(&self, row: T) {
        let mut next = self.next_id.write().await;
        *next = (*next).max(row.id() + 1);
        self.rows.write().await.push(row);
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

/// First unique column `candidate` shares with another row.
fn unique_clash<T: Entity>(rows: &[T], candidate: &T) -> Option<&'static str> {
    T::UNIQUE.iter().copied().find(|column| {
        let value = candidate.value_of(column);
        rows.iter()
            .any(|row| row.id() != candidate.id() && row.value_of(column) == value)
    })
}

fn matches<T: Entity>(row: &T, filters: &[Filter]) -> bool {
    filters
        .iter()
        .all(|(column, value)| row.value_of(column).as_ref() == Some(value))
}

#[async_trait]
impl<T: Entity> Store<T> for MemoryStore<T> {
    async fn find_all(&self) -> Result<Vec<T>, DatabaseError> {
        Ok(self.rows.read().await.clone())
    }

    async fn find_where(&self, filters: &[Filter]) -> Result<Vec<T>, DatabaseError> {
        for (column, _) in filters {
            crate::database::repository::ensure_column::<T>(column)?;
        }
        Ok(self
            .rows
            .read()
            .await
            .iter()
            .filter(|row| matches(*row, filters))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<T, DatabaseError> {
        self.rows
            .read()
            .await
            .iter()
            .find(|row| row.id() == id)
            .cloned()
            .ok_or_else(T::not_found)
    }

    async fn find_one_where(&self, filters: &[Filter]) -> Result<Option<T>, DatabaseError> {
        Ok(self.find_where(filters).await?.into_iter().next())
    }

    async fn insert(&self, entity: &T) -> Result<T, DatabaseError> {
        let mut next = self.next_id.write().await;
        let mut rows = self.rows.write().await;
        let mut row = entity.clone();
        row.set_id(*next);
        if let Some(column) = unique_clash(&rows, &row) {
            return Err(DatabaseError::UniqueViolation(column.to_string()));
        }
        *next += 1;
        rows.push(row.clone());
        Ok(row)
    }

    async fn update(&self, entity: &T) -> Result<T, DatabaseError> {
        let mut rows = self.rows.write().await;
        if let Some(column) = unique_clash(&rows, entity) {
            return Err(DatabaseError::UniqueViolation(column.to_string()));
        }
        let slot = rows
            .iter_mut()
            .find(|row| row.id() == entity.id())
            .ok_or_else(T::not_found)?;
        *slot = entity.clone();
        Ok(entity.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.id() != id);
        if rows.len() == before {
            return Err(T::not_found());
        }
        Ok(())
    }

    async fn sum(&self, column: &'static str, filters: &[Filter]) -> Result<i64, DatabaseError> {
        crate::database::repository::ensure_column::<T>(column)?;
        Ok(self
            .find_where(filters)
            .await?
            .iter()
            .filter_map(|row| match row.value_of(column) {
                Some(SqlValue::Int(v)) => Some(v),
                _ => None,
            })
            .sum())
    }
}

/// Object storage double that records uploads and hands back predictable URLs.
#[derive(Default)]
pub struct FakeStorage {
    pub uploads: RwLock<Vec<String>>,
    pub fail: bool,
}

impl FakeStorage {
    pub fn failing() -> Self {
        Self {
            uploads: RwLock::new(Vec::new()),
            fail: true,
        }
    }
}

#[async_trait]
impl ObjectStorage for FakeStorage {
    async fn upload(&self, file: UploadFile) -> Result<String, UploadError> {
        if self.fail {
            return Err(UploadError::Rejected("storage offline".to_string()));
        }
        self.uploads.write().await.push(file.file_name.clone());
        Ok(format!("https://cdn.test/{}", file.file_name))
    }
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.security.jwt_secret = "test-secret".to_string();
    config.database.url = "postgres://localhost/unused".to_string();
    config
}

pub fn shared<T: Entity>() -> Arc<MemoryStore<T>> {
    Arc::new(MemoryStore::new())
}
