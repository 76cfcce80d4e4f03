//! Catalog service: list, lookup, sort and create

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::book::{with_status, Book, Collection, Record, SortField, SortOrder},
    repository::CatalogStore,
};

use super::sorting::sort_records;

/// Result of [`CatalogService::create`]
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    Created,
    /// The id is taken; carries the record already stored under it
    AlreadyExists(Record),
}

#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// Full collection, as stored
    pub async fn list(&self) -> AppResult<Collection> {
        Ok(self.store.load().await?)
    }

    /// Stored record for `book_id`, with its derived status
    pub async fn get(&self, book_id: &str) -> AppResult<Record> {
        let mut collection = self.store.load().await?;
        collection
            .shift_remove(book_id)
            .map(with_status)
            .ok_or_else(|| AppError::NotFound("book not found".to_string()))
    }

    /// All records ordered by `field`; ids are not part of the output.
    pub async fn sort(&self, field: SortField, order: SortOrder) -> AppResult<Vec<Record>> {
        let collection = self.store.load().await?;
        let records = collection.into_values().collect();
        Ok(sort_records(records, field, order))
    }

    /// Store `book` unless its id is already taken.
    pub async fn create(&self, book: Book) -> AppResult<CreateOutcome> {
        let mut collection = self.store.load().await?;

        if let Some(existing) = collection.get(&book.id) {
            tracing::info!(book_id = %book.id, "Book already in catalog, nothing stored");
            return Ok(CreateOutcome::AlreadyExists(existing.clone()));
        }

        let status = book.status();
        let (id, record) = book
            .into_record()
            .map_err(|e| AppError::Internal(format!("failed to encode book: {}", e)))?;
        collection.insert(id.clone(), record);
        self.store.save(&collection).await?;

        tracing::info!(book_id = %id, %status, "Book created");
        Ok(CreateOutcome::Created)
    }
}
