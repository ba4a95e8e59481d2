//! In-memory book store, used for development and tests

use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{BookStore, StoreError, StoreResult};
use crate::models::{Book, BookPatch, BookSummary};

/// Books kept in insertion order
#[derive(Clone, Default)]
pub struct MemoryBookStore {
    books: Arc<RwLock<IndexMap<String, Book>>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.books.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.books.read().await.is_empty()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn insert(&self, book: &Book) -> StoreResult<Book> {
        let mut books = self.books.write().await;
        if books.contains_key(&book.id) {
            return Err(StoreError::Conflict(format!("Book {} already exists", book.id)));
        }
        books.insert(book.id.clone(), book.clone());
        Ok(book.clone())
    }

    async fn select_all(&self) -> StoreResult<Vec<BookSummary>> {
        Ok(self.books.read().await.values().map(Book::summary).collect())
    }

    async fn select_by_id(&self, id: &str) -> StoreResult<Option<Book>> {
        Ok(self.books.read().await.get(id).cloned())
    }

    async fn exists(&self, id: &str) -> StoreResult<bool> {
        Ok(self.books.read().await.contains_key(id))
    }

    async fn update(&self, id: &str, patch: &BookPatch) -> StoreResult<()> {
        // Zero matching rows is not an error, same as an SQL UPDATE
        if let Some(book) = self.books.write().await.get_mut(id) {
            book.apply(patch);
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.books.write().await.shift_remove(id);
        Ok(())
    }
}
