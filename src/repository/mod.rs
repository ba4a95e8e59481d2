//! Repository layer: persistence collaborators for book records

pub mod books;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Book, BookPatch, BookSummary};

pub use books::PgBookStore;
pub use memory::MemoryBookStore;

/// Errors raised by a book store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// The store answered with a row shape we cannot decode
    #[error("Malformed response: {0}")]
    Malformed(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::TypeNotFound { .. } => StoreError::Malformed(err.to_string()),
            other => StoreError::Database(other),
        }
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable storage for book records.
///
/// Implementations provide their own per-row atomicity; callers do not
/// coordinate between calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Persist a full record and return the row as stored
    async fn insert(&self, book: &Book) -> StoreResult<Book>;

    /// All books, projected to `id`, `name` and `publisher`, in store order
    async fn select_all(&self) -> StoreResult<Vec<BookSummary>>;

    async fn select_by_id(&self, id: &str) -> StoreResult<Option<Book>>;

    /// Existence check; reads only the `id` column
    async fn exists(&self, id: &str) -> StoreResult<bool>;

    async fn update(&self, id: &str, patch: &BookPatch) -> StoreResult<()>;

    async fn delete(&self, id: &str) -> StoreResult<()>;

    /// Release underlying resources at shutdown
    async fn close(&self) {}
}
