//! Book record service
//!
//! Validates incoming book data, derives `finished`, and drives the
//! persistence collaborator. Validation always runs before the store is
//! touched; update and delete check for the record first so that a missing
//! id is reported as not found rather than as a store failure.

use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput, BookPatch, BookSummary},
    repository::BookStore,
};

pub const NAME_REQUIRED: &str = "name required";
pub const READ_PAGE_EXCEEDS_PAGE_COUNT: &str = "readPage exceeds pageCount";

/// Name must be present and non-empty
fn check_name(input: &BookInput) -> AppResult<()> {
    match input.name.as_deref() {
        Some(name) if !name.is_empty() => Ok(()),
        _ => Err(AppError::Validation(NAME_REQUIRED.to_string())),
    }
}

/// Pages read can never go past the page count
fn check_progress(input: &BookInput) -> AppResult<()> {
    if input.read_page > input.page_count {
        return Err(AppError::Validation(READ_PAGE_EXCEEDS_PAGE_COUNT.to_string()));
    }
    Ok(())
}

/// Run every rule in order; the first failure wins
pub fn validate_input(input: &BookInput) -> AppResult<()> {
    check_name(input)?;
    check_progress(input)?;
    input.validate().map_err(|errors| {
        let fields = errors.field_errors();
        let message = ["page_count", "read_page"]
            .iter()
            .filter_map(|field| fields.get(*field))
            .flat_map(|errs| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| errors.to_string());
        AppError::Validation(message)
    })
}

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    /// Create a book and return its generated id
    pub async fn create(&self, input: BookInput) -> AppResult<String> {
        if let Err(e) = validate_input(&input) {
            tracing::warn!("Book create rejected: {}", e);
            return Err(e);
        }

        let id = Uuid::new_v4().simple().to_string();
        let book = Book::create(id, input, Utc::now());

        let stored = self.store.insert(&book).await.map_err(|e| {
            tracing::error!("Book insert failed: {}", e);
            AppError::from(e)
        })?;

        tracing::info!("Book created: id={} name={:?}", stored.id, stored.name);
        Ok(stored.id)
    }

    /// List every book as an `id`/`name`/`publisher` summary
    pub async fn list(&self) -> AppResult<Vec<BookSummary>> {
        let books = self.store.select_all().await.map_err(|e| {
            tracing::error!("Book listing failed: {}", e);
            AppError::from(e)
        })?;
        tracing::debug!("Listed {} books", books.len());
        Ok(books)
    }

    /// Fetch a full record. A failed lookup is reported as not found.
    pub async fn get_by_id(&self, id: &str) -> AppResult<Book> {
        match self.store.select_by_id(id).await {
            Ok(Some(book)) => Ok(book),
            Ok(None) => Err(not_found(id)),
            Err(e) => {
                tracing::warn!("Book lookup for {} failed: {}", id, e);
                Err(not_found(id))
            }
        }
    }

    /// Replace every mutable field of an existing book
    pub async fn update(&self, id: &str, input: BookInput) -> AppResult<()> {
        if let Err(e) = validate_input(&input) {
            tracing::warn!("Book update rejected for {}: {}", id, e);
            return Err(e);
        }

        self.ensure_exists(id).await?;

        let patch = BookPatch::from_input(input, Utc::now());
        self.store.update(id, &patch).await.map_err(|e| {
            tracing::error!("Book update failed for {}: {}", id, e);
            AppError::from(e)
        })?;

        tracing::info!("Book updated: id={}", id);
        Ok(())
    }

    /// Hard-delete an existing book
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.ensure_exists(id).await?;

        self.store.delete(id).await.map_err(|e| {
            tracing::error!("Book delete failed for {}: {}", id, e);
            AppError::from(e)
        })?;

        tracing::info!("Book deleted: id={}", id);
        Ok(())
    }

    async fn ensure_exists(&self, id: &str) -> AppResult<()> {
        let exists = self.store.exists(id).await.map_err(|e| {
            tracing::error!("Existence check failed for {}: {}", id, e);
            AppError::from(e)
        })?;
        if !exists {
            tracing::warn!("Book {} not found", id);
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Book {} not found", id))
}
