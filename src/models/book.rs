//! Book model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Full book record
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Opaque identifier assigned at creation
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    /// Total number of pages
    pub page_count: i32,
    /// Pages read so far
    pub read_page: i32,
    /// Derived: `read_page == page_count` at time of write
    pub finished: bool,
    pub reading: bool,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Lightweight projection used when listing books
#[derive(Debug, Clone, PartialEq, Serialize, FromRow, ToSchema)]
pub struct BookSummary {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

/// Create / update book request.
///
/// Service-controlled fields (`id`, `finished`, timestamps) are not part of the
/// payload; if a caller sends them they are ignored.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookInput {
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "pageCount must be non-negative"))]
    pub page_count: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "readPage must be non-negative"))]
    pub read_page: i32,
    #[serde(default)]
    pub reading: bool,
}

/// Column values written by an update. Carries neither `id` nor `inserted_at`.
#[derive(Debug, Clone, PartialEq)]
pub struct BookPatch {
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    pub page_count: i32,
    pub read_page: i32,
    pub finished: bool,
    pub reading: bool,
    pub updated_at: DateTime<Utc>,
}

/// A book is finished when every page has been read
pub fn is_finished(page_count: i32, read_page: i32) -> bool {
    page_count == read_page
}

impl Book {
    /// Build a new record from a validated input
    pub fn create(id: String, input: BookInput, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name.unwrap_or_default(),
            year: input.year,
            author: input.author,
            summary: input.summary,
            publisher: input.publisher,
            page_count: input.page_count,
            read_page: input.read_page,
            finished: is_finished(input.page_count, input.read_page),
            reading: input.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Apply an update patch in place, leaving `id` and `inserted_at` untouched
    pub fn apply(&mut self, patch: &BookPatch) {
        self.name = patch.name.clone();
        self.year = patch.year;
        self.author = patch.author.clone();
        self.summary = patch.summary.clone();
        self.publisher = patch.publisher.clone();
        self.page_count = patch.page_count;
        self.read_page = patch.read_page;
        self.finished = patch.finished;
        self.reading = patch.reading;
        self.updated_at = patch.updated_at;
    }

    pub fn summary(&self) -> BookSummary {
        BookSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            publisher: self.publisher.clone(),
        }
    }
}

impl BookPatch {
    /// Build a patch from a validated input
    pub fn from_input(input: BookInput, now: DateTime<Utc>) -> Self {
        Self {
            name: input.name.unwrap_or_default(),
            year: input.year,
            author: input.author,
            summary: input.summary,
            publisher: input.publisher,
            page_count: input.page_count,
            read_page: input.read_page,
            finished: is_finished(input.page_count, input.read_page),
            reading: input.reading,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_input_ignores_service_fields() {
        let input: BookInput = serde_json::from_value(json!({
            "id": "forged",
            "name": "Dune",
            "pageCount": 10,
            "readPage": 3,
            "finished": true,
            "insertedAt": "2000-01-01T00:00:00Z"
        }))
        .unwrap();

        let book = Book::create("abc".into(), input, Utc::now());
        assert_eq!(book.id, "abc");
        assert!(!book.finished);
    }

    #[test]
    fn test_input_defaults() {
        let input: BookInput = serde_json::from_value(json!({ "name": "Dune" })).unwrap();
        assert_eq!(input.page_count, 0);
        assert_eq!(input.read_page, 0);
        assert!(!input.reading);
        assert!(input.year.is_none());
    }

    #[test]
    fn test_negative_pages_rejected_by_range() {
        let input = BookInput {
            name: Some("Dune".into()),
            page_count: -1,
            read_page: -5,
            ..Default::default()
        };
        let errors = input.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("page_count"));
        assert!(fields.contains_key("read_page"));
    }

    #[test]
    fn test_book_serializes_camel_case() {
        let now = Utc::now();
        let book = Book::create(
            "abc".into(),
            BookInput {
                name: Some("Dune".into()),
                page_count: 412,
                read_page: 412,
                ..Default::default()
            },
            now,
        );
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(value["pageCount"], 412);
        assert_eq!(value["readPage"], 412);
        assert_eq!(value["finished"], true);
        assert!(value.get("insertedAt").is_some());
        assert!(value.get("updatedAt").is_some());
        assert!(value.get("page_count").is_none());
    }

    #[test]
    fn test_apply_keeps_identity_and_insertion_time() {
        let inserted = Utc::now();
        let mut book = Book::create(
            "abc".into(),
            BookInput {
                name: Some("Before".into()),
                page_count: 10,
                read_page: 2,
                ..Default::default()
            },
            inserted,
        );
        let later = inserted + chrono::Duration::seconds(5);
        let patch = BookPatch::from_input(
            BookInput {
                name: Some("After".into()),
                page_count: 4,
                read_page: 4,
                ..Default::default()
            },
            later,
        );
        book.apply(&patch);

        assert_eq!(book.id, "abc");
        assert_eq!(book.name, "After");
        assert!(book.finished);
        assert_eq!(book.inserted_at, inserted);
        assert_eq!(book.updated_at, later);
    }
}
