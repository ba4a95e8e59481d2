//! Book endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    api::BookJson,
    error::AppResult,
    models::book::{Book, BookInput, BookSummary},
    AppState,
};

const SUCCESS: &str = "success";

/// Successful result of a book operation
#[derive(Debug)]
pub enum BookOutcome {
    Created { id: String },
    Found(Book),
    FoundSummaries(Vec<BookSummary>),
    Updated,
    Deleted,
}

impl BookOutcome {
    pub fn status_code(&self) -> StatusCode {
        match self {
            BookOutcome::Created { .. } => StatusCode::CREATED,
            _ => StatusCode::OK,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookIdData {
    pub book_id: String,
}

#[derive(Serialize, ToSchema)]
pub struct BookCreatedResponse {
    pub status: String,
    pub message: String,
    pub data: BookIdData,
}

#[derive(Serialize, ToSchema)]
pub struct BookListData {
    pub books: Vec<BookSummary>,
}

#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    pub status: String,
    pub data: BookListData,
}

#[derive(Serialize, ToSchema)]
pub struct BookData {
    pub book: Book,
}

#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub status: String,
    pub data: BookData,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub status: String,
    pub message: String,
}

impl IntoResponse for BookOutcome {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            BookOutcome::Created { id } => (
                status,
                Json(BookCreatedResponse {
                    status: SUCCESS.to_string(),
                    message: "Book added".to_string(),
                    data: BookIdData { book_id: id },
                }),
            )
                .into_response(),
            BookOutcome::Found(book) => (
                status,
                Json(BookResponse {
                    status: SUCCESS.to_string(),
                    data: BookData { book },
                }),
            )
                .into_response(),
            BookOutcome::FoundSummaries(books) => (
                status,
                Json(BookListResponse {
                    status: SUCCESS.to_string(),
                    data: BookListData { books },
                }),
            )
                .into_response(),
            BookOutcome::Updated => (status, message("Book updated")).into_response(),
            BookOutcome::Deleted => (status, message("Book deleted")).into_response(),
        }
    }
}

fn message(text: &str) -> Json<MessageResponse> {
    Json(MessageResponse {
        status: SUCCESS.to_string(),
        message: text.to_string(),
    })
}

/// Add a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 201, description = "Book added", body = BookCreatedResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    BookJson(input): BookJson<BookInput>,
) -> AppResult<BookOutcome> {
    let id = state.services.books.create(input).await?;
    Ok(BookOutcome::Created { id })
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Book summaries", body = BookListResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<BookOutcome> {
    let books = state.services.books.list().await?;
    Ok(BookOutcome::FoundSummaries(books))
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{bookId}",
    tag = "books",
    params(("bookId" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<BookOutcome> {
    let book = state.services.books.get_by_id(&book_id).await?;
    Ok(BookOutcome::Found(book))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{bookId}",
    tag = "books",
    params(("bookId" = String, Path, description = "Book ID")),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
    BookJson(input): BookJson<BookInput>,
) -> AppResult<BookOutcome> {
    state.services.books.update(&book_id, input).await?;
    Ok(BookOutcome::Updated)
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{bookId}",
    tag = "books",
    params(("bookId" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse),
        (status = 500, description = "Store failure", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(book_id): Path<String>,
) -> AppResult<BookOutcome> {
    state.services.books.delete(&book_id).await?;
    Ok(BookOutcome::Deleted)
}
