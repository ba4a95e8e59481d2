//! PostgreSQL book store

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use super::{BookStore, StoreResult};
use crate::{
    config::DatabaseConfig,
    models::{Book, BookPatch, BookSummary},
};

#[derive(Clone)]
pub struct PgBookStore {
    pool: Pool<Postgres>,
}

impl PgBookStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Open a connection pool, optionally bringing the schema up to date
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect(&config.url)
            .await?;

        tracing::info!("Connected to database");

        if config.run_migrations {
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .map_err(sqlx::Error::from)?;
            tracing::info!("Database migrations completed");
        }

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn insert(&self, book: &Book) -> StoreResult<Book> {
        let row = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (id, name, year, author, summary, publisher,
                               page_count, read_page, finished, reading,
                               inserted_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING *
            "#,
        )
        .bind(&book.id)
        .bind(&book.name)
        .bind(book.year)
        .bind(&book.author)
        .bind(&book.summary)
        .bind(&book.publisher)
        .bind(book.page_count)
        .bind(book.read_page)
        .bind(book.finished)
        .bind(book.reading)
        .bind(book.inserted_at)
        .bind(book.updated_at)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn select_all(&self) -> StoreResult<Vec<BookSummary>> {
        let rows = sqlx::query_as::<_, BookSummary>("SELECT id, name, publisher FROM books")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn select_by_id(&self, id: &str) -> StoreResult<Option<Book>> {
        let row = sqlx::query_as::<_, Book>("SELECT * FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn exists(&self, id: &str) -> StoreResult<bool> {
        let row: Option<(String,)> = sqlx::query_as("SELECT id FROM books WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn update(&self, id: &str, patch: &BookPatch) -> StoreResult<()> {
        sqlx::query(
            r#"
            UPDATE books SET
                name = $2, year = $3, author = $4, summary = $5, publisher = $6,
                page_count = $7, read_page = $8, finished = $9, reading = $10,
                updated_at = $11
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&patch.name)
        .bind(patch.year)
        .bind(&patch.author)
        .bind(&patch.summary)
        .bind(&patch.publisher)
        .bind(patch.page_count)
        .bind(patch.read_page)
        .bind(patch.finished)
        .bind(patch.reading)
        .bind(patch.updated_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
