//! Business logic services

pub mod books;

use std::sync::Arc;

use crate::repository::BookStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BookService,
    store: Arc<dyn BookStore>,
}

impl Services {
    /// Create all services on top of the given store
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self {
            books: books::BookService::new(store.clone()),
            store,
        }
    }

    /// Whether the store answers an existence check. The answer itself is irrelevant.
    pub async fn is_ready(&self) -> bool {
        self.store.exists("").await.is_ok()
    }

    /// Release the store; called once at shutdown
    pub async fn shutdown(&self) {
        self.store.close().await;
    }
}
