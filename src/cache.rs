use crate::api::ApiClient;
use crate::errors::ApiError;
use crate::models::{Book, Customer};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Books and customers backing the sale form's selection lists.
#[derive(Debug, Clone, Default)]
pub struct DropdownLists {
    pub books: Vec<Book>,
    pub customers: Vec<Customer>,
}

/// `generation` is bumped by every invalidation, always under the write
/// lock, so a refresh that raced a write can tell its lists are stale.
#[derive(Debug, Default)]
pub struct DropdownCache {
    lists: RwLock<Option<DropdownLists>>,
    generation: AtomicU64,
}

impl DropdownCache {
    /// Fetches both lists concurrently and replaces the cached copy. On
    /// failure the previous copy stays in place. Lists fetched across an
    /// invalidation are returned but not cached.
    pub async fn refresh(&self, api: &ApiClient) -> Result<DropdownLists, ApiError> {
        let generation = self.generation.load(Ordering::Acquire);
        let books = api.books();
        let customers = api.customers();
        let (books, customers) = tokio::try_join!(books.list(), customers.list())?;

        info!(
            books = books.len(),
            customers = customers.len(),
            "dropdown cache refreshed"
        );
        let lists = DropdownLists { books, customers };
        self.store(lists.clone(), generation).await;
        Ok(lists)
    }

    async fn store(&self, lists: DropdownLists, generation: u64) -> bool {
        let mut slot = self.lists.write().await;
        if self.generation.load(Ordering::Acquire) != generation {
            debug!("discarding dropdown lists fetched before an invalidation");
            return false;
        }
        *slot = Some(lists);
        true
    }

    /// Cached lists, fetched only if nothing has been loaded yet.
    pub async fn snapshot_or_refresh(&self, api: &ApiClient) -> Result<DropdownLists, ApiError> {
        if let Some(lists) = self.lists.read().await.as_ref() {
            return Ok(lists.clone());
        }
        self.refresh(api).await
    }

    pub async fn invalidate(&self) {
        let mut slot = self.lists.write().await;
        self.generation.fetch_add(1, Ordering::AcqRel);
        *slot = None;
    }
}

pub fn book_option_label(book: &Book) -> String {
    format!("{} ({}) - ${:.2}", book.title, book.author, book.price)
}

pub fn customer_option_label(customer: &Customer) -> String {
    format!("{} ({})", customer.name, customer.email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_labels() {
        let book = Book {
            id: 1,
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            price: 9.5,
        };
        assert_eq!(book_option_label(&book), "Dune (Frank Herbert) - $9.50");

        let customer = Customer {
            id: 2,
            name: "Ada".into(),
            email: "ada@example.com".into(),
        };
        assert_eq!(customer_option_label(&customer), "Ada (ada@example.com)");
    }

    #[tokio::test]
    async fn failed_refresh_keeps_cache_empty() {
        let cache = DropdownCache::default();
        // Nothing listens on port 9; the connection is refused.
        let api = ApiClient::new("http://127.0.0.1:9");
        assert!(cache.refresh(&api).await.is_err());
        assert!(cache.lists.read().await.is_none());
    }

    #[tokio::test]
    async fn lists_fetched_before_invalidate_are_not_cached() {
        let cache = DropdownCache::default();
        let seen = cache.generation.load(Ordering::Acquire);
        cache.invalidate().await;

        assert!(!cache.store(DropdownLists::default(), seen).await);
        assert!(cache.lists.read().await.is_none());

        let current = cache.generation.load(Ordering::Acquire);
        assert!(cache.store(DropdownLists::default(), current).await);
        assert!(cache.lists.read().await.is_some());
    }
}
