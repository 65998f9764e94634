use crate::config::ServerConfig;
use catalog::{BookStore, InMemoryBookStore};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Book store (shared across requests)
    pub store: Arc<dyn BookStore>,

    /// When this state was built, for uptime reporting
    pub started_at: Instant,
}

impl ServerState {
    /// Create new server state with an in-memory store, seeded unless the
    /// configuration says otherwise.
    pub fn new(config: ServerConfig) -> Self {
        let store: Arc<dyn BookStore> = if config.seed_books {
            Arc::new(InMemoryBookStore::seeded())
        } else {
            Arc::new(InMemoryBookStore::new())
        };
        tracing::debug!(books = store.len(), "book store initialized");
        Self::with_store(config, store)
    }

    /// Create server state around an existing store
    pub fn with_store(config: ServerConfig, store: Arc<dyn BookStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
