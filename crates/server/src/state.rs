use std::{sync::Arc, time::Duration};

use models::{Recipe, Source};
use service::{storage::InMemoryStore, Deadline, RecipeStore, SourceStore};

/// Shared handler state. Holds no mutable data of its own; all records live in the stores.
#[derive(Clone)]
pub struct AppState {
    pub recipes: RecipeStore,
    pub sources: SourceStore,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(recipes: RecipeStore, sources: SourceStore, request_timeout: Duration) -> Self {
        Self { recipes, sources, request_timeout }
    }

    /// State backed by empty in-memory stores.
    pub fn in_memory(request_timeout: Duration) -> Self {
        Self::new(
            Arc::new(InMemoryStore::<Recipe>::new()),
            Arc::new(InMemoryStore::<Source>::new()),
            request_timeout,
        )
    }

    /// Budget for all store calls made while serving one request.
    pub fn deadline(&self) -> Deadline {
        Deadline::after(self.request_timeout)
    }
}
