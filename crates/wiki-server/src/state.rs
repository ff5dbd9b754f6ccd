use std::sync::Arc;

use wiki_store::RevisionStore;

/// Shared handler state: the one store instance for the process.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RevisionStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn RevisionStore>) -> Self {
        Self { store }
    }
}
