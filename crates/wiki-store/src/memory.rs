//! In-memory revision store.
//!
//! [`InMemoryRevisionStore`] keeps every document in an `IndexMap` behind a
//! single `RwLock`. Insertion order of the map is the first-write order of
//! titles. Data is lost when the store is dropped.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use wiki_types::{Revision, RevisionHistory, Selector, Timestamp};

use crate::clock::{Clock, SystemClock};
use crate::document::Document;
use crate::error::{StoreError, StoreResult};
use crate::traits::RevisionStore;

/// In-memory, `IndexMap`-based revision store.
pub struct InMemoryRevisionStore {
    clock: Arc<dyn Clock>,
    documents: RwLock<IndexMap<String, Document>>,
}

impl InMemoryRevisionStore {
    /// Create a new empty store stamped by the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a new empty store stamped by `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            documents: RwLock::new(IndexMap::new()),
        }
    }

    /// Number of documents.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    /// Returns `true` if no document has been written.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Drop every document.
    pub fn clear(&self) -> StoreResult<()> {
        self.write()?.clear();
        Ok(())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, IndexMap<String, Document>>> {
        self.documents.read().map_err(|e| {
            tracing::warn!("revision store lock poisoned on read");
            StoreError::LockPoisoned(e.to_string())
        })
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, IndexMap<String, Document>>> {
        self.documents.write().map_err(|e| {
            tracing::warn!("revision store lock poisoned on write");
            StoreError::LockPoisoned(e.to_string())
        })
    }
}

impl Default for InMemoryRevisionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RevisionStore for InMemoryRevisionStore {
    fn add_revision(&self, title: &str, content: &str) -> StoreResult<Revision> {
        let mut documents = self.write()?;
        let ts = self.clock.now();

        match documents.get_mut(title) {
            Some(doc) => {
                doc.record(ts, content);
                tracing::debug!(title, %ts, revisions = doc.len(), "recorded revision");
            }
            None => {
                documents.insert(title.to_string(), Document::new(ts, content));
                tracing::info!(title, %ts, "created document");
            }
        }

        Ok(Revision::new(title, ts, content))
    }

    fn list_titles(&self) -> StoreResult<Vec<String>> {
        Ok(self.read()?.keys().cloned().collect())
    }

    fn list_revisions(&self, title: &str) -> StoreResult<Option<RevisionHistory>> {
        let documents = self.read()?;
        Ok(documents.get(title).map(|doc| doc.history(title)))
    }

    fn get_revision(&self, title: &str, selector: &Selector) -> StoreResult<Option<Revision>> {
        let documents = self.read()?;
        let found = documents
            .get(title)
            .and_then(|doc| doc.revision(title, selector));
        tracing::debug!(title, %selector, found = found.is_some(), "revision lookup");
        Ok(found)
    }

    fn revision_as_of(&self, title: &str, at: Timestamp) -> StoreResult<Option<Revision>> {
        let documents = self.read()?;
        Ok(documents
            .get(title)
            .and_then(|doc| doc.as_of(at))
            .map(|(ts, content)| Revision::new(title, ts, content)))
    }
}

impl std::fmt::Debug for InMemoryRevisionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.documents.read().map(|docs| docs.len()).ok();
        f.debug_struct("InMemoryRevisionStore")
            .field("document_count", &count)
            .finish()
    }
}
