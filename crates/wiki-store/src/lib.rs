//! Revision storage for the wiki.
//!
//! Documents are created by their first write and never deleted. Each write
//! is kept as a [`Revision`](wiki_types::Revision) keyed by its
//! second-resolution [`Timestamp`](wiki_types::Timestamp); earlier content is
//! never overwritten except by a later write landing in the same second.
//!
//! # Storage Backends
//!
//! All backends implement the [`RevisionStore`] trait:
//!
//! - [`InMemoryRevisionStore`] -- `IndexMap`-based store, the only backend
//!
//! # Design Rules
//!
//! 1. Titles are listed in first-write order.
//! 2. The latest marker is last-write-wins and lives beside the revision map,
//!    never inside it.
//! 3. Single-revision lookup is exact-match only; nearest-prior resolution
//!    is a separate operation.
//! 4. Reads and writes are serialized against each other by one lock.

pub mod clock;
pub mod document;
pub mod error;
pub mod memory;
pub mod seed;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use clock::{Clock, ManualClock, SystemClock};
pub use document::Document;
pub use error::{StoreError, StoreResult};
pub use memory::InMemoryRevisionStore;
pub use seed::{seed_default_documents, DEFAULT_DOCUMENTS};
pub use traits::RevisionStore;
