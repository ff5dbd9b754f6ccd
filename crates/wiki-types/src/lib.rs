//! Foundation types for the wiki revision store.
//!
//! Every other wiki crate depends on `wiki-types`.
//!
//! # Key Types
//!
//! - [`Timestamp`] -- Second-resolution revision key, also the ordering key
//! - [`Selector`] -- Client choice of which revision to fetch
//! - [`Revision`] -- One stored revision of a titled document
//! - [`RevisionHistory`] -- Every revision of a document, keyed by timestamp

pub mod error;
pub mod revision;
pub mod selector;
pub mod timestamp;

pub use error::TypeError;
pub use revision::{Revision, RevisionHistory};
pub use selector::{Selector, LATEST};
pub use timestamp::Timestamp;
