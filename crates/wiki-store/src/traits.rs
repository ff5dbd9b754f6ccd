use wiki_types::{Revision, RevisionHistory, Selector, Timestamp};

use crate::error::StoreResult;

/// Revisioned document store.
///
/// All implementations must satisfy these invariants:
/// - A document exists from its first write onwards and always has at least
///   one revision.
/// - `list_titles` reports each title once, in first-write order.
/// - The latest marker points at the timestamp of the most recent call to
///   `add_revision` for that title.
/// - Reads never observe the latest marker and the revision map out of step.
///
/// Unknown titles and unmatched selectors yield `Ok(None)`. `Err` is reserved
/// for backend failure.
pub trait RevisionStore: Send + Sync {
    /// Record `content` as a new revision of `title`, stamped with the
    /// current time, creating the document if needed.
    fn add_revision(&self, title: &str, content: &str) -> StoreResult<Revision>;

    /// Every known title, in first-write order.
    fn list_titles(&self) -> StoreResult<Vec<String>>;

    /// Every revision of `title`.
    fn list_revisions(&self, title: &str) -> StoreResult<Option<RevisionHistory>>;

    /// The revision of `title` chosen by `selector`, matching exactly.
    fn get_revision(&self, title: &str, selector: &Selector) -> StoreResult<Option<Revision>>;

    /// The revision of `title` in force at `at`: the one with the greatest
    /// timestamp not after `at`.
    fn revision_as_of(&self, title: &str, at: Timestamp) -> StoreResult<Option<Revision>>;
}
