use std::collections::BTreeMap;

use wiki_types::{Revision, RevisionHistory, Selector, Timestamp};

/// A titled document and its full revision history.
///
/// A `Document` can only be built from its first revision, so it is never
/// empty. The title is held by the owning store, not here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    revisions: BTreeMap<Timestamp, String>,
    latest: Timestamp,
}

impl Document {
    /// Create a document from its first revision.
    pub fn new(ts: Timestamp, content: impl Into<String>) -> Self {
        let mut revisions = BTreeMap::new();
        revisions.insert(ts, content.into());
        Self {
            revisions,
            latest: ts,
        }
    }

    /// Record a revision and move the latest marker to it.
    ///
    /// The marker follows call order, not timestamp order: a write with an
    /// older timestamp than the current marker still becomes latest. A write
    /// reusing an existing timestamp replaces that revision's content.
    pub fn record(&mut self, ts: Timestamp, content: impl Into<String>) {
        self.revisions.insert(ts, content.into());
        self.latest = ts;
    }

    /// Timestamp of the most recently recorded revision.
    pub fn latest(&self) -> Timestamp {
        self.latest
    }

    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    /// Never true for a document built through [`Document::new`].
    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }

    /// Resolve a selector to a stored `(timestamp, content)` pair.
    pub fn resolve(&self, selector: &Selector) -> Option<(Timestamp, &str)> {
        let ts = match selector {
            Selector::Latest => self.latest,
            Selector::Exact(ts) => *ts,
            Selector::Unmatched(_) => return None,
        };
        self.revisions
            .get(&ts)
            .map(|content| (ts, content.as_str()))
    }

    /// The revision in force at `at`: greatest timestamp not after it.
    pub fn as_of(&self, at: Timestamp) -> Option<(Timestamp, &str)> {
        self.revisions
            .range(..=at)
            .next_back()
            .map(|(ts, content)| (*ts, content.as_str()))
    }

    pub fn revision(&self, title: &str, selector: &Selector) -> Option<Revision> {
        self.resolve(selector)
            .map(|(ts, content)| Revision::new(title, ts, content))
    }

    pub fn history(&self, title: &str) -> RevisionHistory {
        RevisionHistory {
            title: title.to_string(),
            revisions: self.revisions.clone(),
        }
    }
}
