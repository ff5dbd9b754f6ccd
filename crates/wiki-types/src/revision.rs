use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::timestamp::Timestamp;

/// One revision of a titled document.
///
/// This is what a write returns and what a single-revision lookup yields.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    pub title: String,
    pub timestamp: Timestamp,
    pub content: String,
}

impl Revision {
    pub fn new(title: impl Into<String>, timestamp: Timestamp, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            timestamp,
            content: content.into(),
        }
    }
}

/// Every stored revision of one document, ordered by timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionHistory {
    pub title: String,
    pub revisions: BTreeMap<Timestamp, String>,
}

impl RevisionHistory {
    /// Number of revisions in the history.
    pub fn len(&self) -> usize {
        self.revisions.len()
    }

    /// Returns `true` if the history holds no revisions.
    pub fn is_empty(&self) -> bool {
        self.revisions.is_empty()
    }

    /// Content stored under exactly `ts`.
    pub fn content_at(&self, ts: Timestamp) -> Option<&str> {
        self.revisions.get(&ts).map(String::as_str)
    }
}
