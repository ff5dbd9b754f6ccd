use std::fmt;

use crate::timestamp::Timestamp;

/// The literal selector naming a document's latest revision.
pub const LATEST: &str = "latest";

/// Which revision of a document a lookup asks for.
///
/// Parsing never fails: a string that is neither empty, `"latest"`, nor a
/// canonical timestamp becomes [`Selector::Unmatched`], which resolves to no
/// revision at all.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Selector {
    /// The revision at the document's latest marker.
    Latest,
    /// The revision stored under exactly this timestamp.
    Exact(Timestamp),
    /// A selector that cannot name any stored revision.
    Unmatched(String),
}

impl Selector {
    /// Interpret a client-supplied selector string.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() || raw == LATEST {
            return Self::Latest;
        }
        match raw.parse::<Timestamp>() {
            Ok(ts) => Self::Exact(ts),
            Err(_) => Self::Unmatched(raw.to_string()),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => f.write_str(LATEST),
            Self::Exact(ts) => write!(f, "{ts}"),
            Self::Unmatched(raw) => f.write_str(raw),
        }
    }
}
