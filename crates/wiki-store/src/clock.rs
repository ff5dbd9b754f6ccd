//! Time sources for revision timestamps.

use std::sync::atomic::{AtomicU64, Ordering};

use wiki_types::Timestamp;

/// Source of the timestamp assigned to each new revision.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Wall-clock seconds.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock that only moves when told to.
///
/// Lets tests place writes in the same second, or step time backwards.
#[derive(Debug, Default)]
pub struct ManualClock {
    secs: AtomicU64,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            secs: AtomicU64::new(start.as_secs()),
        }
    }

    pub fn set(&self, ts: Timestamp) {
        self.secs.store(ts.as_secs(), Ordering::SeqCst);
    }

    /// Move forward by `secs` and return the new time.
    pub fn advance(&self, secs: u64) -> Timestamp {
        let prev = self.secs.fetch_add(secs, Ordering::SeqCst);
        Timestamp::from_secs(prev.saturating_add(secs))
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp::from_secs(self.secs.load(Ordering::SeqCst))
    }
}
