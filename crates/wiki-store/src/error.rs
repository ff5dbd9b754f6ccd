/// Errors from revision store operations.
///
/// Absence is not an error: lookups return `Ok(None)` for unknown titles and
/// unmatched selectors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A writer panicked while holding the store lock.
    #[error("store lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
