//! Storage repository for persisted widget state
//!
//! Key-value persistence behind the imported-token list. I/O is synchronous
//! and best-effort; callers decide whether a failure is recoverable.

use crate::shared::error::WidgetError;

/// Storage repository trait
#[cfg_attr(test, mockall::automock)]
pub trait StorageRepository: Send + Sync {
    /// Store data under a key
    fn store(&self, key: &str, data: &[u8]) -> Result<(), WidgetError>;

    /// Retrieve data for a key
    fn retrieve(&self, key: &str) -> Result<Vec<u8>, WidgetError>;

    /// Delete stored data
    fn delete(&self, key: &str) -> Result<(), WidgetError>;

    /// Check if a key exists
    fn exists(&self, key: &str) -> Result<bool, WidgetError>;
}
