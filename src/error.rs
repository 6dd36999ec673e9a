//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache operations.
///
/// Both variants are routine outcomes. The store stays usable after either.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheError {
    /// No live item for the key (never stored, or stored and expired)
    #[error("cache miss")]
    CacheMiss,

    /// Write rejected before touching the store
    #[error("item not stored")]
    NotStored,
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
