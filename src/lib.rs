//! Mini Memcache - A process-local memcache stand-in
//!
//! Stores byte values under string keys with optional TTL. Expired items are
//! dropped lazily, by the read that finds them. There is no eviction, no
//! persistence and no network layer.
//!
//! ```
//! use chrono::Duration;
//! use mini_memcache::{CacheError, CacheStore, Context, Item};
//!
//! let ctx = Context::background();
//! let store = CacheStore::new();
//!
//! store
//!     .set(&ctx, Item::new("hello", "world").with_expiration(Duration::seconds(1)))
//!     .unwrap();
//! assert_eq!(store.get(&ctx, "hello").unwrap().value, b"world");
//! assert_eq!(store.get(&ctx, "missing").unwrap_err(), CacheError::CacheMiss);
//! ```

pub mod cache;
pub mod config;
pub mod context;
pub mod error;
pub mod telemetry;

pub use cache::{default_store, get, set, CacheStore, Item};
pub use config::Config;
pub use context::Context;
pub use error::{CacheError, Result};
