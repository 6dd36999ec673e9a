//! Cache Module
//!
//! Provides an in-memory item cache with lazy TTL expiration, plus a
//! process-wide default instance behind the free functions [`set`] and [`get`].

mod entry;
mod store;


use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::config::Config;
use crate::context::Context;
use crate::error::Result;

// Re-export public types
pub use entry::{Item, Object};
pub use store::CacheStore;

// == Public Constants ==
/// Documented key length limit in bytes. Callers are expected to respect it;
/// the store does not check.
pub const MAX_KEY_LENGTH: usize = 250;

// == Default Store ==
static DEFAULT_STORE: Lazy<CacheStore> =
    Lazy::new(|| CacheStore::with_config(&Config::from_env()));

/// The process-wide store, created on first use.
pub fn default_store() -> &'static CacheStore {
    &DEFAULT_STORE
}

/// Writes `item` to the process-wide store. See [`CacheStore::set`].
pub fn set(ctx: &Context, item: Item) -> Result<()> {
    default_store().set(ctx, item)
}

/// Reads `key` from the process-wide store. See [`CacheStore::get`].
pub fn get(ctx: &Context, key: &str) -> Result<Arc<Item>> {
    default_store().get(ctx, key)
}
