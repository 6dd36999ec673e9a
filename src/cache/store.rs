//! Cache Store Module
//!
//! Concurrent key to item map with lazy, read-time TTL expiration.

use std::sync::Arc;

use chrono::{Duration, Utc};
use dashmap::DashMap;
use tracing::{debug, trace};

use crate::cache::Item;
use crate::config::Config;
use crate::context::Context;
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Process-local cache with lazy expiration.
///
/// Synchronization is per map shard and internal; share the store as
/// `&CacheStore` or `Arc<CacheStore>` across threads. Nothing sweeps expired
/// entries in the background: they are removed by the `get` that finds them.
#[derive(Debug, Default)]
pub struct CacheStore {
    /// Key to item storage
    entries: DashMap<String, Arc<Item>>,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store with the map's default layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store laid out according to `config`.
    pub fn with_config(config: &Config) -> Self {
        let entries = match config.shard_amount {
            Some(shards) => {
                DashMap::with_capacity_and_shard_amount(config.initial_capacity, shards)
            }
            None => DashMap::with_capacity(config.initial_capacity),
        };
        Self { entries }
    }

    // == Set ==
    /// Writes the item unconditionally, replacing any item under the same key.
    ///
    /// A zero expiration never expires. A negative one is rejected with
    /// [`CacheError::NotStored`] and leaves the store untouched.
    pub fn set(&self, ctx: &Context, mut item: Item) -> Result<()> {
        note_done_context(ctx, "set", &item.key);

        if item.expiration < Duration::zero() {
            debug!(key = %item.key, expiration = %item.expiration, "rejecting negative expiration");
            return Err(CacheError::NotStored);
        }

        item.stamp(Utc::now());
        trace!(key = %item.key, bytes = item.value.len(), "storing item");
        self.entries.insert(item.key.clone(), Arc::new(item));
        Ok(())
    }

    // == Get ==
    /// Returns the live item stored under `key`.
    ///
    /// Absent and expired keys both yield [`CacheError::CacheMiss`]; an expired
    /// entry is deleted on the way out.
    pub fn get(&self, ctx: &Context, key: &str) -> Result<Arc<Item>> {
        note_done_context(ctx, "get", key);

        // Clone the Arc out so the shard guard is released before any removal.
        let item = match self.entries.get(key) {
            Some(entry) => Arc::clone(entry.value()),
            None => return Err(CacheError::CacheMiss),
        };

        if item.is_expired_at(Utc::now()) {
            // Only drop the item we saw expire, not a fresh one set meanwhile.
            if self
                .entries
                .remove_if(key, |_, current| Arc::ptr_eq(current, &item))
                .is_some()
            {
                debug!(key, "removed expired item");
            }
            return Err(CacheError::CacheMiss);
        }

        Ok(item)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

// The store never blocks, so a done context has nothing to cut short.
fn note_done_context(ctx: &Context, op: &'static str, key: &str) {
    if ctx.is_done() {
        debug!(op, key, "context already done; completing anyway");
    }
}
