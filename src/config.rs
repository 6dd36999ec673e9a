//! Configuration Module
//!
//! Handles loading cache construction parameters from environment variables.
//! None of these settings change what `set`/`get` do, only how the map is laid out.

use std::env;

/// Cache construction parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Capacity hint for the underlying map
    pub initial_capacity: usize,
    /// Number of map shards; `None` lets the map pick from the CPU count
    pub shard_amount: Option<usize>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MEMCACHE_INITIAL_CAPACITY` - Capacity hint (default: 0)
    /// - `MEMCACHE_SHARD_AMOUNT` - Shard count, power of two greater than 1 (default: map decides)
    pub fn from_env() -> Self {
        Self {
            initial_capacity: env::var("MEMCACHE_INITIAL_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            shard_amount: env::var("MEMCACHE_SHARD_AMOUNT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&n| is_valid_shard_amount(n)),
        }
    }

    /// Sets the capacity hint.
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the shard count. Values the map would reject are dropped.
    pub fn with_shard_amount(mut self, shards: usize) -> Self {
        self.shard_amount = Some(shards).filter(|&n| is_valid_shard_amount(n));
        self
    }
}

// DashMap panics on anything else.
fn is_valid_shard_amount(n: usize) -> bool {
    n > 1 && n.is_power_of_two()
}
