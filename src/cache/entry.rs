//! Cache Item Module
//!
//! Defines the unit of storage with its optional expiration.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

/// Opaque secondary payload. The store never looks inside it.
pub type Object = Arc<dyn Any + Send + Sync>;

// == Item ==
/// The unit of cache sets and gets.
///
/// Build one with [`Item::new`] and the `with_*` methods. The absolute expiry
/// is stamped by the store when the item is set.
#[derive(Clone)]
pub struct Item {
    /// The item's key (250 bytes maximum by convention, not enforced)
    pub key: String,
    /// The item's value
    pub value: Vec<u8>,
    /// Structured alternative to `value` for callers that don't want raw bytes
    pub object: Option<Object>,
    /// How long the item stays in the cache. Zero means no expiration;
    /// negative is rejected by the store.
    pub expiration: Duration,
    /// Absolute expiry, stamped at set time
    expires_at: Option<DateTime<Utc>>,
}

impl Item {
    // == Constructor ==
    /// Creates an item that never expires.
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            object: None,
            expiration: Duration::zero(),
            expires_at: None,
        }
    }

    /// Attaches an opaque object payload.
    pub fn with_object<T: Any + Send + Sync>(mut self, object: T) -> Self {
        self.object = Some(Arc::new(object));
        self
    }

    /// Sets the time-to-live.
    pub fn with_expiration(mut self, expiration: Duration) -> Self {
        self.expiration = expiration;
        self
    }

    /// Borrows the object payload as `T`, if there is one and it is a `T`.
    pub fn object_ref<T: Any>(&self) -> Option<&T> {
        self.object.as_deref().and_then(|o| o.downcast_ref::<T>())
    }

    // == Stamp ==
    /// Fixes the absolute expiry relative to `now`.
    ///
    /// A zero expiration clears it. Past the representable range the item
    /// saturates to the latest timestamp and will not expire in practice.
    pub(crate) fn stamp(&mut self, now: DateTime<Utc>) {
        self.expires_at = if self.expiration.is_zero() {
            None
        } else {
            Some(
                now.checked_add_signed(self.expiration)
                    .unwrap_or(DateTime::<Utc>::MAX_UTC),
            )
        };
    }

    // == Is Expired ==
    /// An item is expired once `now` reaches its expiry.
    pub(crate) fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires) => now >= expires,
            None => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}

impl fmt::Debug for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("key", &self.key)
            .field("value", &self.value)
            .field("object", &self.object.as_ref().map(|_| "<opaque>"))
            .field("expiration", &self.expiration)
            .finish()
    }
}
