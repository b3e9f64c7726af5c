//! Interning fleet registry.
//!
//! Descriptors are cached by their full field tuple: asking twice for the
//! same configuration yields the same shared instance. The registry is
//! process-lifetime state with no eviction.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use fleet_domain::DroneDescriptor;
use tracing::debug;

/// Value-interning store of drone descriptors.
///
/// Shared read-mostly state: wrap it in an [`Arc`] and hand clones to every
/// consumer. Writes happen only on first sight of a new descriptor value,
/// and racing first-writes of the same value resolve to a single winning
/// instance (insert-if-absent under the write lock).
#[derive(Debug, Default)]
pub struct FleetRegistry {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    interned: HashSet<Arc<DroneDescriptor>>,
    // Insertion order, which is the registry's iteration order.
    order: Vec<Arc<DroneDescriptor>>,
}

impl FleetRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached instance for this descriptor value, interning it
    /// first if it has never been seen.
    ///
    /// Equal inputs always come back as the identical `Arc`
    /// (`Arc::ptr_eq`), so repeated lookups of the same configuration never
    /// duplicate the heavyweight descriptor.
    pub fn get_or_create(&self, descriptor: DroneDescriptor) -> Arc<DroneDescriptor> {
        {
            let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(existing) = inner.interned.get(&descriptor) {
                return Arc::clone(existing);
            }
        }

        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        // Re-check under the write lock: another first-writer may have won
        // the race between our read and write acquisition.
        if let Some(existing) = inner.interned.get(&descriptor) {
            return Arc::clone(existing);
        }

        debug!(drone_id = %descriptor.drone_id, model = %descriptor.model, "interning new descriptor");
        let entry = Arc::new(descriptor);
        inner.interned.insert(Arc::clone(&entry));
        inner.order.push(Arc::clone(&entry));
        entry
    }

    /// All interned descriptors in insertion order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<DroneDescriptor>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .clone()
    }

    /// First-interned descriptor carrying this `drone_id`, if any.
    ///
    /// Identity is the full field tuple, so one id may appear on several
    /// entries; lookups by id resolve to the earliest.
    #[must_use]
    pub fn find_by_id(&self, drone_id: &str) -> Option<Arc<DroneDescriptor>> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .iter()
            .find(|d| d.drone_id == drone_id)
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
