//! Explicit store handle with a fail-fast initialization contract.
//!
//! The handle is constructed detached, initialized exactly once at
//! startup, and then cloned into whatever needs it. No ambient globals:
//! anything that reads or mutates the stores holds a handle it was given.

use std::sync::{Arc, OnceLock};

use crate::store::posts::PostsStore;
use crate::store::types::{Conversation, Notification, Trend};

/// Everything the data layer owns: the mutable posts store plus the seeded
/// read-only collections the other pages render.
pub struct Stores {
    pub posts: PostsStore,
    pub notifications: Vec<Notification>,
    pub conversations: Vec<Conversation>,
    pub trends: Vec<Trend>,
}

/// Cheaply-cloneable handle to the data layer.
///
/// Accessors panic when the handle was never initialized: that is a caller
/// bug and surfaces before any state is touched. An unknown post id inside
/// a mutation, by contrast, is expected traffic and stays a silent no-op
/// inside [`PostsStore`].
#[derive(Clone, Default)]
pub struct StoreHandle {
    slot: Arc<OnceLock<Stores>>,
}

impl StoreHandle {
    /// An empty handle. Unusable until [`initialize`] is called.
    ///
    /// [`initialize`]: StoreHandle::initialize
    pub fn detached() -> Self {
        Self::default()
    }

    /// Install the stores. Must be called exactly once, at startup.
    ///
    /// # Panics
    ///
    /// Panics if the handle was already initialized.
    pub fn initialize(&self, stores: Stores) {
        if self.slot.set(stores).is_err() {
            panic!("store handle initialized twice");
        }
        tracing::info!("stores initialized");
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }

    fn stores(&self) -> &Stores {
        self.slot
            .get()
            .expect("store handle used before initialization")
    }

    /// # Panics
    ///
    /// Panics if the handle was never initialized.
    pub fn posts(&self) -> &PostsStore {
        &self.stores().posts
    }

    /// Snapshot of the seeded notifications. Panics when uninitialized.
    pub fn notifications(&self) -> Vec<Notification> {
        self.stores().notifications.clone()
    }

    /// Snapshot of the seeded conversations. Panics when uninitialized.
    pub fn conversations(&self) -> Vec<Conversation> {
        self.stores().conversations.clone()
    }

    /// Snapshot of the seeded trending topics. Panics when uninitialized.
    pub fn trends(&self) -> Vec<Trend> {
        self.stores().trends.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detached_handle_reports_uninitialized() {
        let handle = StoreHandle::detached();
        assert!(!handle.is_initialized());
    }

    #[test]
    #[should_panic(expected = "store handle used before initialization")]
    fn posts_access_before_initialize_panics() {
        StoreHandle::detached().posts();
    }

    #[test]
    #[should_panic(expected = "store handle initialized twice")]
    fn double_initialize_panics() {
        let handle = StoreHandle::detached();
        handle.initialize(empty_stores());
        handle.initialize(empty_stores());
    }

    #[test]
    fn clones_share_the_same_stores() {
        let handle = StoreHandle::detached();
        let clone = handle.clone();
        handle.initialize(empty_stores());
        assert!(clone.is_initialized());
        assert!(clone.posts().is_empty());
    }

    fn empty_stores() -> Stores {
        Stores {
            posts: PostsStore::with_seed(Vec::new()),
            notifications: Vec::new(),
            conversations: Vec::new(),
            trends: Vec::new(),
        }
    }
}
