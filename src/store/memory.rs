//! In-memory cart store

use crate::store::{CartSnapshot, CartStore, StoreError};

/// Keeps the latest snapshot in memory.
///
/// Useful for tests and for visitors whose cart does not need to outlive the process. The store
/// can be marked unavailable to exercise the failed-save path.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<CartSnapshot>,
    saves: usize,
    unavailable: bool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds a snapshot.
    pub fn with_snapshot(snapshot: CartSnapshot) -> Self {
        Self {
            snapshot: Some(snapshot),
            ..Self::default()
        }
    }

    /// Make subsequent loads and saves fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// The last successfully saved snapshot.
    pub fn snapshot(&self) -> Option<&CartSnapshot> {
        self.snapshot.as_ref()
    }

    /// Number of successful saves.
    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl CartStore for MemoryStore {
    fn load(&self) -> Result<Option<CartSnapshot>, StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }

        Ok(self.snapshot.clone())
    }

    fn save(&mut self, snapshot: &CartSnapshot) -> Result<(), StoreError> {
        if self.unavailable {
            return Err(StoreError::Unavailable);
        }

        self.snapshot = Some(snapshot.clone());
        self.saves += 1;

        Ok(())
    }
}
