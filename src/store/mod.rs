//! Cart persistence
//!
//! A [`CartStore`] keeps the latest [`CartSnapshot`] of a session's cart. Sessions call
//! [`CartStore::save`] with a complete snapshot after every mutation and [`CartStore::load`] once
//! when they open.

use thiserror::Error;

use crate::cart::CartError;

mod file;
mod memory;
mod snapshot;

pub use file::YamlFileStore;
pub use memory::MemoryStore;
pub use snapshot::{CartSnapshot, SNAPSHOT_VERSION};

/// Errors raised by cart stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error reading or writing the store
    #[error("failed to access cart store: {0}")]
    Io(#[from] std::io::Error),

    /// YAML encoding or decoding error
    #[error("failed to encode or decode cart snapshot: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// The new snapshot could not replace the previous one
    #[error("failed to replace cart snapshot: {0}")]
    Persist(#[from] tempfile::PersistError),

    /// The snapshot was written by an incompatible version
    #[error("unsupported cart snapshot version {found}, expected {expected}")]
    UnsupportedVersion {
        /// Version found in the snapshot
        found: u32,

        /// Version this build reads and writes
        expected: u32,
    },

    /// The snapshot does not describe a valid cart
    #[error("invalid cart snapshot: {0}")]
    InvalidSnapshot(#[from] CartError),

    /// The store cannot be reached
    #[error("cart store unavailable")]
    Unavailable,
}

/// Durable home for a session's cart.
#[cfg_attr(test, mockall::automock)]
pub trait CartStore {
    /// Load the last saved snapshot, or `None` if nothing has been saved.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the store cannot be read or holds an unreadable snapshot.
    fn load(&self) -> Result<Option<CartSnapshot>, StoreError>;

    /// Replace the stored snapshot.
    ///
    /// Implementations must never leave a partially written snapshot behind.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the snapshot could not be written.
    fn save(&mut self, snapshot: &CartSnapshot) -> Result<(), StoreError>;
}
