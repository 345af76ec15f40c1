//! Cart Snapshots

use serde::{Deserialize, Serialize};

use crate::{cart::Cart, items::LineItem, store::StoreError};

/// Snapshot format version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Complete, self-contained image of a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Cart lines in insertion order
    #[serde(default)]
    pub lines: Vec<LineItem>,
}

impl CartSnapshot {
    /// Rebuild the cart described by this snapshot.
    ///
    /// # Errors
    ///
    /// - [`StoreError::UnsupportedVersion`]: the snapshot was written in another format.
    /// - [`StoreError::InvalidSnapshot`]: the lines break a cart invariant.
    pub fn into_cart(self) -> Result<Cart, StoreError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: self.version,
                expected: SNAPSHOT_VERSION,
            });
        }

        Ok(Cart::from_items(self.lines)?)
    }
}

impl From<&Cart> for CartSnapshot {
    fn from(cart: &Cart) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            lines: cart.lines().to_vec(),
        }
    }
}
