//! Inventory storage port definition.

use async_trait::async_trait;

use crate::domain::entities::InventoryRecord;
use crate::domain::errors::InventoryError;

/// Port for the persisted inventory slot.
///
/// The slot always holds the complete list; there is no partial update.
#[async_trait]
pub trait InventoryStoragePort: Send + Sync {
    /// Loads the persisted list. Missing or malformed data yields an empty list.
    async fn load_records(&self) -> Result<Vec<InventoryRecord>, InventoryError>;

    /// Replaces the persisted list with `records` in a single write.
    async fn save_records(&self, records: &[InventoryRecord]) -> Result<(), InventoryError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use tokio::sync::RwLock;

    /// In-memory inventory storage for testing.
    #[derive(Clone, Default)]
    pub struct MockInventoryStorage {
        records: Arc<RwLock<Vec<InventoryRecord>>>,
        saves: Arc<AtomicUsize>,
        fail_writes: Arc<AtomicBool>,
    }

    impl MockInventoryStorage {
        /// Creates empty mock storage.
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates mock storage holding `records`.
        pub fn with_records(records: Vec<InventoryRecord>) -> Self {
            Self {
                records: Arc::new(RwLock::new(records)),
                ..Self::default()
            }
        }

        /// Makes every subsequent write fail.
        pub fn fail_writes(&self) {
            self.fail_writes.store(true, Ordering::SeqCst);
        }

        /// Returns the number of successful writes.
        pub fn save_count(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }

        /// Returns a copy of the persisted list.
        pub async fn persisted(&self) -> Vec<InventoryRecord> {
            self.records.read().await.clone()
        }
    }

    #[async_trait]
    impl InventoryStoragePort for MockInventoryStorage {
        async fn load_records(&self) -> Result<Vec<InventoryRecord>, InventoryError> {
            Ok(self.records.read().await.clone())
        }

        async fn save_records(&self, records: &[InventoryRecord]) -> Result<(), InventoryError> {
            if self.fail_writes.load(Ordering::SeqCst) {
                return Err(InventoryError::storage("mock write failure"));
            }
            *self.records.write().await = records.to_vec();
            self.saves.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }
}
