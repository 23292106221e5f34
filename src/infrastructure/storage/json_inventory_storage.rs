//! Inventory persisted as a single JSON array.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tracing::{debug, warn};

use crate::domain::entities::InventoryRecord;
use crate::domain::errors::InventoryError;
use crate::domain::ports::InventoryStoragePort;

const INVENTORY_FILE_NAME: &str = "inventory.json";

/// Stores the whole list in `<data_dir>/inventory.json`.
///
/// Writes go to a sibling temp file that is renamed over the target, so a
/// crash mid-write leaves the previous list intact. A file that cannot be
/// parsed is moved aside to `inventory.json.bak` before starting empty.
#[derive(Debug, Clone)]
pub struct JsonInventoryStorage {
    path: PathBuf,
}

impl JsonInventoryStorage {
    /// Creates storage rooted at `data_dir`.
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            path: data_dir.as_ref().join(INVENTORY_FILE_NAME),
        }
    }

    /// Returns the inventory file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    /// Returns where an unreadable inventory file is kept.
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        self.path.with_extension("json.bak")
    }

    async fn back_up_malformed(&self) {
        let backup = self.backup_path();
        match fs::rename(&self.path, &backup).await {
            Ok(()) => warn!(backup = %backup.display(), "Moved malformed inventory file aside"),
            Err(e) => warn!(error = %e, "Failed to back up malformed inventory file"),
        }
    }
}

#[async_trait]
impl InventoryStoragePort for JsonInventoryStorage {
    async fn load_records(&self) -> Result<Vec<InventoryRecord>, InventoryError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No inventory file yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(InventoryError::load_failed(e.to_string())),
        };

        match serde_json::from_str::<Option<Vec<InventoryRecord>>>(&content) {
            Ok(records) => Ok(records.unwrap_or_default()),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Malformed inventory file, starting empty"
                );
                self.back_up_malformed().await;
                Ok(Vec::new())
            }
        }
    }

    async fn save_records(&self, records: &[InventoryRecord]) -> Result<(), InventoryError> {
        let content = serde_json::to_string_pretty(records)
            .map_err(|e| InventoryError::storage(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| InventoryError::storage(e.to_string()))?;
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, content)
            .await
            .map_err(|e| InventoryError::storage(e.to_string()))?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| InventoryError::storage(e.to_string()))?;

        debug!(path = %self.path.display(), count = records.len(), "Inventory written");
        Ok(())
    }
}
