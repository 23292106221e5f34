//! Owned inventory list mirrored to persistent storage.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::application::dto::NewRecordRequest;
use crate::domain::entities::{IdGenerator, InventoryRecord, RecordId};
use crate::domain::errors::InventoryError;
use crate::domain::ports::InventoryStoragePort;

/// Sole owner of the record list.
///
/// Every mutation writes the full list back through the storage port before
/// returning. A failed write leaves the in-memory change in place and
/// reports `InventoryError::Storage`; the next successful write catches the
/// file up.
pub struct InventoryStore {
    records: Vec<InventoryRecord>,
    ids: IdGenerator,
    storage: Arc<dyn InventoryStoragePort>,
}

impl InventoryStore {
    /// Loads the persisted list. Unreadable storage starts an empty inventory.
    pub async fn load(storage: Arc<dyn InventoryStoragePort>) -> Self {
        let mut records = match storage.load_records().await {
            Ok(records) => {
                info!(count = records.len(), "Inventory loaded");
                records
            }
            Err(e) => {
                warn!(error = %e, "Failed to load inventory, starting empty");
                Vec::new()
            }
        };

        let mut ids = IdGenerator::seeded_from(&records);
        let reassigned = reassign_duplicate_ids(&mut records, &mut ids);
        if reassigned > 0 {
            warn!(count = reassigned, "Reassigned duplicate record ids");
        }

        Self {
            records,
            ids,
            storage,
        }
    }

    /// Returns all records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[InventoryRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the inventory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by ID.
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&InventoryRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Validates and appends a new record, then persists the list.
    ///
    /// # Errors
    /// Returns a validation error without touching the list, or
    /// `InventoryError::Storage` after the record was appended but not saved.
    pub async fn add(
        &mut self,
        request: &NewRecordRequest,
    ) -> Result<InventoryRecord, InventoryError> {
        let validated = request.validate().map_err(|e| {
            debug!(error = %e, "Rejected new record");
            e
        })?;

        let id = self.ids.next_id(now_millis());
        let record = InventoryRecord::new(
            id,
            validated.name,
            validated.category,
            validated.quantity,
            validated.expiry,
        );

        info!(id = %id, name = %record.name(), category = %record.category(), "Record added");
        self.records.push(record.clone());
        self.persist().await?;

        Ok(record)
    }

    /// Removes the record with `id` and persists the list.
    ///
    /// Returns `false` without writing when no record matches.
    ///
    /// # Errors
    /// Returns `InventoryError::Storage` after the record was removed but the
    /// list could not be saved.
    pub async fn delete(&mut self, id: RecordId) -> Result<bool, InventoryError> {
        let before = self.records.len();
        self.records.retain(|record| record.id() != id);

        if self.records.len() == before {
            debug!(id = %id, "Delete ignored, no such record");
            return Ok(false);
        }

        info!(id = %id, "Record deleted");
        self.persist().await?;
        Ok(true)
    }

    /// Writes the full list in a single storage call.
    ///
    /// # Errors
    /// Returns `InventoryError::Storage` if the write fails.
    pub async fn persist(&self) -> Result<(), InventoryError> {
        self.storage
            .save_records(&self.records)
            .await
            .inspect(|_| debug!(count = self.records.len(), "Inventory persisted"))
            .inspect_err(|e| error!(error = %e, "Failed to persist inventory"))
    }
}

fn now_millis() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0)
}

fn reassign_duplicate_ids(records: &mut Vec<InventoryRecord>, ids: &mut IdGenerator) -> usize {
    let mut seen = HashSet::with_capacity(records.len());
    let mut reassigned = 0;

    for record in std::mem::take(records) {
        let record = if seen.contains(&record.id()) {
            reassigned += 1;
            record.with_id(ids.next_id(now_millis()))
        } else {
            record
        };
        seen.insert(record.id());
        records.push(record);
    }

    reassigned
}
