//! Inventory record entity.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::serde_utils::{flexible_u64, string_or_number};

/// Unique identifier for an inventory record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(#[serde(with = "flexible_u64")] pub u64);

impl RecordId {
    /// Returns the underlying u64 value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One tracked perishable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    id: RecordId,
    name: String,
    category: String,
    #[serde(with = "string_or_number")]
    quantity: String,
    expiry: NaiveDate,
}

impl InventoryRecord {
    /// Creates a record. Field presence is checked by the caller.
    #[must_use]
    pub fn new(
        id: impl Into<RecordId>,
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
        expiry: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
            expiry,
        }
    }

    /// Returns the record with a different ID.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<RecordId>) -> Self {
        self.id = id.into();
        self
    }

    /// Returns the record ID.
    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    /// Returns the item name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the free-form category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the quantity exactly as entered.
    #[must_use]
    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    /// Returns the expiry date.
    #[must_use]
    pub const fn expiry(&self) -> NaiveDate {
        self.expiry
    }
}

/// Issues record IDs that look like creation timestamps but never repeat.
///
/// The next ID is the current Unix time in milliseconds, bumped past the
/// last issued ID whenever the clock has not moved forward. Once the last
/// issued ID sits at `u64::MAX` the lowest unused ID is handed out instead.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last_issued: u64,
    taken: HashSet<u64>,
}

impl IdGenerator {
    /// Creates a generator that will only issue IDs not used by `records`.
    #[must_use]
    pub fn seeded_from(records: &[InventoryRecord]) -> Self {
        let taken: HashSet<u64> = records.iter().map(|record| record.id().as_u64()).collect();
        let last_issued = taken.iter().copied().max().unwrap_or(0);
        Self { last_issued, taken }
    }

    /// Returns the next ID for the given wall-clock time.
    pub fn next_id(&mut self, now_millis: u64) -> RecordId {
        let id = match self.last_issued.checked_add(1) {
            Some(next) => {
                let id = now_millis.max(next);
                self.last_issued = id;
                id
            }
            None => self.lowest_unused(),
        };
        self.taken.insert(id);
        RecordId(id)
    }

    fn lowest_unused(&self) -> u64 {
        (0..=u64::MAX)
            .find(|id| !self.taken.contains(id))
            .unwrap_or_default()
    }
}
