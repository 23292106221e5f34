//! Record entry DTOs.

use chrono::NaiveDate;

use crate::domain::errors::InventoryError;

/// Date format accepted by the entry form and written to disk.
pub const EXPIRY_FORMAT: &str = "%Y-%m-%d";

/// Raw form input for a new record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecordRequest {
    /// Item name.
    pub name: String,
    /// Free-form category.
    pub category: String,
    /// Quantity, kept as text.
    pub quantity: String,
    /// Expiry date text.
    pub expiry: String,
}

/// Request that passed the add-boundary checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRecord {
    /// Item name.
    pub name: String,
    /// Free-form category.
    pub category: String,
    /// Quantity, kept as text.
    pub quantity: String,
    /// Parsed expiry date.
    pub expiry: NaiveDate,
}

impl NewRecordRequest {
    /// Creates new request.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        quantity: impl Into<String>,
        expiry: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            quantity: quantity.into(),
            expiry: expiry.into(),
        }
    }

    /// Checks that every field is present and the expiry is a date.
    ///
    /// # Errors
    /// Returns `MissingField` for the first blank field, or `InvalidExpiry`.
    pub fn validate(&self) -> Result<ValidatedRecord, InventoryError> {
        let fields = [
            ("name", self.name.trim()),
            ("category", self.category.trim()),
            ("quantity", self.quantity.trim()),
            ("expiry", self.expiry.trim()),
        ];

        if let Some(&(field, _)) = fields.iter().find(|(_, value)| value.is_empty()) {
            return Err(InventoryError::missing_field(field));
        }

        let [(_, name), (_, category), (_, quantity), (_, expiry)] = fields;

        let expiry = NaiveDate::parse_from_str(expiry, EXPIRY_FORMAT)
            .map_err(|_| InventoryError::invalid_expiry(expiry))?;

        Ok(ValidatedRecord {
            name: name.to_string(),
            category: category.to_string(),
            quantity: quantity.to_string(),
            expiry,
        })
    }
}
