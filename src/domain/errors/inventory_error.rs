//! Inventory error types.

use thiserror::Error;

/// Inventory error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum InventoryError {
    #[error("required field is empty: {field}")]
    MissingField { field: &'static str },

    #[error("expiry is not a calendar date (YYYY-MM-DD): {value}")]
    InvalidExpiry { value: String },

    #[error("failed to read inventory: {message}")]
    LoadFailed { message: String },

    #[error("failed to write inventory: {message}")]
    Storage { message: String },
}

impl InventoryError {
    /// Creates missing field error.
    #[must_use]
    pub const fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Creates invalid expiry error.
    #[must_use]
    pub fn invalid_expiry(value: impl Into<String>) -> Self {
        Self::InvalidExpiry {
            value: value.into(),
        }
    }

    /// Creates load failed error.
    #[must_use]
    pub fn load_failed(message: impl Into<String>) -> Self {
        Self::LoadFailed {
            message: message.into(),
        }
    }

    /// Creates storage error.
    #[must_use]
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Returns whether the error rejected user input before any mutation.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidExpiry { .. })
    }

    /// Returns the notice shown to the user for this error.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingField { .. } => "Please fill all fields".to_string(),
            Self::InvalidExpiry { .. } => "Expiry must be a date (YYYY-MM-DD)".to_string(),
            Self::LoadFailed { message } => format!("Could not read inventory: {message}"),
            Self::Storage { message } => format!("Could not save inventory: {message}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_classification() {
        assert!(InventoryError::missing_field("name").is_validation());
        assert!(InventoryError::invalid_expiry("soon").is_validation());
        assert!(!InventoryError::storage("disk full").is_validation());
    }

    #[test]
    fn test_user_message_for_missing_field() {
        let error = InventoryError::missing_field("category");
        assert_eq!(error.user_message(), "Please fill all fields");
        assert_eq!(error.to_string(), "required field is empty: category");
    }
}
