//! Preference storage error types.

use thiserror::Error;

/// Preference storage error variants.
#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("failed to read preferences: {0}")]
    ReadFailed(String),

    #[error("failed to write preferences: {0}")]
    WriteFailed(String),
}
