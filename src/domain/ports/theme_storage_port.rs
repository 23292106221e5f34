//! Theme preference port definition.

use async_trait::async_trait;

use crate::domain::ThemeMode;
use crate::domain::errors::PreferenceError;

/// Port for the persisted theme slot, independent of the inventory slot.
#[async_trait]
pub trait ThemeStoragePort: Send + Sync {
    /// Loads the persisted mode. An absent value means light.
    async fn load_theme(&self) -> Result<ThemeMode, PreferenceError>;

    /// Persists the mode name.
    async fn save_theme(&self, mode: ThemeMode) -> Result<(), PreferenceError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory theme storage for testing.
    #[derive(Clone, Default)]
    pub struct MockThemeStorage {
        mode: Arc<RwLock<Option<ThemeMode>>>,
    }

    impl MockThemeStorage {
        /// Creates storage with nothing persisted.
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates storage with a persisted mode.
        pub fn with_mode(mode: ThemeMode) -> Self {
            Self {
                mode: Arc::new(RwLock::new(Some(mode))),
            }
        }

        /// Returns the persisted mode, if any.
        pub async fn persisted(&self) -> Option<ThemeMode> {
            *self.mode.read().await
        }
    }

    #[async_trait]
    impl ThemeStoragePort for MockThemeStorage {
        async fn load_theme(&self) -> Result<ThemeMode, PreferenceError> {
            Ok(self.mode.read().await.unwrap_or_default())
        }

        async fn save_theme(&self, mode: ThemeMode) -> Result<(), PreferenceError> {
            *self.mode.write().await = Some(mode);
            Ok(())
        }
    }
}
