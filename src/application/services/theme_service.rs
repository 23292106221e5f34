//! Persisted light/dark preference.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::ThemeMode;
use crate::domain::errors::PreferenceError;
use crate::domain::ports::ThemeStoragePort;

/// Owns the current display mode and its storage slot.
pub struct ThemeService {
    mode: ThemeMode,
    storage: Arc<dyn ThemeStoragePort>,
}

impl ThemeService {
    /// Restores the persisted mode. Unreadable storage means light.
    pub async fn load(storage: Arc<dyn ThemeStoragePort>) -> Self {
        let mode = storage.load_theme().await.unwrap_or_else(|e| {
            warn!(error = %e, "Failed to read theme preference, using light");
            ThemeMode::Light
        });

        Self { mode, storage }
    }

    /// Returns the active mode.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flips the mode and persists it.
    ///
    /// The flip stands even when the write fails.
    ///
    /// # Errors
    /// Returns `PreferenceError::WriteFailed` if the new mode was not saved.
    pub async fn toggle(&mut self) -> Result<ThemeMode, PreferenceError> {
        self.mode = self.mode.toggled();
        info!(mode = %self.mode, "Theme toggled");

        self.storage.save_theme(self.mode).await?;
        Ok(self.mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::mocks::MockThemeStorage;
    use async_trait::async_trait;

    struct BrokenStorage;

    #[async_trait]
    impl ThemeStoragePort for BrokenStorage {
        async fn load_theme(&self) -> Result<ThemeMode, PreferenceError> {
            Err(PreferenceError::ReadFailed("corrupt".to_string()))
        }

        async fn save_theme(&self, _mode: ThemeMode) -> Result<(), PreferenceError> {
            Err(PreferenceError::WriteFailed("read-only".to_string()))
        }
    }

    #[tokio::test]
    async fn test_defaults_to_light() {
        let service = ThemeService::load(Arc::new(MockThemeStorage::new())).await;
        assert_eq!(service.mode(), ThemeMode::Light);
    }

    #[tokio::test]
    async fn test_restores_dark() {
        let storage = MockThemeStorage::with_mode(ThemeMode::Dark);
        let service = ThemeService::load(Arc::new(storage)).await;
        assert_eq!(service.mode(), ThemeMode::Dark);
    }

    #[tokio::test]
    async fn test_toggle_persists_each_flip() {
        let storage = MockThemeStorage::new();
        let mut service = ThemeService::load(Arc::new(storage.clone())).await;

        assert_eq!(service.toggle().await.unwrap(), ThemeMode::Dark);
        assert_eq!(storage.persisted().await, Some(ThemeMode::Dark));

        assert_eq!(service.toggle().await.unwrap(), ThemeMode::Light);
        assert_eq!(storage.persisted().await, Some(ThemeMode::Light));
    }

    #[tokio::test]
    async fn test_unreadable_storage_falls_back_and_toggle_still_flips() {
        let mut service = ThemeService::load(Arc::new(BrokenStorage)).await;
        assert_eq!(service.mode(), ThemeMode::Light);

        assert!(service.toggle().await.is_err());
        assert_eq!(service.mode(), ThemeMode::Dark);
    }
}
