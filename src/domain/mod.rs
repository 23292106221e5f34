//! Domain layer with core entities, freshness rules and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Freshness classification.
pub mod freshness;
/// Keybinding definitions.
pub mod keybinding;
/// Status line notices.
pub mod notification;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;
/// Display mode.
pub mod theme_mode;

pub use entities::{IdGenerator, InventoryRecord, RecordId};
pub use errors::{InventoryError, PreferenceError};
pub use freshness::{FreshnessStatus, WARNING_WINDOW_DAYS, days_label, days_left};
pub use notification::{Notification, NotificationLevel};
pub use ports::{InventoryStoragePort, ThemeStoragePort};
pub use theme_mode::ThemeMode;
