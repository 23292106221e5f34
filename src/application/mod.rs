//! Application layer with services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Stateful services driving the screen.
pub mod services;

pub use dto::NewRecordRequest;
pub use services::{InventoryStore, InventoryView, NotificationManager, ThemeService};
