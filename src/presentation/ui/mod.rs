//! UI screens.

mod app;
mod confirm_dialog;
mod inventory_screen;
mod utils;

pub use app::{App, AppOptions};
pub use confirm_dialog::{ConfirmDialog, DELETE_PROMPT};
pub use inventory_screen::{Focus, InventoryScreen, InventoryScreenState, ScreenKeyResult};
pub use utils::centered_rect;
