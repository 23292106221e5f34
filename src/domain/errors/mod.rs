//! Domain error types.

mod inventory_error;
mod preference_error;

pub use inventory_error::InventoryError;
pub use preference_error::PreferenceError;
