//! Inventory storage adapters.

mod json_inventory_storage;

pub use json_inventory_storage::JsonInventoryStorage;
