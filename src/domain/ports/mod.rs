mod inventory_storage_port;
mod theme_storage_port;

pub use inventory_storage_port::InventoryStoragePort;
pub use theme_storage_port::ThemeStoragePort;

#[cfg(test)]
pub mod mocks {
    pub use super::inventory_storage_port::mock::MockInventoryStorage;
    pub use super::theme_storage_port::mock::MockThemeStorage;
}
