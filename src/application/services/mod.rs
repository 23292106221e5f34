//! Application services.

pub mod inventory_store;
pub mod inventory_view;
pub mod notification_manager;
pub mod theme_service;

pub use inventory_store::InventoryStore;
pub use inventory_view::{
    ALL_CATEGORIES, CategoryFilter, DashboardCounts, InventoryQuery, InventoryView, SortOrder,
    ViewRow, category_options,
};
pub use notification_manager::NotificationManager;
pub use theme_service::ThemeService;
