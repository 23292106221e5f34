//! Shelfwatch - a terminal tracker for perishable items.
//!
//! Keeps a local inventory of items with expiry dates, classifies each one as
//! safe, expiring soon or expired, and shows the list with category filtering,
//! expiry sorting and summary counters.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing services and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing filesystem adapters and configuration.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "shelfwatch";
