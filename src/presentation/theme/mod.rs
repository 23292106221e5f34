//! Color theme derived from the display mode and accent color.

mod adapter;
mod service;

pub use service::Theme;
