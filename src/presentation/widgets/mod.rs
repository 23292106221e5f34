mod dashboard;
mod footer_bar;
mod header_bar;
mod input;
mod record_table;
mod status_bar;

pub use dashboard::Dashboard;
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use input::{TextInput, ThemedInput};
pub use record_table::RecordTable;
pub use status_bar::{StatusBar, StatusLevel};
