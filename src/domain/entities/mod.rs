//! Domain entity definitions.

mod record;

pub use record::{IdGenerator, InventoryRecord, RecordId};
