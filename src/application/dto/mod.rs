//! Data transfer objects for the application layer.

mod record_dto;

pub use record_dto::{EXPIRY_FORMAT, NewRecordRequest, ValidatedRecord};
