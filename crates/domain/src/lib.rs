//! Basalt DNS domain layer.
pub mod config;
pub mod errors;
pub mod name;
pub mod record_type;
pub mod resource_record;
pub mod soa;
pub mod stored_record;
pub mod zone;

pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use record_type::{QueryType, RecordType};
pub use resource_record::{RecordData, ResourceRecord, CLASS_IN};
pub use soa::Soa;
pub use stored_record::StoredRecord;
pub use zone::{Zone, ZoneKind};
