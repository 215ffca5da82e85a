//! Address-book storage core.
//! This crate owns the JSON document contract: export, import, duplicate
//! detection and record validation.

pub mod config;
pub mod logging;
pub mod model;
pub mod storage;

pub use config::{ConfigError, ImportOptions, ReferencePolicy};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::address_book::{AddressBook, ModelError, ReadOnlyAddressBook};
pub use model::person::{Address, Email, Name, Person, Phone};
pub use model::tag::{EventTag, Tag};
pub use model::validation::ValidationError;
pub use storage::adapter::{RecordAdapter, ReferenceScope};
pub use storage::document::{AddressBookDocument, AddressBookEnvelope};
pub use storage::error::{
    DocumentError, DocumentResult, EntityKind, MESSAGE_DUPLICATE_EVENT_TAG,
    MESSAGE_DUPLICATE_PERSON, MESSAGE_DUPLICATE_TAG,
};
pub use storage::records::{EventTagRecord, PersonRecord, TagRecord};
