pub mod models;
pub mod phone_types;
pub mod repository;
pub mod service;
pub mod source;

pub use models::*;
pub use phone_types::{phone_type, PhoneType, PHONE_TYPES};
pub use repository::ContactRepository;
pub use service::{ContactService, ContactsError, Latency};
pub use source::{ContactSource, HttpContactSource, SourceError};
