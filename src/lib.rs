pub mod contacts;

pub use contacts::{
    Address, Contact, ContactRepository, ContactService, ContactSource, ContactsError,
    HttpContactSource, Latency, NewContact, Phone,
};
