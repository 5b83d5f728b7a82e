//! Contact service: loading, lookup, and mutations with simulated latency

use std::time::Duration;

use thiserror::Error;
use uuid::Uuid;

use super::models::{Contact, NewContact};
use super::repository::ContactRepository;
use super::source::ContactSource;

#[derive(Error, Debug)]
pub enum ContactsError {
    #[error("Source error: {0}")]
    Source(#[from] super::source::SourceError),

    #[error("email and phone number must be unique")]
    DuplicateContact,
}

pub type Result<T> = std::result::Result<T, ContactsError>;

/// Simulated-latency configuration. Mutations sleep these durations to
/// emulate eventual consistency; tests use `Latency::none()`.
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    /// Settling delay after a successful load
    pub settle: Duration,
    /// Round-trip delay for update and create
    pub update: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            settle: Duration::from_secs(1),
            update: Duration::from_millis(1500),
        }
    }
}

impl Latency {
    pub const fn none() -> Self {
        Self {
            settle: Duration::ZERO,
            update: Duration::ZERO,
        }
    }
}

/// Orchestrates the contact repository: one-shot loading from the remote
/// source, lookups, and create/update with uniqueness enforced at creation.
///
/// `ready` is false until the initial load completes and while a mutation
/// is in flight. Mutations take `&mut self`, so a single service instance
/// serializes them; sharing across tasks is the caller's `Arc<Mutex<_>>`.
pub struct ContactService {
    repository: ContactRepository,
    source: Box<dyn ContactSource>,
    latency: Latency,
    ready: bool,
}

impl ContactService {
    pub fn new(source: Box<dyn ContactSource>) -> Self {
        Self {
            repository: ContactRepository::new(),
            source,
            latency: Latency::default(),
            ready: false,
        }
    }

    pub fn with_latency(mut self, latency: Latency) -> Self {
        self.latency = latency;
        self
    }

    /// True once the initial load has completed and no mutation is in flight
    pub fn ready(&self) -> bool {
        self.ready
    }

    pub fn repository(&self) -> &ContactRepository {
        &self.repository
    }

    pub fn contacts(&self) -> &[Contact] {
        self.repository.all()
    }

    pub fn emails(&self) -> Vec<String> {
        self.repository.emails()
    }

    pub fn phone_numbers(&self) -> Vec<String> {
        self.repository.phone_numbers()
    }

    pub fn states(&self) -> Vec<String> {
        self.repository.states()
    }

    /// Populate the repository from the remote source.
    ///
    /// A no-op once `ready` is set: the source not returning any data can be
    /// a valid response, so an empty repository is not used as the loaded
    /// indicator. Fetch and parse failures are logged and swallowed; `ready`
    /// stays false so a later call retries from scratch.
    pub async fn load(&mut self) {
        if self.ready {
            return;
        }

        match self.source.fetch().await {
            Ok(remote_contacts) => {
                let count = remote_contacts.len();
                for remote in remote_contacts {
                    self.repository.put(Contact::from(remote));
                }
                log::info!("loaded {} contacts", count);
                tokio::time::sleep(self.latency.settle).await;
                self.ready = true;
            }
            Err(e) => {
                log::error!("failed to load contacts: {}", e);
            }
        }
    }

    /// Get a single contact by id, or `None` for blank/unknown ids
    pub fn get_contact(&self, id: &str) -> Option<&Contact> {
        self.repository.get(id)
    }

    /// Replace the stored contact with the same id (or insert it), after the
    /// simulated round-trip delay. No uniqueness re-validation on update.
    pub async fn update_contact(&mut self, contact: Contact) {
        self.ready = false;
        tokio::time::sleep(self.latency.update).await;
        log::debug!("updating contact {}", contact.id);
        self.repository.put(contact);
        self.ready = true;
    }

    /// Create a contact with a fresh id and `active = true`. Fails before
    /// any mutation if the email or phone number is already taken.
    pub async fn create_contact(&mut self, new_contact: NewContact) -> Result<Contact> {
        if self.repository.emails().contains(&new_contact.email)
            || self
                .repository
                .phone_numbers()
                .contains(&new_contact.phone.phone_number)
        {
            return Err(ContactsError::DuplicateContact);
        }

        let contact = Contact {
            id: Uuid::new_v4().to_string(),
            first_name: new_contact.first_name,
            last_name: new_contact.last_name,
            email: new_contact.email,
            active: true,
            phone: new_contact.phone,
            address: new_contact.address,
        };

        self.update_contact(contact.clone()).await;
        Ok(contact)
    }
}
