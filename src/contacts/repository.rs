//! In-memory contact repository

use std::collections::BTreeSet;

use super::models::Contact;

/// Keyed collection of contacts plus derived read views. The backing list
/// preserves insertion order; derived views are computed from it on every
/// read so they never go stale relative to the last `put`.
#[derive(Debug, Default)]
pub struct ContactRepository {
    contacts: Vec<Contact>,
}

impl ContactRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a contact by id. Blank and unknown ids yield `None`.
    pub fn get(&self, id: &str) -> Option<&Contact> {
        if id.trim().is_empty() {
            return None;
        }
        self.contacts.iter().find(|c| c.id == id)
    }

    /// All contacts, in insertion order
    pub fn all(&self) -> &[Contact] {
        &self.contacts
    }

    /// One email per contact, in `all()` order
    pub fn emails(&self) -> Vec<String> {
        self.contacts.iter().map(|c| c.email.clone()).collect()
    }

    /// One phone number per contact, in `all()` order
    pub fn phone_numbers(&self) -> Vec<String> {
        self.contacts
            .iter()
            .map(|c| c.phone.phone_number.clone())
            .collect()
    }

    /// Distinct address states, sorted ascending
    pub fn states(&self) -> Vec<String> {
        self.contacts
            .iter()
            .map(|c| c.address.state.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Insert or replace the contact keyed by its id. No validation here;
    /// uniqueness is the service's concern.
    pub fn put(&mut self, contact: Contact) {
        if let Some(existing) = self.contacts.iter_mut().find(|c| c.id == contact.id) {
            *existing = contact;
        } else {
            self.contacts.push(contact);
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}
