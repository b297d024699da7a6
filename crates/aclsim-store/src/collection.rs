//! Insertion-ordered collection of ciphertext records.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use aclsim_core::{CiphertextId, CiphertextRecord};

/// An insertion-ordered mapping from id to record.
///
/// No deletion operation exists: records stay live until the process
/// ends. Iteration yields records in the order they were inserted.
#[derive(Debug, Clone, Default)]
pub struct CiphertextCollection {
    records: HashMap<CiphertextId, CiphertextRecord>,
    order: Vec<CiphertextId>,
}

impl CiphertextCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new record. Returns false (and leaves the collection
    /// unchanged) if a record with the same id is already present.
    pub fn insert(&mut self, record: CiphertextRecord) -> bool {
        match self.records.entry(record.id()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                self.order.push(record.id());
                slot.insert(record);
                true
            }
        }
    }

    /// Replace an existing record, returning the previous one.
    ///
    /// Returns None (and stores nothing) if no record with that id exists;
    /// replacement never changes insertion order.
    pub fn replace(&mut self, record: CiphertextRecord) -> Option<CiphertextRecord> {
        match self.records.entry(record.id()) {
            Entry::Occupied(mut slot) => Some(slot.insert(record)),
            Entry::Vacant(_) => None,
        }
    }

    /// Look up a record by id.
    pub fn get(&self, id: &CiphertextId) -> Option<&CiphertextRecord> {
        self.records.get(id)
    }

    /// Whether a record with this id exists.
    pub fn contains(&self, id: &CiphertextId) -> bool {
        self.records.contains_key(id)
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &CiphertextRecord> {
        self.order.iter().filter_map(|id| self.records.get(id))
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
