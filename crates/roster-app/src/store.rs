//! Record store: owner of the record list and its per-record flags
//!
//! The store is read by shells for rendering but written only by the
//! [`DisclosureCoordinator`](crate::disclosure::DisclosureCoordinator).

use roster_core::{Record, RecordId, SaveError};

/// Storage for selectable records.
///
/// Reads return owned values so implementations are free to keep records
/// behind whatever storage they like.
#[cfg_attr(test, mockall::automock)]
pub trait RecordStore {
    /// All records in display order
    fn list(&self) -> Vec<Record>;

    /// A single record by id
    fn get(&self, id: &RecordId) -> Option<Record>;

    /// Set or clear the "active" (disclosed) marker of a record
    fn set_active(&mut self, id: &RecordId, active: bool);

    /// Set or clear batch-selection membership of a record
    fn set_selected(&mut self, id: &RecordId, selected: bool);

    /// Ids of every record currently selected, in display order
    fn selected_ids(&self) -> Vec<RecordId>;

    /// Persist edited record data
    fn save(&mut self, record: &Record) -> Result<(), SaveError>;

    /// Drop a record from the store, returning it if it existed
    fn remove(&mut self, id: &RecordId) -> Option<Record>;
}

/// In-memory [`RecordStore`] backed by a `Vec` in display order
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Vec<Record>,
}

impl InMemoryRecordStore {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn find_mut(&mut self, id: &RecordId) -> Option<&mut Record> {
        self.records.iter_mut().find(|r| &r.id == id)
    }
}

impl RecordStore for InMemoryRecordStore {
    fn list(&self) -> Vec<Record> {
        self.records.clone()
    }

    fn get(&self, id: &RecordId) -> Option<Record> {
        self.records.iter().find(|r| &r.id == id).cloned()
    }

    fn set_active(&mut self, id: &RecordId, active: bool) {
        if let Some(record) = self.find_mut(id) {
            record.active = active;
        }
    }

    fn set_selected(&mut self, id: &RecordId, selected: bool) {
        if let Some(record) = self.find_mut(id) {
            record.selected = selected;
        }
    }

    fn selected_ids(&self) -> Vec<RecordId> {
        self.records
            .iter()
            .filter(|r| r.selected)
            .map(|r| r.id.clone())
            .collect()
    }

    /// Replaces the record's data; the store keeps its own flags.
    fn save(&mut self, record: &Record) -> Result<(), SaveError> {
        let stored = self
            .find_mut(&record.id)
            .ok_or_else(|| SaveError::NotFound(record.id.clone()))?;
        let (active, selected) = (stored.active, stored.selected);
        *stored = Record {
            active,
            selected,
            ..record.clone()
        };
        Ok(())
    }

    fn remove(&mut self, id: &RecordId) -> Option<Record> {
        let pos = self.records.iter().position(|r| &r.id == id)?;
        Some(self.records.remove(pos))
    }
}
