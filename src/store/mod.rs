pub mod export;

use crate::error::{FieldOpsError, Result};
use crate::models::FieldRecord;
use tracing::debug;

/// Ordered, in-memory collection of field records. A record is addressed by
/// its index; removing one shifts every later record down.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<FieldRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record and return its index.
    pub fn insert(&mut self, record: FieldRecord) -> usize {
        self.records.push(record);
        let index = self.records.len() - 1;
        debug!(index, "record inserted");
        index
    }

    pub fn get(&self, index: usize) -> Result<&FieldRecord> {
        self.records
            .get(index)
            .ok_or(FieldOpsError::RecordNotFound(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut FieldRecord> {
        self.records
            .get_mut(index)
            .ok_or(FieldOpsError::RecordNotFound(index))
    }

    pub fn remove(&mut self, index: usize) -> Result<FieldRecord> {
        if index >= self.records.len() {
            return Err(FieldOpsError::RecordNotFound(index));
        }
        let record = self.records.remove(index);
        debug!(index, "record removed");
        Ok(record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldRecord> {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Application, Crop, FieldRecord, Unit};

    fn soy_record() -> FieldRecord {
        FieldRecord::new(
            Crop::Soy,
            0.5,
            "fosfato".into(),
            Application::per_area(40.0, Unit::KgPerHa, 0.5),
        )
    }

    fn corn_record() -> FieldRecord {
        FieldRecord::new(
            Crop::Corn,
            1.2,
            "herbicide x".into(),
            Application::per_length(1.5, 20, 100.0),
        )
    }

    #[test]
    fn insert_appends_at_highest_index() {
        let mut store = RecordStore::new();
        assert_eq!(store.insert(soy_record()), 0);
        assert_eq!(store.insert(corn_record()), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(1).unwrap().crop, Crop::Corn);
    }

    #[test]
    fn remove_shifts_later_records_down() {
        let mut store = RecordStore::new();
        store.insert(soy_record());
        store.insert(corn_record());
        store.insert(soy_record());

        let removed = store.remove(1).unwrap();
        assert_eq!(removed.crop, Crop::Corn);
        assert_eq!(store.len(), 2);
        // the record previously at index 2 is now at index 1
        assert_eq!(store.get(1).unwrap().crop, Crop::Soy);
    }

    #[test]
    fn out_of_range_index_is_typed() {
        let mut store = RecordStore::new();
        store.insert(soy_record());

        assert!(matches!(
            store.get(5),
            Err(crate::error::FieldOpsError::RecordNotFound(5))
        ));
        assert!(store.remove(1).is_err());
        // a failed remove mutates nothing
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn get_mut_allows_in_place_update() {
        let mut store = RecordStore::new();
        store.insert(soy_record());

        store.get_mut(0).unwrap().product = "npk 20-5-10".into();
        assert_eq!(store.get(0).unwrap().product, "npk 20-5-10");
    }
}
