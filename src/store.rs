//! In-memory record store
//!
//! Records are addressed by zero-based position. Positions are always the
//! contiguous range `0..len`; a position is only meaningful until the next
//! removal shifts the records after it.

use crate::error::RecordError;
use crate::models::RiskRecord;

/// Ordered, session-scoped collection of risk records
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<RiskRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Add a record after all existing ones
    pub fn append(&mut self, record: RiskRecord) {
        self.records.push(record);
    }

    /// Replace the record at `position` in place
    pub fn update(&mut self, position: i64, record: RiskRecord) -> Result<(), RecordError> {
        let index = self.index_of(position)?;
        self.records[index] = record;
        Ok(())
    }

    /// Remove the record at `position`; later records move down by one
    pub fn remove(&mut self, position: i64) -> Result<RiskRecord, RecordError> {
        let index = self.index_of(position)?;
        Ok(self.records.remove(index))
    }

    pub fn get(&self, position: i64) -> Result<&RiskRecord, RecordError> {
        let index = self.index_of(position)?;
        Ok(&self.records[index])
    }

    /// Snapshot of every record in order
    pub fn all(&self) -> Vec<RiskRecord> {
        self.records.clone()
    }

    fn index_of(&self, position: i64) -> Result<usize, RecordError> {
        usize::try_from(position)
            .ok()
            .filter(|&index| index < self.records.len())
            .ok_or_else(|| RecordError::out_of_range(position, self.records.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(activity: &str, probability: i64, severity: i64) -> RiskRecord {
        RiskRecord::new(activity, "Peligro", "Consecuencia", probability, severity, "").unwrap()
    }

    fn store_with(activities: &[&str]) -> RecordStore {
        let mut store = RecordStore::new();
        for activity in activities {
            store.append(record(activity, 1, 1));
        }
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.all().is_empty());
    }

    #[test]
    fn test_append_then_get_last() {
        let mut store = store_with(&["A", "B"]);
        let new = record("C", 3, 4);
        store.append(new.clone());
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(2).unwrap(), &new);
    }

    #[test]
    fn test_update_in_place() {
        let mut store = store_with(&["A", "B", "C"]);
        let replacement = record("B2", 5, 5);
        store.update(1, replacement.clone()).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0).unwrap().activity, "A");
        assert_eq!(store.get(1).unwrap(), &replacement);
        assert_eq!(store.get(2).unwrap().activity, "C");
    }

    #[test]
    fn test_remove_shifts_later_records() {
        let mut store = store_with(&["A", "B", "C"]);
        let removed = store.remove(1).unwrap();

        assert_eq!(removed.activity, "B");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get(0).unwrap().activity, "A");
        assert_eq!(store.get(1).unwrap().activity, "C");
    }

    #[test]
    fn test_out_of_range_positions() {
        let mut store = store_with(&["A"]);

        assert_eq!(store.get(1), Err(RecordError::out_of_range(1, 1)));
        assert_eq!(store.get(-1), Err(RecordError::out_of_range(-1, 1)));
        assert!(store.update(5, record("X", 1, 1)).is_err());
        assert!(store.remove(-7).is_err());

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().activity, "A");
    }

    #[test]
    fn test_empty_store_rejects_position_zero() {
        let mut store = RecordStore::new();
        assert!(store.get(0).is_err());
        assert!(store.remove(0).is_err());
    }

    #[test]
    fn test_snapshot_is_detached() {
        let store = store_with(&["A"]);
        let mut snapshot = store.all();
        snapshot[0].activity = "changed".to_string();
        snapshot.clear();
        assert_eq!(store.get(0).unwrap().activity, "A");
    }
}
