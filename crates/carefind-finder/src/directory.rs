//! The internal persisted-records collaborator.
//!
//! Read side feeds the aggregator's secondary source; the write mutations
//! exist to seed and maintain the records and are not part of the finder's
//! hot path.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use carefind_core::HospitalRecord;

use crate::error::FinderError;
use crate::seed::seeded_hospitals;

/// Persisted hospital records, already typed and geocoded.
#[async_trait]
pub trait HospitalDirectory: Send + Sync {
    /// Returns every record in the directory.
    async fn fetch_all(&self) -> Result<Vec<HospitalRecord>, FinderError>;

    /// Inserts a record, replacing any existing record with the same id.
    async fn insert(&self, record: HospitalRecord) -> Result<(), FinderError>;

    /// Replaces an existing record.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::NotFound`] if no record has the given id.
    async fn update(&self, record: HospitalRecord) -> Result<(), FinderError>;

    /// Removes a record by id.
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::NotFound`] if no record has the given id.
    async fn delete(&self, id: &str) -> Result<(), FinderError>;
}

/// In-memory [`HospitalDirectory`] keyed by record id.
#[derive(Default)]
pub struct InMemoryDirectory {
    records: RwLock<HashMap<String, HospitalRecord>>,
}

impl InMemoryDirectory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a directory pre-populated with the given records.
    #[must_use]
    pub fn with_records(records: Vec<HospitalRecord>) -> Self {
        let map = records.into_iter().map(|r| (r.id.clone(), r)).collect();
        Self {
            records: RwLock::new(map),
        }
    }

    /// Builds a directory holding the seeded Malaysian hospital set.
    #[must_use]
    pub fn seeded() -> Self {
        Self::with_records(seeded_hospitals())
    }
}

#[async_trait]
impl HospitalDirectory for InMemoryDirectory {
    async fn fetch_all(&self) -> Result<Vec<HospitalRecord>, FinderError> {
        let records = self.records.read().await;
        let mut all: Vec<HospitalRecord> = records.values().cloned().collect();
        // HashMap iteration order is arbitrary; keep output deterministic.
        all.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(all)
    }

    async fn insert(&self, record: HospitalRecord) -> Result<(), FinderError> {
        let mut records = self.records.write().await;
        records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn update(&self, record: HospitalRecord) -> Result<(), FinderError> {
        let mut records = self.records.write().await;
        if !records.contains_key(&record.id) {
            return Err(FinderError::NotFound(record.id));
        }
        records.insert(record.id.clone(), record);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), FinderError> {
        let mut records = self.records.write().await;
        if records.remove(id).is_none() {
            return Err(FinderError::NotFound(id.to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carefind_core::{Coordinate, HospitalType};

    fn record(id: &str, name: &str) -> HospitalRecord {
        HospitalRecord {
            id: id.to_owned(),
            name: name.to_owned(),
            hospital_type: HospitalType::Clinic,
            address: "Jalan Test".to_owned(),
            city: "Kuala Lumpur".to_owned(),
            state: "Wilayah Persekutuan".to_owned(),
            postal_code: String::new(),
            coordinate: Coordinate::new(3.15, 101.70),
            phone_number: None,
            emergency_number: None,
            website: None,
            email: None,
            operating_hours: None,
            is_24_hours: false,
            has_emergency: false,
            specialties: vec![],
            facilities: vec![],
            rating: None,
        }
    }

    #[tokio::test]
    async fn fetch_all_is_sorted_by_id() {
        let dir = InMemoryDirectory::with_records(vec![
            record("internal:b", "Bravo"),
            record("internal:a", "Alpha"),
        ]);
        let all = dir.fetch_all().await.unwrap();
        let ids: Vec<&str> = all.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["internal:a", "internal:b"]);
    }

    #[tokio::test]
    async fn update_missing_record_is_not_found() {
        let dir = InMemoryDirectory::new();
        let err = dir.update(record("internal:x", "X")).await.unwrap_err();
        assert!(matches!(err, FinderError::NotFound(_)));
    }

    #[tokio::test]
    async fn insert_update_delete_round_trip() {
        let dir = InMemoryDirectory::new();
        dir.insert(record("internal:a", "Alpha")).await.unwrap();

        let mut renamed = record("internal:a", "Alpha Medical Centre");
        renamed.rating = Some(4.0);
        dir.update(renamed).await.unwrap();

        let all = dir.fetch_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Alpha Medical Centre");

        dir.delete("internal:a").await.unwrap();
        assert!(dir.fetch_all().await.unwrap().is_empty());
        let err = dir.delete("internal:a").await.unwrap_err();
        assert!(matches!(err, FinderError::NotFound(_)));
    }

    #[tokio::test]
    async fn seeded_directory_has_namespaced_ids_and_valid_coordinates() {
        let dir = InMemoryDirectory::seeded();
        let all = dir.fetch_all().await.unwrap();
        assert!(!all.is_empty());
        for r in &all {
            assert!(r.id.starts_with("internal:"), "unexpected id: {}", r.id);
            assert!(r.coordinate.is_valid());
        }
    }
}
