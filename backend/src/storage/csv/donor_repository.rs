//! # Donor Repository
//!
//! Donor persistence on top of [`RecordStore`]: `donors.json` is authoritative and
//! `donors.csv` mirrors it.
//!
//! Eligibility is attached on every read and dropped on every write, so the stored
//! files only ever contain [`DonorRecord`] fields.

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use tracing::info;

use super::connection::CsvConnection;
use super::record_store::RecordStore;
use crate::domain::eligibility::record_eligibility;
use crate::domain::models::donor::{Donor, DonorRecord};
use crate::storage::{DonorStorage, StoreError};

#[derive(Debug, Clone)]
pub struct DonorRepository {
    store: RecordStore<DonorRecord>,
}

impl DonorRepository {
    pub fn new(connection: &CsvConnection) -> Self {
        Self {
            store: RecordStore::new(connection.donors_json_path(), connection.donors_csv_path()),
        }
    }

    /// Load all donors with eligibility computed relative to `today`
    pub fn get_all_as_of(&self, today: NaiveDate) -> Vec<Donor> {
        self.store
            .load()
            .into_iter()
            .map(|record| {
                let eligible = record_eligibility(&record, today);
                Donor::new(record, eligible)
            })
            .collect()
    }
}

#[async_trait]
impl DonorStorage for DonorRepository {
    async fn get_all(&self) -> Result<Vec<Donor>, StoreError> {
        Ok(self.get_all_as_of(Local::now().date_naive()))
    }

    async fn save_all(&self, donors: &[Donor]) -> Result<(), StoreError> {
        let records: Vec<DonorRecord> = donors.iter().map(Donor::to_record).collect();
        self.store.save(&records)?;
        info!("Saved {} donors", records.len());
        Ok(())
    }
}
