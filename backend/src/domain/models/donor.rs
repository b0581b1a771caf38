//! backend/src/domain/models/donor.rs

use serde::{Deserialize, Serialize};

/// Donor exactly as persisted. Field order is the column order of the tabular mirror.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorRecord {
    pub name: String,
    pub blood_group: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub registration_date: String,
    /// Always written, as `null` when absent, so every record has the same field set
    #[serde(default)]
    pub last_donation: Option<String>,
}

/// Domain model of a donor: the stored record plus the derived eligibility flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Donor {
    pub record: DonorRecord,
    pub eligible: bool,
}

impl Donor {
    pub fn new(record: DonorRecord, eligible: bool) -> Self {
        Self { record, eligible }
    }

    /// Strip the derived state, leaving only what is persisted
    pub fn to_record(&self) -> DonorRecord {
        self.record.clone()
    }
}

/// A donor paired with its position in the stored sequence
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedDonor {
    pub index: usize,
    pub donor: Donor,
}

/// Donor fields supplied by a caller for add/edit
#[derive(Debug, Clone, PartialEq)]
pub struct DonorInput {
    pub name: String,
    pub blood_group: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub last_donation: Option<String>,
}

impl DonorInput {
    /// Build the record to persist, stamping the given registration date
    pub fn into_record(self, registration_date: String) -> DonorRecord {
        DonorRecord {
            name: self.name,
            blood_group: self.blood_group,
            phone: self.phone,
            email: self.email,
            address: self.address,
            registration_date,
            last_donation: self.last_donation.filter(|d| !d.trim().is_empty()),
        }
    }
}
