use chrono::Local;
use std::sync::Arc;
use tracing::{info, warn};

use super::commands::donors::{
    DashboardResult, DeleteDonorResult, DonorListQuery, DonorListResult, DonorSearchQuery,
};
use super::eligibility::{record_eligibility, DATE_FORMAT};
use super::errors::{DomainError, DomainResult};
use super::models::donor::{Donor, DonorInput, IndexedDonor};
use super::query::{paginate, DonorFilter, PAGE_SIZE};
use super::statistics::{blood_group_stats, summary};
use super::validation::validate_donor;
use crate::storage::DonorStorage;

/// Service for managing blood donors
///
/// Every operation reloads the full collection first; indexes handed out by one call
/// are only meaningful against the collection as it was at that moment.
#[derive(Clone)]
pub struct DonorService {
    storage: Arc<dyn DonorStorage>,
}

impl DonorService {
    pub fn new(storage: Arc<dyn DonorStorage>) -> Self {
        Self { storage }
    }

    async fn load_indexed(&self) -> DomainResult<Vec<IndexedDonor>> {
        let donors = self.storage.get_all().await?;
        Ok(donors
            .into_iter()
            .enumerate()
            .map(|(index, donor)| IndexedDonor { index, donor })
            .collect())
    }

    fn not_found(index: usize) -> DomainError {
        warn!("Donor index {} is out of range", index);
        DomainError::NotFound("Invalid donor ID".to_string())
    }

    /// List one page of donors, optionally restricted to a blood group
    pub async fn list_donors(&self, query: DonorListQuery) -> DomainResult<DonorListResult> {
        info!("Listing donors: page={}, blood_group={:?}", query.page, query.blood_group);

        let filter = DonorFilter {
            blood_group: query.blood_group,
            ..Default::default()
        };
        let matching = filter.apply(self.load_indexed().await?);
        let page = paginate(matching, query.page, PAGE_SIZE);
        let total_pages = page.total_pages();

        Ok(DonorListResult {
            donors: page.items,
            page: page.page,
            per_page: page.per_page,
            total: page.total,
            total_pages,
        })
    }

    pub async fn get_donor(&self, index: usize) -> DomainResult<IndexedDonor> {
        self.load_indexed()
            .await?
            .into_iter()
            .nth(index)
            .ok_or_else(|| Self::not_found(index))
    }

    /// Validate and append a new donor, stamping today's registration date
    pub async fn add_donor(&self, input: DonorInput) -> DomainResult<IndexedDonor> {
        info!("Adding donor: {}", input.name);

        let today = Local::now().date_naive();
        let record = input.into_record(today.format(DATE_FORMAT).to_string());

        let errors = validate_donor(&record);
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        let mut donors = self.storage.get_all().await?;
        let eligible = record_eligibility(&record, today);
        donors.push(Donor::new(record, eligible));
        self.storage.save_all(&donors).await?;

        let index = donors.len() - 1;
        info!("Added donor at index {}", index);
        Ok(IndexedDonor {
            index,
            donor: donors.swap_remove(index),
        })
    }

    /// Replace the donor at `index`. The registration date is kept.
    ///
    /// Every other field comes from `input`, `last_donation` included: an edit that
    /// leaves it out clears the donation history and the donor becomes eligible again.
    pub async fn edit_donor(&self, index: usize, input: DonorInput) -> DomainResult<IndexedDonor> {
        info!("Editing donor at index {}", index);

        let mut donors = self.storage.get_all().await?;
        let registration_date = match donors.get(index) {
            Some(existing) => existing.record.registration_date.clone(),
            None => return Err(Self::not_found(index)),
        };

        let record = input.into_record(registration_date);
        let errors = validate_donor(&record);
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        let eligible = record_eligibility(&record, Local::now().date_naive());
        let updated = Donor::new(record, eligible);
        donors[index] = updated.clone();
        self.storage.save_all(&donors).await?;

        info!("Updated donor {} at index {}", updated.record.name, index);
        Ok(IndexedDonor { index, donor: updated })
    }

    /// Remove the donor at `index`; later donors shift down by one
    pub async fn delete_donor(&self, index: usize) -> DomainResult<DeleteDonorResult> {
        info!("Deleting donor at index {}", index);

        let mut donors = self.storage.get_all().await?;
        if index >= donors.len() {
            return Err(Self::not_found(index));
        }

        let removed = donors.remove(index);
        self.storage.save_all(&donors).await?;

        let deleted_name = removed.record.name;
        info!("Deleted donor {}", deleted_name);
        Ok(DeleteDonorResult {
            success_message: format!("Donor {} deleted successfully!", deleted_name),
            deleted_name,
        })
    }

    pub async fn search_donors(&self, query: DonorSearchQuery) -> DomainResult<Vec<IndexedDonor>> {
        info!("Searching donors: {:?}", query);

        let filter = DonorFilter {
            query: query.query,
            blood_group: query.blood_group,
            eligible_only: query.eligible_only,
        };
        let matches = filter.apply(self.load_indexed().await?);

        info!("Search matched {} donors", matches.len());
        Ok(matches)
    }

    pub async fn dashboard(&self) -> DomainResult<DashboardResult> {
        let donors = self.storage.get_all().await?;
        let totals = summary(&donors);

        Ok(DashboardResult {
            total_donors: totals.total_donors,
            eligible_donors: totals.eligible_donors,
            blood_stats: blood_group_stats(&donors),
            last_updated: Local::now().naive_local(),
        })
    }
}
