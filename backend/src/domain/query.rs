//! Donor search filters and page slicing.
//!
//! Filters are independent predicates; applying them in any order gives the same result.

use super::models::donor::{Donor, IndexedDonor};

/// Donors shown per listing page
pub const PAGE_SIZE: usize = 10;

/// Case-insensitive substring match against name, blood group or address
pub fn matches_text(donor: &Donor, query: &str) -> bool {
    let query = query.to_lowercase();
    let record = &donor.record;
    record.name.to_lowercase().contains(&query)
        || record.blood_group.to_lowercase().contains(&query)
        || record.address.to_lowercase().contains(&query)
}

pub fn matches_blood_group(donor: &Donor, blood_group: &str) -> bool {
    donor.record.blood_group == blood_group
}

/// Combined donor filter. Empty strings count as "no filter".
#[derive(Debug, Clone, Default)]
pub struct DonorFilter {
    pub query: Option<String>,
    pub blood_group: Option<String>,
    pub eligible_only: bool,
}

impl DonorFilter {
    pub fn matches(&self, donor: &Donor) -> bool {
        if let Some(query) = non_empty(&self.query) {
            if !matches_text(donor, query) {
                return false;
            }
        }

        if let Some(blood_group) = non_empty(&self.blood_group) {
            if !matches_blood_group(donor, blood_group) {
                return false;
            }
        }

        !self.eligible_only || donor.eligible
    }

    /// Keep matching donors, preserving order and positional indexes
    pub fn apply(&self, donors: Vec<IndexedDonor>) -> Vec<IndexedDonor> {
        donors.into_iter().filter(|d| self.matches(&d.donor)).collect()
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// One page of an already filtered sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    /// Item count before slicing
    pub total: usize,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> usize {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page)
    }
}

/// Slice out 1-indexed page `page`. Pages past the end are empty, not an error.
/// Page 0 is treated as page 1.
pub fn paginate<T>(items: Vec<T>, page: usize, per_page: usize) -> Page<T> {
    let page = page.max(1);
    let total = items.len();
    let start = (page - 1).saturating_mul(per_page);

    let items = items.into_iter().skip(start).take(per_page).collect();

    Page { items, page, per_page, total }
}
