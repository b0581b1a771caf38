//! Aggregate counts over a donor collection.

use shared::{BloodGroup, BloodGroupStats};
use std::collections::BTreeMap;

use super::models::donor::Donor;

/// Whole-collection counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DonorSummary {
    pub total_donors: usize,
    pub eligible_donors: usize,
}

/// Per blood group totals. All eight groups are always present, zero-filled.
///
/// Donors whose stored blood group is not one of the eight are not counted in any group.
pub fn blood_group_stats(donors: &[Donor]) -> BTreeMap<BloodGroup, BloodGroupStats> {
    let mut stats: BTreeMap<BloodGroup, BloodGroupStats> = BloodGroup::ALL
        .iter()
        .map(|group| (*group, BloodGroupStats::default()))
        .collect();

    for donor in donors {
        if let Ok(group) = donor.record.blood_group.parse::<BloodGroup>() {
            let entry = stats.entry(group).or_default();
            entry.count += 1;
            if donor.eligible {
                entry.eligible_count += 1;
            }
        }
    }

    stats
}

pub fn summary(donors: &[Donor]) -> DonorSummary {
    DonorSummary {
        total_donors: donors.len(),
        eligible_donors: donors.iter().filter(|d| d.eligible).count(),
    }
}
