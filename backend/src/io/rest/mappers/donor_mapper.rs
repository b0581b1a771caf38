//! backend/src/io/rest/mappers/donor_mapper.rs

use crate::domain::commands::donors::{DashboardResult, DonorListResult};
use crate::domain::models::donor::{Donor as DomainDonor, DonorInput, IndexedDonor as DomainIndexedDonor};
use shared::{
    DashboardResponse, Donor as SharedDonor, DonorForm, DonorListResponse,
    IndexedDonor as SharedIndexedDonor,
};

/// Mapper between donor DTOs and domain donor models.
pub struct DonorMapper;

impl DonorMapper {
    pub fn to_dto(domain: DomainDonor) -> SharedDonor {
        let record = domain.record;
        SharedDonor {
            name: record.name,
            blood_group: record.blood_group,
            phone: record.phone,
            email: record.email,
            address: record.address,
            registration_date: record.registration_date,
            last_donation: record.last_donation,
            eligible: domain.eligible,
        }
    }

    pub fn to_indexed_dto(domain: DomainIndexedDonor) -> SharedIndexedDonor {
        SharedIndexedDonor {
            index: domain.index,
            donor: Self::to_dto(domain.donor),
        }
    }

    pub fn to_indexed_dtos(domain: Vec<DomainIndexedDonor>) -> Vec<SharedIndexedDonor> {
        domain.into_iter().map(Self::to_indexed_dto).collect()
    }

    pub fn to_input(form: DonorForm) -> DonorInput {
        DonorInput {
            name: form.name,
            blood_group: form.blood_group,
            phone: form.phone,
            email: form.email,
            address: form.address,
            last_donation: form.last_donation,
        }
    }

    pub fn to_list_dto(result: DonorListResult, blood_group: Option<String>) -> DonorListResponse {
        DonorListResponse {
            donors: Self::to_indexed_dtos(result.donors),
            page: result.page,
            per_page: result.per_page,
            total: result.total,
            total_pages: result.total_pages,
            blood_group,
        }
    }

    pub fn to_dashboard_dto(result: DashboardResult, user_name: Option<String>) -> DashboardResponse {
        DashboardResponse {
            total_donors: result.total_donors,
            eligible_donors: result.eligible_donors,
            last_updated: result.last_updated.format("%Y-%m-%d %H:%M:%S").to_string(),
            blood_stats: result.blood_stats,
            user_name,
        }
    }
}
