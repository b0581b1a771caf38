// backend/src/domain/commands.rs

//! Domain-level command and query types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer maps the public DTOs defined in
//! the `shared` crate to these internal types.

pub mod donors {
    use chrono::NaiveDateTime;
    use shared::{BloodGroup, BloodGroupStats};
    use std::collections::BTreeMap;

    use crate::domain::models::donor::IndexedDonor;

    /// Query for one page of the donor listing.
    #[derive(Debug, Clone, Default)]
    pub struct DonorListQuery {
        /// 1-indexed page number
        pub page: usize,
        pub blood_group: Option<String>,
    }

    /// Query for the donor search.
    #[derive(Debug, Clone, Default)]
    pub struct DonorSearchQuery {
        pub query: Option<String>,
        pub blood_group: Option<String>,
        pub eligible_only: bool,
    }

    /// Result of listing donors.
    #[derive(Debug, Clone)]
    pub struct DonorListResult {
        pub donors: Vec<IndexedDonor>,
        pub page: usize,
        pub per_page: usize,
        /// Number of matching donors before paging
        pub total: usize,
        pub total_pages: usize,
    }

    /// Result of deleting a donor.
    #[derive(Debug, Clone)]
    pub struct DeleteDonorResult {
        pub deleted_name: String,
        pub success_message: String,
    }

    /// Aggregate counts shown on the dashboard.
    #[derive(Debug, Clone)]
    pub struct DashboardResult {
        pub total_donors: usize,
        pub eligible_donors: usize,
        pub blood_stats: BTreeMap<BloodGroup, BloodGroupStats>,
        pub last_updated: NaiveDateTime,
    }
}

pub mod users {
    /// Input for registering a new user.
    #[derive(Debug, Clone)]
    pub struct RegisterUserCommand {
        pub fullname: String,
        pub email: String,
        pub password: String,
        pub confirm_password: String,
        pub blood_group: String,
        pub phone: String,
        pub address: String,
    }

    /// Input for logging in.
    #[derive(Debug, Clone)]
    pub struct LoginCommand {
        pub email: String,
        pub password: String,
    }
}
