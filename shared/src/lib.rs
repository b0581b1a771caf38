use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// ABO/Rh blood group. Serialized using the conventional notation ("A+", "AB-", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BloodGroup {
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
}

impl BloodGroup {
    /// Every blood group, in display order
    pub const ALL: [BloodGroup; 8] = [
        BloodGroup::APositive,
        BloodGroup::ANegative,
        BloodGroup::BPositive,
        BloodGroup::BNegative,
        BloodGroup::AbPositive,
        BloodGroup::AbNegative,
        BloodGroup::OPositive,
        BloodGroup::ONegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BloodGroup::APositive => "A+",
            BloodGroup::ANegative => "A-",
            BloodGroup::BPositive => "B+",
            BloodGroup::BNegative => "B-",
            BloodGroup::AbPositive => "AB+",
            BloodGroup::AbNegative => "AB-",
            BloodGroup::OPositive => "O+",
            BloodGroup::ONegative => "O-",
        }
    }
}

impl fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBloodGroup(pub String);

impl fmt::Display for UnknownBloodGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown blood group: {}", self.0)
    }
}

impl std::error::Error for UnknownBloodGroup {}

impl FromStr for BloodGroup {
    type Err = UnknownBloodGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BloodGroup::ALL
            .iter()
            .copied()
            .find(|group| group.as_str() == s)
            .ok_or_else(|| UnknownBloodGroup(s.to_string()))
    }
}

/// A donor as presented to clients, including the derived eligibility flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    pub name: String,
    pub blood_group: String,
    /// 10-digit phone number
    pub phone: String,
    pub email: String,
    pub address: String,
    /// Date the donor was registered (YYYY-MM-DD)
    pub registration_date: String,
    /// Date of the most recent donation (YYYY-MM-DD), if any
    pub last_donation: Option<String>,
    /// Derived: no donation on record or at least 90 days since the last one
    pub eligible: bool,
}

/// A donor together with its position in the stored collection.
///
/// The position is the donor's only identifier; it shifts when earlier donors are deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexedDonor {
    pub index: usize,
    #[serde(flatten)]
    pub donor: Donor,
}

/// Donor fields submitted when adding or editing a donor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorForm {
    pub name: String,
    pub blood_group: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    #[serde(default)]
    pub last_donation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorListResponse {
    pub donors: Vec<IndexedDonor>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub blood_group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorResponse {
    pub donor: IndexedDonor,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteDonorResponse {
    pub deleted_name: String,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorSearchResponse {
    pub donors: Vec<IndexedDonor>,
}

/// Donor counts for one blood group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BloodGroupStats {
    pub count: usize,
    pub eligible_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub total_donors: usize,
    pub eligible_donors: usize,
    /// Local time the summary was computed ("%Y-%m-%d %H:%M:%S")
    pub last_updated: String,
    pub blood_stats: BTreeMap<BloodGroup, BloodGroupStats>,
    pub user_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub blood_group: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterUserResponse {
    pub email: String,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token identifying the session
    pub token: String,
    pub email: String,
    pub fullname: String,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoutResponse {
    pub success_message: String,
}

/// Rejected form submission. The submitted form is echoed back so it can be re-shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorResponse<T> {
    pub errors: Vec<String>,
    pub form: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    /// Where the client should go instead, e.g. back to the donor listing
    pub redirect_to: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blood_group_parse_and_display() {
        for group in BloodGroup::ALL {
            let parsed: BloodGroup = group.as_str().parse().unwrap();
            assert_eq!(parsed, group);
            assert_eq!(parsed.to_string(), group.as_str());
        }
        assert!("X+".parse::<BloodGroup>().is_err());
        assert!("o+".parse::<BloodGroup>().is_err());
    }

    #[test]
    fn test_blood_group_serializes_with_symbol() {
        let json = serde_json::to_string(&BloodGroup::AbNegative).unwrap();
        assert_eq!(json, "\"AB-\"");
    }

    #[test]
    fn test_dashboard_stats_keyed_by_symbol() {
        let mut blood_stats = BTreeMap::new();
        blood_stats.insert(BloodGroup::OPositive, BloodGroupStats { count: 2, eligible_count: 1 });

        let response = DashboardResponse {
            total_donors: 2,
            eligible_donors: 1,
            last_updated: "2024-01-01 10:00:00".to_string(),
            blood_stats,
            user_name: Some("Jane".to_string()),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["blood_stats"]["O+"]["count"], 2);
        assert_eq!(value["blood_stats"]["O+"]["eligible_count"], 1);
    }

    #[test]
    fn test_indexed_donor_flattens_fields() {
        let indexed = IndexedDonor {
            index: 3,
            donor: Donor {
                name: "John Doe".to_string(),
                blood_group: "O+".to_string(),
                phone: "1234567890".to_string(),
                email: "john@example.com".to_string(),
                address: "1 Main St".to_string(),
                registration_date: "2024-01-01".to_string(),
                last_donation: None,
                eligible: true,
            },
        };

        let value = serde_json::to_value(&indexed).unwrap();
        assert_eq!(value["index"], 3);
        assert_eq!(value["name"], "John Doe");
        assert_eq!(value["eligible"], true);
    }

    #[test]
    fn test_donor_form_last_donation_defaults_to_none() {
        let form: DonorForm = serde_json::from_str(
            r#"{"name":"A","blood_group":"A+","phone":"1234567890","email":"a@b.com","address":"x"}"#,
        )
        .unwrap();
        assert_eq!(form.last_donation, None);
    }
}
