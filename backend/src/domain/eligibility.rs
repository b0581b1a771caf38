//! Donation eligibility.
//!
//! A donor may donate again once [`COOLDOWN_DAYS`] whole days have passed since their last
//! donation. Donors with no donation on record are always eligible. Eligibility is never
//! stored; it is recomputed from `last_donation` every time donors are loaded.

use chrono::NaiveDate;
use tracing::error;

use super::errors::{DomainError, DomainResult};
use super::models::donor::DonorRecord;

pub const COOLDOWN_DAYS: i64 = 90;

/// Date format used for `registration_date` and `last_donation`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(value: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|source| DomainError::DateParse {
        value: value.to_string(),
        source,
    })
}

/// Whether a donor whose last donation was `last_donation` may donate on `today`.
///
/// A malformed date is an error rather than a silent "eligible".
pub fn is_eligible(last_donation: Option<&str>, today: NaiveDate) -> DomainResult<bool> {
    let last_donation = match last_donation {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Ok(true),
    };

    let last_date = parse_date(last_donation)?;
    Ok((today - last_date).num_days() >= COOLDOWN_DAYS)
}

/// Eligibility of a single stored record.
///
/// A date parse failure only affects this record: it is logged and the donor is
/// reported as not eligible.
pub fn record_eligibility(record: &DonorRecord, today: NaiveDate) -> bool {
    match is_eligible(record.last_donation.as_deref(), today) {
        Ok(eligible) => eligible,
        Err(e) => {
            error!("Cannot compute eligibility for donor '{}': {}", record.name, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn days_ago(days: i64) -> String {
        (today() - Duration::days(days)).format(DATE_FORMAT).to_string()
    }

    #[test]
    fn test_no_last_donation_is_eligible() {
        assert!(is_eligible(None, today()).unwrap());
        assert!(is_eligible(Some(""), today()).unwrap());
    }

    #[test]
    fn test_cooldown_boundary() {
        assert!(is_eligible(Some(&days_ago(90)), today()).unwrap());
        assert!(!is_eligible(Some(&days_ago(89)), today()).unwrap());
        assert!(is_eligible(Some(&days_ago(365)), today()).unwrap());
        assert!(!is_eligible(Some(&days_ago(0)), today()).unwrap());
    }

    #[test]
    fn test_malformed_date_is_an_error() {
        let result = is_eligible(Some("15/06/2024"), today());
        assert!(matches!(result, Err(DomainError::DateParse { .. })));
    }

    #[test]
    fn test_record_eligibility_isolates_bad_dates() {
        let record = DonorRecord {
            name: "Jane Roe".to_string(),
            blood_group: "A+".to_string(),
            phone: "1234567890".to_string(),
            email: "jane@example.com".to_string(),
            address: "Somewhere".to_string(),
            registration_date: "2024-01-01".to_string(),
            last_donation: Some("not-a-date".to_string()),
        };
        assert!(!record_eligibility(&record, today()));
    }
}
