//! Form validation.
//!
//! Each function checks every rule and returns one message per violation.
//! An empty list means the input is valid.

use chrono::{Local, NaiveDate};
use lazy_static::lazy_static;
use regex::Regex;
use shared::BloodGroup;

use super::commands::users::RegisterUserCommand;
use super::eligibility::parse_date;
use super::models::donor::DonorRecord;

lazy_static! {
    /// Letters and whitespace only
    static ref NAME_REGEX: Regex = Regex::new(r"^[A-Za-z\s]+$").unwrap();

    /// Exactly ten decimal digits
    static ref PHONE_REGEX: Regex = Regex::new(r"^[0-9]{10}$").unwrap();

    /// Loose address shape: something@something.something
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^@]+@[^@]+\.[^@]+$").unwrap();
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate a donor against today's date
pub fn validate_donor(candidate: &DonorRecord) -> Vec<String> {
    validate_donor_as_of(candidate, Local::now().date_naive())
}

pub fn validate_donor_as_of(candidate: &DonorRecord, today: NaiveDate) -> Vec<String> {
    let mut errors = Vec::new();

    if candidate.name.trim().is_empty() {
        errors.push("Name is required".to_string());
    }

    if !NAME_REGEX.is_match(&candidate.name) {
        errors.push("Name should contain only letters and spaces".to_string());
    }

    if candidate.blood_group.parse::<BloodGroup>().is_err() {
        errors.push("Invalid blood group".to_string());
    }

    if !PHONE_REGEX.is_match(&candidate.phone) {
        errors.push("Phone number must be 10 digits".to_string());
    }

    if !is_valid_email(&candidate.email) {
        errors.push("Invalid email address".to_string());
    }

    if let Some(last_donation) = candidate.last_donation.as_deref().filter(|d| !d.trim().is_empty()) {
        match parse_date(last_donation) {
            Ok(date) if date > today => {
                errors.push("Last donation date cannot be in the future".to_string());
            }
            Ok(_) => {}
            Err(_) => {
                errors.push("Last donation date must be in YYYY-MM-DD format".to_string());
            }
        }
    }

    errors
}

/// Validate a registration form. Email uniqueness needs the user store and is checked by
/// [`crate::domain::UserService`].
pub fn validate_registration(command: &RegisterUserCommand) -> Vec<String> {
    let mut errors = Vec::new();

    if command.fullname.trim().is_empty() {
        errors.push("Full name is required".to_string());
    }

    if !is_valid_email(&command.email) {
        errors.push("Invalid email address".to_string());
    }

    if command.password.is_empty() {
        errors.push("Password is required".to_string());
    }

    if command.password != command.confirm_password {
        errors.push("Passwords do not match".to_string());
    }

    errors
}
