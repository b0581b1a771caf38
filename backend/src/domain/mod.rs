//! # Domain Module
//!
//! Business rules for the donor registry, independent of HTTP and of the file formats
//! used for storage.
//!
//! ## Module Organization
//!
//! - **validation**: donor and registration form rules
//! - **eligibility**: the 90-day donation cooldown
//! - **statistics**: per blood group and overall counts
//! - **query**: search filters and page slicing
//! - **donor_service**: donor CRUD, search and dashboard operations
//! - **user_service**: registration and login
//! - **password**: the credential hashing seam
//!
//! ## Business Rules
//!
//! - A donor is identified by its position in the stored sequence
//! - Eligibility is derived on every read and never stored
//! - Registration dates are set once, when a donor is added
//! - Email addresses are unique among users

pub mod commands;
pub mod donor_service;
pub mod eligibility;
pub mod errors;
pub mod models;
pub mod password;
pub mod query;
pub mod statistics;
pub mod user_service;
pub mod validation;

pub use donor_service::DonorService;
pub use errors::{DomainError, DomainResult};
pub use password::{Argon2Hasher, CredentialHasher};
pub use user_service::UserService;
