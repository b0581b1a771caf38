//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.

use async_trait::async_trait;

use super::StoreError;
use crate::domain::models::donor::Donor;
use crate::domain::models::user::User;

/// Trait defining the interface for donor storage operations
///
/// Donors are an ordered sequence; a donor's position is its identifier.
#[async_trait]
pub trait DonorStorage: Send + Sync {
    /// Load every donor with eligibility freshly computed
    async fn get_all(&self) -> Result<Vec<Donor>, StoreError>;

    /// Replace the stored collection. Derived fields are not persisted.
    async fn save_all(&self, donors: &[Donor]) -> Result<(), StoreError>;
}

/// Trait defining the interface for user credential storage
///
/// Users are append-only; there is no update or delete.
#[async_trait]
pub trait UserStorage: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError>;

    /// Append one user. Callers must check [`UserStorage::email_exists`] first.
    async fn append_user(&self, user: &User) -> Result<(), StoreError>;
}
