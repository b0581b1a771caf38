//! backend/src/domain/models/user.rs

use serde::{Deserialize, Serialize};

/// Registered user as stored in `users.csv`. `password` holds a salted hash, never plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub fullname: String,
    pub email: String,
    pub password: String,
    pub blood_group: String,
    pub phone: String,
    pub address: String,
}

/// The non-secret part of a user
#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub fullname: String,
    pub email: String,
    pub blood_group: String,
    pub phone: String,
    pub address: String,
}

impl User {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            fullname: self.fullname.clone(),
            email: self.email.clone(),
            blood_group: self.blood_group.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
        }
    }
}
