use std::sync::Arc;
use tracing::{info, warn};

use super::commands::users::{LoginCommand, RegisterUserCommand};
use super::errors::{DomainError, DomainResult};
use super::models::user::{User, UserProfile};
use super::password::CredentialHasher;
use super::validation::validate_registration;
use crate::storage::UserStorage;

/// Service for user registration and credential checks
#[derive(Clone)]
pub struct UserService {
    storage: Arc<dyn UserStorage>,
    hasher: Arc<dyn CredentialHasher>,
}

impl UserService {
    pub fn new(storage: Arc<dyn UserStorage>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { storage, hasher }
    }

    /// Register a new user. Fails without writing anything if the email is taken.
    pub async fn register(&self, command: RegisterUserCommand) -> DomainResult<UserProfile> {
        info!("Registering user: {}", command.email);

        let mut errors = validate_registration(&command);
        if self.storage.email_exists(&command.email).await? {
            errors.push("Email already registered".to_string());
        }
        if !errors.is_empty() {
            return Err(DomainError::Validation(errors));
        }

        let user = User {
            fullname: command.fullname.trim().to_string(),
            email: command.email,
            password: self.hasher.hash(&command.password)?,
            blood_group: command.blood_group,
            phone: command.phone,
            address: command.address,
        };
        self.storage.append_user(&user).await?;

        Ok(user.profile())
    }

    /// Check credentials. Unknown email and wrong password are indistinguishable to callers.
    pub async fn login(&self, command: LoginCommand) -> DomainResult<UserProfile> {
        let user = match self.storage.find_by_email(&command.email).await? {
            Some(user) => user,
            None => {
                warn!("Login attempt for unknown email {}", command.email);
                return Err(DomainError::InvalidCredentials);
            }
        };

        if !self.hasher.verify(&command.password, &user.password) {
            warn!("Failed login for {}", command.email);
            return Err(DomainError::InvalidCredentials);
        }

        info!("User {} logged in", user.email);
        Ok(user.profile())
    }
}
