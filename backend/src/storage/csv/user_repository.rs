//! # CSV User Repository
//!
//! Registered users live in `users.csv`, one row per user:
//!
//! ```csv
//! fullname,email,password,blood_group,phone,address
//! Jane Roe,jane@example.com,$argon2id$v=19$...,A+,1234567890,"1 Main St"
//! ```
//!
//! The file only grows. The header is written when the file is empty.
//!
//! Lookups for login read an unparsable file as empty. The duplicate check and the
//! append itself refuse to work on one, so a damaged file can never gain a second row
//! for an email it already holds.

use async_trait::async_trait;
use csv::{Reader, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::connection::CsvConnection;
use crate::domain::models::user::User;
use crate::storage::{StoreError, UserStorage};

#[derive(Debug, Clone)]
pub struct UserRepository {
    connection: CsvConnection,
}

impl UserRepository {
    pub fn new(connection: CsvConnection) -> Self {
        Self { connection }
    }

    fn users_file_path(&self) -> PathBuf {
        self.connection.users_csv_path()
    }

    /// Read every user. A missing file means no users; an unparsable one is logged
    /// and also read as empty.
    fn read_users(&self) -> Vec<User> {
        match self.try_read_users() {
            Ok(users) => users,
            Err(e) => {
                warn!("{}; treating it as empty", e);
                Vec::new()
            }
        }
    }

    /// Read every user, reporting an unparsable file instead of hiding it.
    /// Anything that decides whether to write must use this.
    fn try_read_users(&self) -> Result<Vec<User>, StoreError> {
        let csv_path = self.users_file_path();

        if !csv_path.exists() {
            return Ok(Vec::new());
        }

        Self::parse_users(&csv_path)
    }

    fn parse_users(csv_path: &Path) -> Result<Vec<User>, StoreError> {
        let corrupt = |reason: String| StoreError::Corrupt {
            path: csv_path.to_path_buf(),
            reason,
        };

        let file = File::open(csv_path).map_err(|e| corrupt(e.to_string()))?;
        let mut reader = Reader::from_reader(BufReader::new(file));

        let mut users = Vec::new();
        for result in reader.deserialize() {
            let user: User = result.map_err(|e| corrupt(e.to_string()))?;
            users.push(user);
        }

        Ok(users)
    }
}

#[async_trait]
impl UserStorage for UserRepository {
    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        Ok(self.read_users())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.read_users().into_iter().find(|u| u.email == email))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.try_read_users()?.iter().any(|u| u.email == email))
    }

    async fn append_user(&self, user: &User) -> Result<(), StoreError> {
        // Never grow a file whose existing rows cannot be checked for duplicates
        self.try_read_users()?;

        let csv_path = self.users_file_path();
        let write_error = |source: std::io::Error| StoreError::Write {
            path: csv_path.clone(),
            source,
        };

        let needs_header = fs::metadata(&csv_path).map(|m| m.len() == 0).unwrap_or(true);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&csv_path)
            .map_err(write_error)?;

        let mut writer = WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(BufWriter::new(file));
        writer.serialize(user)?;
        writer.flush().map_err(write_error)?;

        if needs_header {
            debug!("Created user store with header at {}", csv_path.display());
        }
        info!("Registered user {}", user.email);
        Ok(())
    }
}
