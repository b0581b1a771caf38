/// Test utilities for repository and service tests
///
/// `TestEnvironment` keeps its temporary data directory alive for as long as it is in
/// scope; the directory and everything in it is removed on drop.
use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::connection::CsvConnection;
use crate::domain::models::donor::DonorRecord;
use crate::domain::models::user::User;

pub struct TestEnvironment {
    /// Kept alive to prevent cleanup until drop
    _temp_dir: TempDir,
    pub connection: CsvConnection,
    pub base_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::with_prefix("donor_registry_")?;
        let base_path = temp_dir.path().to_path_buf();
        let connection = CsvConnection::new(&base_path)?;

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            connection,
            base_path,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }
}

/// A donor record that passes validation
pub fn sample_record(name: &str, blood_group: &str) -> DonorRecord {
    DonorRecord {
        name: name.to_string(),
        blood_group: blood_group.to_string(),
        phone: "1234567890".to_string(),
        email: "donor@example.com".to_string(),
        address: "42 Harbour Road".to_string(),
        registration_date: "2024-01-01".to_string(),
        last_donation: None,
    }
}

/// A user whose password field holds a placeholder hash
pub fn sample_user(fullname: &str, email: &str) -> User {
    User {
        fullname: fullname.to_string(),
        email: email.to_string(),
        password: "$argon2id$placeholder".to_string(),
        blood_group: "A+".to_string(),
        phone: "1234567890".to_string(),
        address: "1 Main St".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;

        {
            let env = TestEnvironment::new()?;
            base_path = env.base_directory().to_path_buf();
            assert!(base_path.exists());

            std::fs::write(base_path.join("donors.json"), "[]")?;
        }

        assert!(!base_path.exists());
        Ok(())
    }
}
