use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

const DONORS_JSON: &str = "donors.json";
const DONORS_CSV: &str = "donors.csv";
const USERS_CSV: &str = "users.csv";

/// CsvConnection owns the data directory and knows where each store file lives
#[derive(Debug, Clone)]
pub struct CsvConnection {
    base_directory: Arc<PathBuf>,
}

impl CsvConnection {
    /// Create a new connection, creating the data directory if it doesn't exist
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: Arc::new(base_path),
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Structured (authoritative) donor store
    pub fn donors_json_path(&self) -> PathBuf {
        self.base_directory.join(DONORS_JSON)
    }

    /// Tabular mirror of the donor store
    pub fn donors_csv_path(&self) -> PathBuf {
        self.base_directory.join(DONORS_CSV)
    }

    pub fn users_csv_path(&self) -> PathBuf {
        self.base_directory.join(USERS_CSV)
    }
}
