//! # Record Store
//!
//! Persists an ordered list of records as a JSON array plus a CSV mirror of the same
//! records.
//!
//! ## Reads
//!
//! Only the JSON file is read. A missing file is an empty collection; so is an unreadable
//! or unparsable one, which is logged as a warning rather than failing the caller.
//!
//! ## Writes
//!
//! Both files are rendered into `*.tmp` siblings first. If either render fails the
//! temporaries are removed and neither store is touched. The JSON file is then renamed
//! into place, followed by the CSV file. If that last rename fails the caller gets
//! [`StoreError::MirrorInconsistent`].
//!
//! The CSV header is taken from the first record's field names. An empty collection
//! produces an empty CSV file with no header.

use csv::Writer;
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File};
use std::io::BufWriter;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::storage::StoreError;

#[derive(Debug, Clone)]
pub struct RecordStore<T> {
    json_path: PathBuf,
    csv_path: PathBuf,
    _record: PhantomData<fn() -> T>,
}

impl<T> RecordStore<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(json_path: PathBuf, csv_path: PathBuf) -> Self {
        Self {
            json_path,
            csv_path,
            _record: PhantomData,
        }
    }

    pub fn json_path(&self) -> &Path {
        &self.json_path
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv_path
    }

    /// Load the stored records, treating a missing or corrupt store as empty
    pub fn load(&self) -> Vec<T> {
        match self.try_load() {
            Ok(records) => records,
            Err(e) => {
                warn!("{}; treating it as empty", e);
                Vec::new()
            }
        }
    }

    /// Load the stored records, reporting corruption instead of hiding it
    pub fn try_load(&self) -> Result<Vec<T>, StoreError> {
        if !self.json_path.exists() {
            debug!("{} does not exist yet", self.json_path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.json_path).map_err(|e| StoreError::Corrupt {
            path: self.json_path.clone(),
            reason: e.to_string(),
        })?;

        let records: Vec<T> = serde_json::from_str(&content).map_err(|e| StoreError::Corrupt {
            path: self.json_path.clone(),
            reason: e.to_string(),
        })?;

        debug!("Loaded {} records from {}", records.len(), self.json_path.display());
        Ok(records)
    }

    /// Overwrite both the JSON store and its CSV mirror with `records`
    pub fn save(&self, records: &[T]) -> Result<(), StoreError> {
        let json_tmp = temp_path(&self.json_path);
        let csv_tmp = temp_path(&self.csv_path);

        if let Err(e) = self.write_temporaries(records, &json_tmp, &csv_tmp) {
            let _ = fs::remove_file(&json_tmp);
            let _ = fs::remove_file(&csv_tmp);
            return Err(e);
        }

        if let Err(source) = fs::rename(&json_tmp, &self.json_path) {
            let _ = fs::remove_file(&json_tmp);
            let _ = fs::remove_file(&csv_tmp);
            return Err(StoreError::Write {
                path: self.json_path.clone(),
                source,
            });
        }

        if let Err(source) = fs::rename(&csv_tmp, &self.csv_path) {
            let _ = fs::remove_file(&csv_tmp);
            return Err(StoreError::MirrorInconsistent {
                path: self.csv_path.clone(),
                source,
            });
        }

        debug!(
            "Saved {} records to {} and {}",
            records.len(),
            self.json_path.display(),
            self.csv_path.display()
        );
        Ok(())
    }

    fn write_temporaries(&self, records: &[T], json_tmp: &Path, csv_tmp: &Path) -> Result<(), StoreError> {
        let json = serde_json::to_string(records)?;
        fs::write(json_tmp, json).map_err(|source| StoreError::Write {
            path: json_tmp.to_path_buf(),
            source,
        })?;

        let file = File::create(csv_tmp).map_err(|source| StoreError::Write {
            path: csv_tmp.to_path_buf(),
            source,
        })?;

        // The csv writer emits the header from the first serialized record
        let mut writer = Writer::from_writer(BufWriter::new(file));
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush().map_err(|source| StoreError::Write {
            path: csv_tmp.to_path_buf(),
            source,
        })?;

        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
