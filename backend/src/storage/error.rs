use std::path::PathBuf;

/// Errors raised by the flat-file stores
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Stored content could not be read or parsed. Readers log this and fall back to
    /// an empty collection.
    #[error("Store {path} is unreadable: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The structured store was replaced but its tabular mirror was not
    #[error("Structured store saved but mirror {path} could not be replaced: {source}")]
    MirrorInconsistent {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
}
