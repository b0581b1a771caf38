use anyhow::{Context, Result};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming the YAML config file
pub const CONFIG_PATH_ENV: &str = "DONOR_REGISTRY_CONFIG";

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "donor_registry.yaml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Directory holding donors.json, donors.csv and users.csv
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Optional directory of static front-end files served for non-API paths
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
    /// Fallback tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Allowed CORS origin; no CORS layer when unset
    #[serde(default)]
    pub cors_origin: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            host: default_host(),
            port: default_port(),
            static_dir: None,
            log_level: default_log_level(),
            cors_origin: None,
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from the optional YAML file, then apply environment overrides
    pub fn load() -> Result<Self> {
        let explicit = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);

        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?,
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: AppConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Apply `DONOR_REGISTRY_*` overrides using `lookup` to read variables
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(data_dir) = lookup("DONOR_REGISTRY_DATA_DIR") {
            self.data_dir = PathBuf::from(data_dir);
        }
        if let Some(host) = lookup("DONOR_REGISTRY_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("DONOR_REGISTRY_PORT") {
            self.port = port
                .parse()
                .with_context(|| format!("DONOR_REGISTRY_PORT is not a valid port: {}", port))?;
        }
        if let Some(static_dir) = lookup("DONOR_REGISTRY_STATIC_DIR") {
            self.static_dir = Some(PathBuf::from(static_dir));
        }
        if let Some(origin) = lookup("DONOR_REGISTRY_CORS_ORIGIN") {
            self.cors_origin = Some(origin);
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}
