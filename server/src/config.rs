//! Server settings.
//!
//! Settings come from a YAML file: the path in `MOTOFLOW_CONFIG` if set,
//! otherwise `motoflow.yaml` in the working directory when it exists,
//! otherwise the built-in defaults. A few environment variables override the
//! file afterwards.
//!
//! ```text
//! bind_address: 127.0.0.1:3000
//! allowed_origin: http://localhost:8080
//! log_filter: info
//! currency_symbol: R$
//! target_basis: monetary
//! storage:
//!   backend: csv
//!   data_directory: data
//! planning:
//!   ride_value: 7.0
//!   work_days: 30
//! ```

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use shared::{PlanningConfig, TargetBasis};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::backend::domain::InputValidator;

pub const CONFIG_PATH_ENV: &str = "MOTOFLOW_CONFIG";
pub const DEFAULT_CONFIG_FILE: &str = "motoflow.yaml";

/// Which RecordStore implementation to open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Csv,
    Sqlite,
    Memory,
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageBackend::Csv => write!(f, "csv"),
            StorageBackend::Sqlite => write!(f, "sqlite"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(StorageBackend::Csv),
            "sqlite" => Ok(StorageBackend::Sqlite),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(format!("Unknown storage backend: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    /// Directory for the CSV files, and for the SQLite file when no URL is given
    pub data_directory: PathBuf,
    pub database_url: Option<String>,
}

impl StorageSettings {
    /// SQLite URL, defaulting to `motoflow.db` inside the data directory
    pub fn resolved_database_url(&self) -> String {
        match &self.database_url {
            Some(url) => url.clone(),
            None => format!("sqlite://{}", self.data_directory.join("motoflow.db").display()),
        }
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Csv,
            data_directory: PathBuf::from("data"),
            database_url: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bind_address: String,
    pub allowed_origin: String,
    pub log_filter: String,
    pub currency_symbol: String,
    pub target_basis: TargetBasis,
    pub storage: StorageSettings,
    /// Initial planning configuration; the API may replace it at runtime
    pub planning: PlanningConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
            allowed_origin: "http://localhost:8080".to_string(),
            log_filter: "info".to_string(),
            currency_symbol: "R$".to_string(),
            target_basis: TargetBasis::Monetary,
            storage: StorageSettings::default(),
            planning: PlanningConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from the configured file (if any) and the process environment
    pub fn load() -> Result<Self> {
        let mut settings = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_file(&path)?,
            Err(_) if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE)?,
            Err(_) => Self::default(),
        };

        settings.apply_overrides(|key| std::env::var(key).ok())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings file {}", path.display()))?;
        Self::from_yaml_str(&content).with_context(|| format!("Invalid settings file {}", path.display()))
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Apply `MOTOFLOW_*` overrides looked up through `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(bind) = lookup("MOTOFLOW_BIND") {
            self.bind_address = bind;
        }
        if let Some(dir) = lookup("MOTOFLOW_DATA_DIR") {
            self.storage.data_directory = PathBuf::from(dir);
        }
        if let Some(backend) = lookup("MOTOFLOW_STORAGE") {
            self.storage.backend = backend.parse().map_err(|e: String| anyhow!(e))?;
        }
        if let Some(url) = lookup("MOTOFLOW_DATABASE_URL") {
            self.storage.database_url = Some(url);
        }
        Ok(())
    }

    /// Reject settings the server cannot start with
    pub fn validate(&self) -> Result<()> {
        InputValidator::new()
            .validate_planning_config(self.planning.ride_value, i64::from(self.planning.work_days))
            .map_err(|errors| {
                let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
                anyhow!("Invalid planning settings: {}", messages.join("; "))
            })?;

        if self.bind_address.trim().is_empty() {
            return Err(anyhow!("bind_address cannot be empty"));
        }

        Ok(())
    }
}
