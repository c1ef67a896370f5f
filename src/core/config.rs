use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::core::error::{Error, ErrorKind, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage_path: PathBuf,
    pub index_file_name: String,
    pub zipf_file_name: String,

    pub table_capacity: usize,      // Initial ProbeTable capacity
    pub progress_interval: usize,   // Log every N indexed documents
    pub zipf_limit: usize,          // Max rows in the Zipf CSV
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_path: PathBuf::from("./output"),
            index_file_name: "inverted_index.bin".to_string(),
            zipf_file_name: "zipf_analysis.csv".to_string(),

            table_capacity: 16384,
            progress_interval: 500,
            zipf_limit: 5000,
        }
    }
}

impl Config {
    /// Load a JSON config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.progress_interval == 0 {
            return Err(Error::new(ErrorKind::InvalidInput,
                                  "progress_interval must be at least 1".to_string()));
        }
        if self.index_file_name.is_empty() || self.zipf_file_name.is_empty() {
            return Err(Error::new(ErrorKind::InvalidInput,
                                  "output file names must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn with_storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"storage_path": "/tmp/idx", "zipf_limit": 10}"#).unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.storage_path, PathBuf::from("/tmp/idx"));
        assert_eq!(config.zipf_limit, 10);
        assert_eq!(config.table_capacity, 16384);
        assert_eq!(config.progress_interval, 500);
    }

    #[test]
    fn zero_progress_interval_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"progress_interval": 0}"#).unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::InvalidInput);
    }

    #[test]
    fn empty_file_name_is_rejected() {
        let config = Config { zipf_file_name: String::new(), ..Config::default() };
        assert_eq!(config.validate().unwrap_err().kind, ErrorKind::InvalidInput);
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn malformed_config_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{not json").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::Parse);
    }
}
