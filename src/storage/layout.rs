use std::path::{Path, PathBuf};
use std::fs;
use crate::core::config::Config;
use crate::core::error::Result;

/// Output file locations for one indexing run
#[derive(Debug, Clone)]
pub struct StorageLayout {
    pub base_dir: PathBuf,      // Root output directory
    pub index_path: PathBuf,    // Binary inverted index
    pub zipf_path: PathBuf,     // Zipf CSV
}

impl StorageLayout {
    /// Resolve paths from the config and create the output directory.
    pub fn new(config: &Config) -> Result<Self> {
        let layout = Self::resolve(config);
        fs::create_dir_all(&layout.base_dir)?;
        Ok(layout)
    }

    /// Resolve paths without touching the filesystem.
    pub fn resolve(config: &Config) -> Self {
        let base_dir = config.storage_path.clone();
        StorageLayout {
            index_path: base_dir.join(&config.index_file_name),
            zipf_path: base_dir.join(&config.zipf_file_name),
            base_dir,
        }
    }

    pub fn index_path(&self) -> &Path {
        &self.index_path
    }

    pub fn zipf_path(&self) -> &Path {
        &self.zipf_path
    }
}
