//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::{Context as _, Result};

use studentgen_providers::{load_config_from, StudentgenConfig};
use studentgen_store::Storage;

pub mod ask;
pub mod generate;
pub mod init;
pub mod questions;
pub mod records;

/// Global options shared by every subcommand.
pub struct Context {
    pub config_path: Option<PathBuf>,
    pub db_override: Option<PathBuf>,
}

impl Context {
    pub fn load_config(&self) -> Result<StudentgenConfig> {
        load_config_from(self.config_path.as_deref())
    }

    /// Open the record store named by `--db` or the config.
    pub async fn open_store(&self, config: &StudentgenConfig) -> Result<Storage> {
        let path = self
            .db_override
            .clone()
            .unwrap_or_else(|| config.database_path.clone());
        Storage::open(&path)
            .await
            .with_context(|| format!("failed to open record store {}", path.display()))
    }
}
