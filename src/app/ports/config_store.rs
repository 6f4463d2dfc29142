use std::path::PathBuf;

use crate::config::ResizeConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigStoreError {
    #[error("Config version mismatch: found {found}, expected {expected}")]
    VersionMismatch { found: u32, expected: u32 },
    #[error("Read error: {0}")]
    ReadError(String),
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
    #[error("IO error: {0}")]
    IoError(String),
}

pub trait ConfigStore: Send + Sync {
    /// Missing configuration is not an error; it yields the defaults.
    fn load(&self) -> Result<ResizeConfig, ConfigStoreError>;

    fn storage_path(&self) -> PathBuf;
}
