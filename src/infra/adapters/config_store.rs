use std::fs;
use std::path::PathBuf;

use tracing::{info, warn};

use tablesize_app::ResizeConfig;
use tablesize_app::ports::{ConfigStore, ConfigStoreError};

use crate::config::{CURRENT_VERSION, ResizeConfigFile};

const CONFIG_FILE_NAME: &str = "config.toml";

pub struct TomlConfigStore {
    path: PathBuf,
}

impl TomlConfigStore {
    pub fn new() -> Result<Self, ConfigStoreError> {
        let config_dir = get_config_dir()?;
        Ok(Self {
            path: config_dir.join(CONFIG_FILE_NAME),
        })
    }

    pub fn with_config_path(path: PathBuf) -> Self {
        Self { path }
    }
}

impl ConfigStore for TomlConfigStore {
    fn load(&self) -> Result<ResizeConfig, ConfigStoreError> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "no config file, using defaults");
            return Ok(ResizeConfig::default());
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| ConfigStoreError::ReadError(e.to_string()))?;

        let file: ResizeConfigFile = toml::from_str(&content)
            .map_err(|e| ConfigStoreError::InvalidFormat(e.to_string()))?;

        if file.version != CURRENT_VERSION {
            warn!(found = file.version, "unsupported config version");
            return Err(ConfigStoreError::VersionMismatch {
                found: file.version,
                expected: CURRENT_VERSION,
            });
        }

        info!(path = %self.path.display(), "loaded config");
        Ok(file.resize)
    }

    fn storage_path(&self) -> PathBuf {
        self.path.clone()
    }
}

fn get_config_dir() -> Result<PathBuf, ConfigStoreError> {
    let config_base = dirs::config_dir()
        .ok_or_else(|| ConfigStoreError::IoError("Could not find config directory".into()))?;
    Ok(config_base.join("tablesize"))
}
