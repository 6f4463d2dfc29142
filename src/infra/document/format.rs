use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::DocumentError;

/// On-disk encoding of a table document or layout, picked by file extension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentFormat {
    #[default]
    Toml,
    Json,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            other => {
                let extension = other.unwrap_or_default().to_string();
                Err(DocumentError::UnsupportedFormat(extension))
            }
        }
    }

    pub fn decode<T: DeserializeOwned>(self, content: &str) -> Result<T, DocumentError> {
        match self {
            Self::Toml => {
                toml::from_str(content).map_err(|e| DocumentError::InvalidFormat(e.to_string()))
            }
            Self::Json => serde_json::from_str(content)
                .map_err(|e| DocumentError::InvalidFormat(e.to_string())),
        }
    }

    pub fn encode<T: Serialize>(self, value: &T) -> Result<String, DocumentError> {
        match self {
            Self::Toml => toml::to_string_pretty(value)
                .map_err(|e| DocumentError::SerializeError(e.to_string())),
            Self::Json => serde_json::to_string_pretty(value)
                .map_err(|e| DocumentError::SerializeError(e.to_string())),
        }
    }
}

pub(super) fn read<T: DeserializeOwned>(path: &Path) -> Result<T, DocumentError> {
    let format = DocumentFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)
        .map_err(|e| DocumentError::ReadError(format!("{}: {e}", path.display())))?;
    format.decode(&content)
}
