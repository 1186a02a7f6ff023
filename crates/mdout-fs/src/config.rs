//! Format-agnostic configuration loading

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension and deserializes
/// transparently. Used to load [`crate::SinkOptions`] from disk, but
/// accepts any deserializable type.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration from a file.
    ///
    /// Format is detected from file extension:
    /// - `.toml` -> TOML
    /// - `.json` -> JSON
    /// - `.yaml`, `.yml` -> YAML
    pub fn load<T: DeserializeOwned>(&self, path: impl AsRef<Path>) -> Result<T> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        // Reject unknown formats before touching the disk.
        if !matches!(extension.as_str(), "toml" | "json" | "yaml" | "yml") {
            return Err(Error::UnsupportedFormat { extension });
        }

        let content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        match extension.as_str() {
            "toml" => toml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "TOML".into(),
                message: e.to_string(),
            }),
            "json" => serde_json::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "JSON".into(),
                message: e.to_string(),
            }),
            _ => serde_yaml::from_str(&content).map_err(|e| Error::ConfigParse {
                path: path.to_path_buf(),
                format: "YAML".into(),
                message: e.to_string(),
            }),
        }
    }
}
