use crate::error::ConfigError;
use crate::geometry::Size;
use crate::graph::ConnectionPolicy;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Tunables for a canvas session, loadable from TOML.
///
/// ```toml
/// [node_size]
/// width = 120.0
/// height = 60.0
///
/// [policy]
/// allow_cycles = false
/// ```
///
/// Missing keys keep their defaults: a `100x50` block and the permissive policy.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub node_size: Size,
    pub policy: ConnectionPolicy,
}

impl EditorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EditorConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("Loaded editor config from {}", path.display());
        Ok(config)
    }

    /// Loads `path` if it exists, falling back to defaults on any error.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("{}; using default editor config", e);
                Self::default()
            }
        }
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.node_size.is_positive() {
            Ok(())
        } else {
            Err(ConfigError::InvalidNodeSize {
                width: self.node_size.width,
                height: self.node_size.height,
            })
        }
    }
}
