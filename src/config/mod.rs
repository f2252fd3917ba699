//! Settings loader for portal.toml

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{PortalError, Result};
use crate::theme::ThemeConfig;

pub const DEFAULT_CONFIG_FILE: &str = "portal.toml";
pub const DEFAULT_ADDR: &str = "0.0.0.0:80";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub server: ServerConfig,
    pub theme: ThemeConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Socket address the portal listens on.
    pub addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
        }
    }
}

/// Load portal settings from `path`.
///
/// A missing file is not an error: the portal then runs on defaults. A file
/// that exists but cannot be read or parsed is.
pub fn load_config(path: &Path) -> Result<PortalConfig> {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Ok(PortalConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|source| PortalError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config: PortalConfig =
        toml::from_str(&content).map_err(|source| PortalError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;

    info!("Loaded portal config from {:?}", path);
    Ok(config)
}
