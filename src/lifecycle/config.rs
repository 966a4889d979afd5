//! # Configuration
//!
//! [`AppConfig`] is read from a TOML file named by `RESOURCE_DISPATCH_CONFIG`. Every
//! field has a default, so an empty file (or no file at all) is a valid setup.
//!
//! ```toml
//! buffer_size = 64
//! require_session = true
//! render_mode = "markup"
//! templates_dir = "templates"
//! ```

use crate::dispatch::RenderMode;
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

/// Environment variable holding the config file path.
pub const CONFIG_ENV: &str = "RESOURCE_DISPATCH_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Templates(#[from] crate::dispatch::TemplateError),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Channel capacity of each store actor.
    pub buffer_size: usize,
    /// Reject writes without a session (users excepted).
    pub require_session: bool,
    pub render_mode: RenderMode,
    /// Directory of `<Name>.html` templates overriding the built-ins.
    pub templates_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            require_session: false,
            render_mode: RenderMode::Data,
            templates_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads from the file named by [`CONFIG_ENV`], or defaults when it is unset.
    pub fn load() -> Result<Self, ConfigError> {
        match env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_path(Path::new(&path)),
            None => {
                debug!("{CONFIG_ENV} not set, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
