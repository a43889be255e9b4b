//! Config struct and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `.randuser.toml` in the working directory
//! 4. `~/.config/randuser/config.toml` (global defaults)
//! 5. Built-in defaults

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

use crate::constants::{DEFAULT_BASE_URL, DEFAULT_MAX_ID, DEFAULT_MIN_ID};
use crate::env::Env;
use crate::panel::{IdRange, InvalidRange, PanelOptions};

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid [panel] settings: {0}")]
    InvalidRange(#[from] InvalidRange),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: EndpointConfig,
    pub panel: PanelConfig,
}

/// Where users are fetched from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Collection URL; users are fetched from `{base_url}/{id}`.
    pub base_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Panel behaviour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub min_id: u32,
    pub max_id: u32,
    /// Whether a cache hit clears the error left by an earlier failure.
    pub clear_error_on_hit: bool,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            min_id: DEFAULT_MIN_ID,
            max_id: DEFAULT_MAX_ID,
            clear_error_on_hit: true,
        }
    }
}

/// One config file as written: absent keys stay `None` so they don't
/// shadow lower layers.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigLayer {
    endpoint: EndpointLayer,
    panel: PanelLayer,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EndpointLayer {
    base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PanelLayer {
    min_id: Option<u32>,
    max_id: Option<u32>,
    clear_error_on_hit: Option<bool>,
}

impl ConfigLayer {
    fn read(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source: e,
        })
    }
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// Reads the global config, then `.randuser.toml` in `workdir`, then
    /// applies environment variable overrides. CLI flags are applied by the
    /// caller afterwards.
    pub fn load(workdir: Option<&Path>, env: &Env) -> Result<Self, ConfigError> {
        let global = Self::global_config_path();
        Self::load_from(global.as_deref(), workdir, env)
    }

    /// Layer an explicit global file, the local file in `workdir`, then `env`.
    ///
    /// Every key a file sets wins over lower layers, even when it restates
    /// the built-in default.
    pub fn load_from(
        global_path: Option<&Path>,
        workdir: Option<&Path>,
        env: &Env,
    ) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                config.apply(ConfigLayer::read(global_path)?);
            }
        }

        // Layer 3: local config
        if let Some(dir) = workdir {
            let local_path = dir.join(crate::constants::CONFIG_FILENAME);
            if local_path.exists() {
                config.apply(ConfigLayer::read(&local_path)?);
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env);

        Ok(config)
    }

    /// Load a config from a specific file, on top of the built-in defaults.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply(ConfigLayer::read(path)?);
        Ok(config)
    }

    /// Get the global config file path.
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(crate::constants::CONFIG_DIR).join("config.toml"))
    }

    /// Validated panel options.
    pub fn panel_options(&self) -> Result<PanelOptions, ConfigError> {
        Ok(PanelOptions {
            range: IdRange::new(self.panel.min_id, self.panel.max_id)?,
            clear_error_on_hit: self.panel.clear_error_on_hit,
        })
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Overlay the keys a file actually sets.
    fn apply(&mut self, layer: ConfigLayer) {
        if let Some(base_url) = layer.endpoint.base_url {
            self.endpoint.base_url = base_url;
        }
        if let Some(min_id) = layer.panel.min_id {
            self.panel.min_id = min_id;
        }
        if let Some(max_id) = layer.panel.max_id {
            self.panel.max_id = max_id;
        }
        if let Some(clear) = layer.panel.clear_error_on_hit {
            self.panel.clear_error_on_hit = clear;
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) {
        if let Ok(val) = env.var(crate::constants::ENV_BASE_URL) {
            if val.trim().is_empty() {
                warn!("ignoring empty {}", crate::constants::ENV_BASE_URL);
            } else {
                self.endpoint.base_url = val;
            }
        }

        if env.is_set(crate::constants::ENV_CLEAR_ERROR_ON_HIT) {
            match env.flag(crate::constants::ENV_CLEAR_ERROR_ON_HIT) {
                Some(enabled) => self.panel.clear_error_on_hit = enabled,
                None => warn!(
                    "ignoring invalid {} value",
                    crate::constants::ENV_CLEAR_ERROR_ON_HIT
                ),
            }
        }
    }
}
