//! # piq-config
//!
//! Layered configuration loading for ProspectIQ using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PROSPECTIQ_*` prefix, `__` as separator)
//! 2. Project-level `.prospectiq/config.toml`
//! 3. User-level `~/.config/prospectiq/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PROSPECTIQ_AGENT__BASE_URL` -> `agent.base_url`,
//! `PROSPECTIQ_STORAGE__DATA_DIR` -> `storage.data_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use piq_config::PiqConfig;
//!
//! let config = PiqConfig::load_with_dotenv().expect("config");
//! if config.agent.is_configured() {
//!     println!("agent endpoint: {}", config.agent.base_url);
//! }
//! ```

mod agent;
mod error;
mod general;
mod storage;

pub use agent::AgentConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Directory name used for project-local and user-global config.
const CONFIG_DIR_NAME: &str = "prospectiq";
const LOCAL_CONFIG_PATH: &str = ".prospectiq/config.toml";
const ENV_PREFIX: &str = "PROSPECTIQ_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PiqConfig {
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PiqConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that parse but cannot work.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.agent.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "agent.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        if !self.agent.base_url.is_empty()
            && !(self.agent.base_url.starts_with("http://")
                || self.agent.base_url.starts_with("https://"))
        {
            return Err(ConfigError::InvalidValue {
                field: "agent.base_url".into(),
                reason: format!("'{}' is not an http(s) URL", self.agent.base_url),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME).join("config.toml"))
    }
}
