//! # amep-config
//!
//! Layered configuration loading for AMEP using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AMEP_*` prefix, `__` as separator)
//! 2. Project-level `.amep/config.toml`
//! 3. User-level `~/.config/amep/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AMEP_SERVICE__BASE_URL` -> `service.base_url`,
//! `AMEP_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`, etc. The `__`
//! (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use amep_config::AmepConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = AmepConfig::load_with_dotenv().expect("config");
//!
//! if config.service.is_configured() {
//!     println!("Service URL: {}", config.service.base_url);
//! }
//! ```

mod error;
mod general;
mod service;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use service::ServiceConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AmepConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl AmepConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables (`AMEP_*` prefix)
    /// 2. `.amep/config.toml` (project-local)
    /// 3. `~/.config/amep/config.toml` (user-global)
    /// 4. Default values
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with the project-level file read from
    /// `project_dir/config.toml` instead of `./.amep/config.toml`.
    ///
    /// `None` behaves exactly like [`Self::load`].
    pub fn load_from(project_dir: Option<&Path>) -> Result<Self, ConfigError> {
        Self::figment_for(project_dir)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` to load the `.env` file from the workspace root before
    /// building the figment. This is the typical entry point for the CLI and
    /// tests.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    pub fn figment() -> Figment {
        Self::figment_for(None)
    }

    /// Build the figment provider chain with an explicit project directory.
    pub fn figment_for(project_dir: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = project_dir.map_or_else(
            || PathBuf::from(".amep/config.toml"),
            |dir| dir.join("config.toml"),
        );
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment = figment.merge(Env::prefixed("AMEP_").split("__"));

        figment
    }

    /// The service section, checked for the fields network commands need.
    ///
    /// Errors with [`ConfigError::NotConfigured`] when `teacher_id` or
    /// `base_url` is missing, and [`ConfigError::InvalidValue`] for a zero
    /// timeout.
    pub fn require_service(&self) -> Result<&ServiceConfig, ConfigError> {
        if !self.service.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "service".to_string(),
            });
        }
        if self.service.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "service.timeout_secs".to_string(),
                reason: "must be at least 1 second".to_string(),
            });
        }
        Ok(&self.service)
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("amep").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or current dir
    /// looking for a `.env` file. Silently does nothing if no `.env` is
    /// found.
    fn load_dotenv_from_workspace() {
        // In tests/build: CARGO_MANIFEST_DIR points to the crate dir.
        // Walk up to find workspace root's .env.
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            // Walk up at most 3 levels (crate -> crates/ -> amep/)
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        // Fallback: try current directory
        let _ = dotenvy::dotenv();
    }
}
