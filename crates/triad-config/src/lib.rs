//! # triad-config
//!
//! Layered configuration loading for triad using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TRIAD_*` prefix, `__` as separator)
//! 2. Project-level `.triad/config.toml`
//! 3. User-level `~/.config/triad/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TRIAD_SEMANTIC__API_KEY` -> `semantic.api_key`,
//! `TRIAD_SCORING__WEIGHT_README` -> `scoring.weight_readme`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use triad_config::TriadConfig;
//!
//! let config = TriadConfig::load_with_dotenv().expect("config");
//!
//! if config.semantic.is_configured() {
//!     println!("model: {}", config.semantic.model);
//! }
//! ```

mod claims;
mod error;
mod extraction;
mod scoring;
mod semantic;

pub use claims::ClaimsConfig;
pub use error::ConfigError;
pub use extraction::ExtractionConfig;
pub use scoring::ScoringConfig;
pub use semantic::SemanticConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct TriadConfig {
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub claims: ClaimsConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub semantic: SemanticConfig,
}

impl TriadConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when a source fails to parse and
    /// [`ConfigError::InvalidValue`] when a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Extract and validate from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".triad/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TRIAD_").split("__"))
    }

    /// Check every section for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError::InvalidValue`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.extraction.validate()?;
        self.claims.validate()?;
        self.scoring.validate()?;
        self.semantic.validate()
    }

    /// Copy safe to print: secrets masked.
    #[must_use]
    pub fn redacted(&self) -> Self {
        Self {
            semantic: self.semantic.redacted(),
            ..self.clone()
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("triad").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) looking for a `.env`
    /// file, then falls back to the current directory. Missing files are fine.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
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

        let _ = dotenvy::dotenv();
    }
}

/// Reject NaN and values outside `[0, 1]`.
pub(crate) fn unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::invalid(
            field,
            format!("{value} is outside [0, 1]"),
        ))
    }
}
