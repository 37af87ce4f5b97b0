//! Configuration loader
//!
//! Loads the application configuration from defaults, an `assetlint.toml`
//! file and `ASSETLINT_*` environment variables. Naming rules themselves are
//! not part of it; they live in rule repositories inside the project.

use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use assetlint_validate::LogFormat;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

use crate::logging::{log_config_loaded, parse_log_level};

pub const CONFIG_ENV_PREFIX: &str = "ASSETLINT";
pub const DEFAULT_CONFIG_FILENAME: &str = "assetlint.toml";
pub const DEFAULT_CONFIG_DIR: &str = "assetlint";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level filter, overridden by `ASSETLINT_LOG`
    pub level: String,
    pub json_format: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Root of the project to lint (the directory holding `Assets/`)
    pub project_root: PathBuf,
    /// Rule repository to use instead of discovering one under the project
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<PathBuf>,
    /// Where violation logs are written, relative to the project root
    pub log_dir: PathBuf,
    pub log_format: LogFormat,
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            repository: None,
            log_dir: PathBuf::from("Logs"),
            log_format: LogFormat::Text,
            logging: LoggingConfig::default(),
        }
    }
}

impl AppConfig {
    /// Absolute log directory
    pub fn log_dir_path(&self) -> PathBuf {
        self.project_root.join(&self.log_dir)
    }

    /// Repository file path, resolved against the project root
    pub fn repository_path(&self) -> Option<PathBuf> {
        self.repository
            .as_ref()
            .map(|path| self.project_root.join(path))
    }
}

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Later sources override earlier ones:
    /// 1. `AppConfig::default()`
    /// 2. TOML configuration file (explicit path, or the first default location found)
    /// 3. Environment variables, `__` separating nested keys (`ASSETLINT_LOGGING__LEVEL`)
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(config_path) = &self.config_path {
            if config_path.exists() {
                figment = figment.merge(Toml::file(config_path));
                log_config_loaded(config_path, true);
            } else {
                log_config_loaded(config_path, false);
            }
        } else if let Some(default_path) = Self::find_default_config_path() {
            figment = figment.merge(Toml::file(&default_path));
            log_config_loaded(&default_path, true);
        }

        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)).split("__"));

        let app_config: AppConfig = figment
            .extract()
            .context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;
        Ok(app_config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;
        std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;
        Ok(())
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_app_config(config: &AppConfig) -> Result<()> {
    parse_log_level(&config.logging.level)?;
    if config.log_dir.as_os_str().is_empty() {
        bail!("Log directory cannot be empty");
    }
    Ok(())
}
