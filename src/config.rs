use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_LOG_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_SENDER_STORE, MAX_COPIES};
use crate::error::{LabelError, Result};

pub const ENV_SENDER_STORE: &str = "SHIPLABEL_SENDER_STORE";
pub const ENV_OUTPUT_DIR: &str = "SHIPLABEL_OUTPUT_DIR";
pub const ENV_LOG_DIR: &str = "SHIPLABEL_LOG_DIR";
pub const ENV_DEFAULT_COPIES: &str = "SHIPLABEL_DEFAULT_COPIES";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// JSON document holding the sender address between runs
    pub sender_store: PathBuf,
    /// Where the label CSVs and run summary are written
    pub output_dir: PathBuf,
    pub log_dir: PathBuf,
    /// Copies per label row when the caller doesn't say otherwise
    pub default_copies: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sender_store: PathBuf::from(DEFAULT_SENDER_STORE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            default_copies: 1,
        }
    }
}

impl AppConfig {
    /// Load from `config_path` if it exists, then apply environment overrides.
    pub fn load(config_path: &Path) -> Result<Self> {
        let mut config = if config_path.exists() {
            let content = fs::read_to_string(config_path).map_err(|e| {
                LabelError::Config(format!(
                    "Failed to read config file '{}': {}",
                    config_path.display(),
                    e
                ))
            })?;
            Self::from_toml_str(&content)?
        } else {
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_copies > MAX_COPIES {
            return Err(LabelError::Config(format!(
                "default_copies must be at most {}, got {}",
                MAX_COPIES, self.default_copies
            )));
        }
        Ok(())
    }

    /// Override fields from a key lookup (the process environment in production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = non_blank(ENV_SENDER_STORE) {
            self.sender_store = PathBuf::from(v);
        }
        if let Some(v) = non_blank(ENV_OUTPUT_DIR) {
            self.output_dir = PathBuf::from(v);
        }
        if let Some(v) = non_blank(ENV_LOG_DIR) {
            self.log_dir = PathBuf::from(v);
        }
        if let Some(v) = non_blank(ENV_DEFAULT_COPIES) {
            self.default_copies = v.trim().parse().map_err(|_| {
                LabelError::Config(format!("{} must be a whole number, got '{}'", ENV_DEFAULT_COPIES, v))
            })?;
        }
        Ok(())
    }
}
