// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const DEFAULT_BASE_URL: &str = "https://bluepages.ibm.com/BpHttpApisv3/slaphapi";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub directory: DirectoryConfig,
    pub columns: ColumnConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectoryConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ColumnConfig {
    pub name_index: usize,
    pub blank_check_width: usize,
    pub output_column: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    pub suffix: String,
}

impl DirectoryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Layers built-in defaults, then `path` (required) or `fallback` (optional),
    /// then `EMAIL_ADDER__*` environment variables.
    pub fn load_from(path: Option<&Path>, fallback: &Path) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(fallback).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("EMAIL_ADDER")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            directory: DirectoryConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                timeout_secs: 10,
            },
            columns: ColumnConfig {
                name_index: 5,
                blank_check_width: 7,
                output_column: "e-mail".to_string(),
            },
            output: OutputConfig {
                suffix: "_processed".to_string(),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        Validator::validate_url(&self.directory.base_url)
            .map_err(|e| PipelineError::Config(format!("directory.base_url: {}", e)))?;

        if self.directory.timeout_secs == 0 {
            return Err(PipelineError::Config(
                "directory.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.columns.blank_check_width == 0 {
            return Err(PipelineError::Config(
                "columns.blank_check_width must be greater than 0".to_string(),
            ));
        }

        if self.columns.output_column.trim().is_empty() {
            return Err(PipelineError::Config(
                "columns.output_column must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
