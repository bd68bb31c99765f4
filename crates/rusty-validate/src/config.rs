// File: src/config.rs
// Purpose: Configuration parsing from rusty-validate.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::fields::FieldSpec;

/// Library configuration
///
/// ```toml
/// [validation]
/// skip_private_fields = true
/// strict_sinks = false
///
/// [fields]
/// Name = ["required", { min = 3 }]
/// Email = ["email", { message = "please use a valid email" }]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Field spec shipped alongside the settings
    #[serde(default)]
    pub fields: FieldSpec,
}

/// Engine behaviour switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Skip fields the record reports as private instead of treating them as
    /// absent (default: true)
    #[serde(default = "default_true")]
    pub skip_private_fields: bool,

    /// Return an error when a sink has no field for a failed field name.
    /// When off the write is dropped with a warning. Defaults to on in debug
    /// builds and off in release builds.
    #[serde(default = "default_strict_sinks")]
    pub strict_sinks: bool,
}

fn default_true() -> bool {
    true
}

fn default_strict_sinks() -> bool {
    cfg!(debug_assertions)
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            skip_private_fields: true,
            strict_sinks: default_strict_sinks(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // If file doesn't exist, return default config
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    /// Load configuration from default path (./rusty-validate.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("rusty-validate.toml")
    }

    /// Parse configuration from TOML text; blank text gives the defaults
    pub fn from_toml_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(content).context("Invalid rusty-validate configuration")?;
        Ok(config)
    }
}
