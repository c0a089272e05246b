//! Configuration file support for fsio-gen.
//!
//! Provides YAML-based configuration through `fsio-gen.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use owo_colors::OwoColorize;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::fsio_settings::domain::LineEnding;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "fsio-gen.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub generation_message: Option<String>,
    pub line_ending: Option<LineEnding>,
    pub enum_output: Option<PathBuf>,
    pub getters_output: Option<PathBuf>,
    /// Append the generation date to the header message
    pub timestamp: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax and line_ending is one of lf, crlf, cr.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref message) = config.generation_message {
        if message.contains(['\n', '\r']) {
            bail!(
                "Invalid config: generation_message must be a single line.\n\n\
                 💡 Hint: The message is written after '// this file ' in every generated header."
            );
        }
    }
    for (key, value) in [
        ("enum_output", &config.enum_output),
        ("getters_output", &config.getters_output),
    ] {
        if matches!(value, Some(path) if path.as_os_str().is_empty()) {
            bail!("Invalid config: {} must not be empty.", key);
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "{} Unknown config field '{}' will be ignored.",
            "⚠️  Warning:".yellow(),
            key
        );
    }
}
