//! Configuration file support for bean-depend.
//!
//! Provides YAML-based configuration through `bean-depend.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::{OutputFormat, MAX_CYCLE_SEARCH_DEPTH};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "bean-depend.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    /// Configuration class whose import graph is analyzed
    pub root: Option<String>,
    pub max_depth: Option<usize>,
    pub exclude_beans: Option<Vec<String>>,
    pub fail_on_cycles: Option<bool>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed `format` value; validated on load, so this only fails for
    /// configs that were built by hand.
    pub fn output_format(&self) -> Result<Option<OutputFormat>> {
        self.format
            .as_deref()
            .map(|format| format.parse::<OutputFormat>().map_err(anyhow::Error::msg))
            .transpose()
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
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
    if let Err(message) = config.output_format() {
        bail!(
            "Invalid config: {}\n\n💡 Hint: Use one of 'text', 'json' or 'cypher' for 'format'.",
            message
        );
    }

    if let Some(max_depth) = config.max_depth {
        if max_depth > MAX_CYCLE_SEARCH_DEPTH {
            bail!(
                "Invalid config: max_depth must be at most {}, got {}.\n\n\
                 💡 Hint: Deep cycle searches grow exponentially; values between 2 and 6 are typical.",
                MAX_CYCLE_SEARCH_DEPTH,
                max_depth
            );
        }
    }

    if let Some(ref root) = config.root {
        if root.trim().is_empty() {
            bail!(
                "Invalid config: root must not be empty.\n\n\
                 💡 Hint: Give a fully qualified configuration class (e.g., \"com.example.RootConfig\") or remove the field."
            );
        }
    }

    if let Some(ref patterns) = config.exclude_beans {
        for (i, pattern) in patterns.iter().enumerate() {
            if pattern.trim().is_empty() {
                bail!("Invalid config: exclude_beans[{}] must not be empty.", i);
            }
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
