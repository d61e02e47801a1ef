//! Configuration file support for ext-remove.
//!
//! Provides YAML-based configuration through `ext-remove.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::adapters::outbound::descriptors::BuildTool;
use crate::application::dto::OutputFormat;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "ext-remove.config.yml";

/// Characters that carry meaning in queries and cannot be separators
const RESERVED_SEPARATORS: [char; 3] = ['*', '?', ':'];

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Organizational prefix token; an empty string disables prefix stripping
    pub prefix: Option<String>,
    /// Token separators, one character each; `-` is always a separator
    pub separators: Option<Vec<String>>,
    pub format: Option<String>,
    pub build_tool: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Configured separators as characters (validated on load)
    pub fn separator_chars(&self) -> Option<Vec<char>> {
        self.separators
            .as_ref()
            .map(|separators| separators.iter().filter_map(|s| s.chars().next()).collect())
    }

    pub fn output_format(&self) -> Option<OutputFormat> {
        self.format
            .as_deref()
            .and_then(|format| OutputFormat::from_str(format).ok())
    }

    pub fn build_tool(&self) -> Option<BuildTool> {
        self.build_tool
            .as_deref()
            .and_then(|build_tool| BuildTool::from_str(build_tool).ok())
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

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = OutputFormat::from_str(format) {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(ref build_tool) = config.build_tool {
        if let Err(e) = BuildTool::from_str(build_tool) {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(ref separators) = config.separators {
        for (i, separator) in separators.iter().enumerate() {
            let mut chars = separator.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                bail!(
                    "Invalid config: separators[{}] must be exactly one character, got '{}'.\n\n\
                     💡 Hint: List each separator on its own line (e.g., \"_\").",
                    i,
                    separator
                );
            };
            if RESERVED_SEPARATORS.contains(&c) {
                bail!(
                    "Invalid config: separators[{}] '{}' is reserved for query syntax.\n\n\
                     💡 Hint: '*' and '?' are glob wildcards and ':' separates coordinates.",
                    i,
                    c
                );
            }
        }
    }

    if let Some(ref prefix) = config.prefix {
        if prefix.contains(|c| RESERVED_SEPARATORS.contains(&c)) {
            bail!(
                "Invalid config: prefix '{}' must not contain '*', '?' or ':'.\n\n\
                 💡 Hint: The prefix is a single plain token such as \"quarkus\".",
                prefix
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
