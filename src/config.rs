//! Configuration file support for callgraph-sampler.
//!
//! Provides YAML-based configuration through `callgraph-sampler.config.yml`
//! files, including data structures, file loading, and validation.
//! Command-line flags always take precedence over file values.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "callgraph-sampler.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// SQLite metadata store used by `select`
    pub metadata_db: Option<PathBuf>,
    /// Base URL of the dependency-resolution service
    pub resolver_url: Option<String>,
    /// Merge engine command line, e.g. `java -jar merger.jar`
    pub merger_command: Option<String>,
    /// Callable index handed to the merge engine
    pub callable_index: Option<PathBuf>,
    pub temporary_folder: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub max_dependents: Option<usize>,
    /// Seed for reproducible sampling and capping
    pub seed: Option<u64>,
    pub include_provided: Option<bool>,
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
    if config.max_dependents == Some(0) {
        bail!(
            "Invalid config: max_dependents must be at least 1.\n\n\
             💡 Hint: Omit the field to use the default of 100."
        );
    }

    for (field, value) in [
        ("resolver_url", config.resolver_url.as_deref()),
        ("merger_command", config.merger_command.as_deref()),
    ] {
        if value.is_some_and(|v| v.trim().is_empty()) {
            bail!(
                "Invalid config: {} must not be empty.\n\n\
                 💡 Hint: Remove the field or give it a value.",
                field
            );
        }
    }

    if let Some(url) = config.resolver_url.as_deref() {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            bail!(
                "Invalid config: resolver_url '{}' must start with http:// or https://",
                url
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
