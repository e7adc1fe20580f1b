//! Configuration file support for vexid.
//!
//! Provides YAML-based configuration through `vexid.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line arguments.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use vexid::application::dto::{IdentifyRequest, OutputFormat};
use vexid::shared::Result;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "vexid.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub regenerate_id: Option<bool>,
    pub bump_version: Option<bool>,
    pub tooling: Option<String>,
    pub quiet: Option<bool>,
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
    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!(
                "Invalid config: {}\n\n💡 Hint: 'format' accepts json, canonical or id.",
                e
            );
        }
    }
    if let Some(ref tooling) = config.tooling {
        if tooling.trim().is_empty() {
            bail!(
                "Invalid config: tooling must not be empty.\n\n\
                 💡 Hint: Remove the 'tooling' key to keep each document's own value."
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

/// Effective settings after merging command-line arguments over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub files: Vec<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub regenerate_id: bool,
    pub bump_version: bool,
    pub tooling: Option<String>,
    pub quiet: bool,
}

impl Settings {
    /// Command-line values win; config values fill the gaps; defaults cover the rest.
    pub fn resolve(args: Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(value)) => value
                .parse::<OutputFormat>()
                .map_err(|e| anyhow::anyhow!("Invalid config: {}", e))?,
            (None, None) => OutputFormat::default(),
        };

        Ok(Self {
            files: args.files,
            format,
            output: args.output,
            regenerate_id: args.regenerate_id || config.regenerate_id.unwrap_or(false),
            bump_version: args.bump_version || config.bump_version.unwrap_or(false),
            tooling: args.tooling.or(config.tooling),
            quiet: args.quiet || config.quiet.unwrap_or(false),
        })
    }

    pub fn to_request(&self) -> IdentifyRequest {
        IdentifyRequest::new(self.files.clone())
            .with_regenerate_id(self.regenerate_id)
            .with_bump_version(self.bump_version)
            .with_tooling(self.tooling.clone())
    }
}
