//! Configuration management for flagctx.
//!
//! Loads configuration from ${FLAGCTX_HOME}/config.toml with sensible defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::context::EvaluationContext;
use crate::flags::{ACCESS_GRANTED, FlagDefinition, FlagRule, FlagValue, LocalFlagSource};
use crate::provider::ProviderConfig;

/// Returns the default config template with comments.
///
/// Embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for flagctx configuration and data directories.
    //!
    //! FLAGCTX_HOME resolution order:
    //! 1. FLAGCTX_HOME environment variable (if set)
    //! 2. ~/.config/flagctx (default)
    //! 3. ./.flagctx when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the flagctx home directory.
    pub fn flagctx_home() -> PathBuf {
        if let Ok(home) = std::env::var("FLAGCTX_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".flagctx"),
            |h| h.join(".config").join("flagctx"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        flagctx_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        flagctx_home().join("logs")
    }
}

/// Login form behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Clear a shown error as soon as any field is edited.
    ///
    /// Off by default: an error stays until the next submit.
    pub clear_error_on_edit: bool,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Client-side id handed to the flag provider.
    pub client_side_id: String,

    /// Anonymous context active before login.
    pub context: EvaluationContext,

    /// Options passed through to the flag source.
    pub options: toml::Table,

    /// Login form behavior.
    pub form: FormConfig,

    /// Flag definitions for the local flag source.
    pub flags: BTreeMap<String, FlagDefinition>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_side_id: Self::DEFAULT_CLIENT_SIDE_ID.to_string(),
            context: EvaluationContext::default(),
            options: toml::Table::new(),
            form: FormConfig::default(),
            flags: default_flags(),
        }
    }
}

/// `accessGranted` is on for admins only.
fn default_flags() -> BTreeMap<String, FlagDefinition> {
    let mut flags = BTreeMap::new();
    flags.insert(
        ACCESS_GRANTED.to_string(),
        FlagDefinition {
            default: FlagValue::Bool(false),
            rules: vec![FlagRule {
                attribute: "role".to_string(),
                values: vec!["admin".to_string()],
                value: FlagValue::Bool(true),
            }],
        },
    );
    flags
}

impl Config {
    const DEFAULT_CLIENT_SIDE_ID: &str = "client-side-id-123abc";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes the default config template to `path`.
    ///
    /// Fails if the file already exists; never overwrites.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Provider construction options derived from this config.
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            client_side_id: self.client_side_id.clone(),
            context: self.context.clone(),
            options: self.options.clone(),
        }
    }

    /// Builds the local flag source from `[flags]` and `[options]`.
    pub fn flag_source(&self) -> Result<LocalFlagSource> {
        LocalFlagSource::new(self.flags.clone())
            .with_options(&self.options)
            .context("Invalid [options] for the local flag source")
    }
}
