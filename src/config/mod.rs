// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. spa-bootstrap.toml (root, optional)
//! 3. --config FILE (repeatable)
//! 4. SPA_BOOTSTRAP__* env vars
//! 5. --set section.key=value
//! 6. CLI flags (--root, --strict, --log-level, ...)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! SPA_BOOTSTRAP__GLOBAL__STRICT=true        → global.strict = true
//! SPA_BOOTSTRAP__OUTPUT__PUBLIC_DIR=static  → output.public_dir = "static"
//! SPA_BOOTSTRAP__EXPORT__PREFIX=VITE_       → export.prefix = "VITE_"
//! ```
//!
//! This is the tool's own configuration. The variables that end up in
//! the runtime script come from the process environment snapshot
//! (see [`crate::env`]).

pub mod loader;
pub mod paths;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{BootstrapError, Result};

use loader::ConfigLoader;
use paths::OutputConfig;
use types::{ExportConfig, GlobalConfig};

/// File name of the optional configuration file in the root directory.
pub const CONFIG_FILE: &str = "spa-bootstrap.toml";

/// Prefix of environment variables overriding configuration keys.
pub const ENV_PREFIX: &str = "SPA_BOOTSTRAP";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Output directories and file names.
    pub output: OutputConfig,
    /// Runtime environment export options.
    pub export: ExportConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use spa_bootstrap::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("spa-bootstrap.toml")
    ///     .with_env_prefix("SPA_BOOTSTRAP")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate values that deserialization alone cannot check.
    ///
    /// # Errors
    ///
    /// Returns `BootstrapError::Config` wrapping the first `ConfigError::InvalidValue`.
    pub fn validate(&self) -> Result<()> {
        self.output.validate().map_err(BootstrapError::from)?;
        self.export.validate().map_err(BootstrapError::from)?;
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_output_options(&mut options);
        self.format_export_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |p: Option<&Path>| p.map_or_else(String::new, |p| p.display().to_string());

        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            fmt(self.global.log_file.as_deref()),
        );
        options.insert("global.root".into(), fmt(self.global.root.as_deref()));
        options.insert("global.strict".into(), self.global.strict.to_string());
    }

    fn format_output_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "output.build_dir".into(),
            self.output.build_dir.display().to_string(),
        );
        options.insert(
            "output.public_dir".into(),
            self.output.public_dir.display().to_string(),
        );
        options.insert("output.script".into(), self.output.script.clone());
        options.insert("output.document".into(), self.output.document.clone());
    }

    fn format_export_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("export.prefix".into(), self.export.prefix.clone());
        options.insert("export.global_name".into(), self.export.global_name.clone());
        options.insert(
            "export.env_file".into(),
            self.export.env_file.display().to_string(),
        );
    }
}
