// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, OutputConfig, ExportConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file. No file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Project directory the output directories are resolved against.
    /// Defaults to the current directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    /// Treat every base injection failure as fatal, not only a missing document.
    pub strict: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
            root: None,
            strict: false,
        }
    }
}

/// Runtime environment export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExportConfig {
    /// Variables whose name starts with this prefix (ASCII case-insensitive)
    /// are exported.
    pub prefix: String,
    /// Global the runtime object is assigned to.
    pub global_name: String,
    /// Local environment file, relative to the root. Only read outside
    /// production mode.
    pub env_file: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            prefix: "REACT_APP_".to_string(),
            global_name: "window.ENV".to_string(),
            env_file: PathBuf::from(".env.local"),
        }
    }
}

impl ExportConfig {
    /// Checks that the prefix is usable and that the global name is a dotted
    /// identifier path such as `window.ENV`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending key.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(invalid("prefix", "prefix must not be empty"));
        }
        if !is_identifier_path(&self.global_name) {
            return Err(invalid(
                "global_name",
                &format!(
                    "'{}' is not a dotted identifier path like 'window.ENV'",
                    self.global_name
                ),
            ));
        }
        Ok(())
    }

    /// Whether `name` is selected for export.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        let prefix = self.prefix.as_bytes();
        name.len() >= prefix.len() && name.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix)
    }
}

fn invalid(key: &str, message: &str) -> ConfigError {
    ConfigError::InvalidValue {
        section: "export".to_string(),
        key: key.to_string(),
        message: message.to_string(),
    }
}

fn is_identifier_path(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|segment| {
            let mut chars = segment.chars();
            chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        })
}
