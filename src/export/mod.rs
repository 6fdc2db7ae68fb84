// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Runtime environment export (`env.js`).
//!
//! # Pipeline
//!
//! ```text
//! EnvSnapshot
//!     |  seed NODE_ENV (default "development"), PUBLIC_URL (raw, may be unset)
//!     |  select names matching prefix (case-insensitive, snapshot order)
//!     v
//! RuntimeEnvironment  (immutable)
//!     |  PUBLIC_URL unset --> "/"
//!     |  literal::assignment
//!     v
//! window.ENV = {"NODE_ENV":"development","PUBLIC_URL":"/",...};
//!     |
//!     v
//! <output_dir>/env.js  (overwritten, not atomic)
//! ```

pub mod literal;


use std::path::{Path, PathBuf};

use crate::config::types::ExportConfig;
use crate::env::{EnvSnapshot, NODE_ENV, PUBLIC_URL};
use crate::error::ExportError;

/// `NODE_ENV` value used when the variable is unset or empty.
pub const DEFAULT_NODE_ENV: &str = "development";

/// `PUBLIC_URL` value emitted when the variable is unset.
pub const DEFAULT_PUBLIC_URL: &str = "/";

/// The variables exposed to client-side code.
///
/// Always contains `NODE_ENV` and `PUBLIC_URL`, followed by every selected
/// variable in snapshot order. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeEnvironment {
    node_env: String,
    public_url: Option<String>,
    selected: Vec<(String, String)>,
}

impl RuntimeEnvironment {
    /// Builds the runtime environment from a snapshot.
    ///
    /// The two seed entries win over any selected variable with the same name.
    #[must_use]
    pub fn from_snapshot(env: &EnvSnapshot, export: &ExportConfig) -> Self {
        let node_env = env
            .get(NODE_ENV)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_NODE_ENV)
            .to_string();
        let public_url = env.get(PUBLIC_URL).map(str::to_string);

        let selected = env
            .iter()
            .filter(|(name, _)| export.matches(name))
            .filter(|(name, _)| *name != NODE_ENV && *name != PUBLIC_URL)
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        Self {
            node_env,
            public_url,
            selected,
        }
    }

    #[must_use]
    pub fn node_env(&self) -> &str {
        &self.node_env
    }

    /// The caller-supplied `PUBLIC_URL`, `None` when unset.
    #[must_use]
    pub fn public_url(&self) -> Option<&str> {
        self.public_url.as_deref()
    }

    /// Variables selected by prefix, in snapshot order.
    pub fn selected(&self) -> impl Iterator<Item = (&str, &str)> {
        self.selected.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// All emitted entries, with an unset `PUBLIC_URL` replaced by `"/"`.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        [
            (NODE_ENV, self.node_env.as_str()),
            (PUBLIC_URL, self.public_url().unwrap_or(DEFAULT_PUBLIC_URL)),
        ]
        .into_iter()
        .chain(self.selected())
    }

    /// Looks up an emitted entry.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries().find(|(k, _)| *k == name).map(|(_, v)| v)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        2 + self.selected.len()
    }

    /// Always false: the two seed entries are present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

/// Writes the runtime environment script.
#[derive(Debug, Clone)]
pub struct EnvironmentExporter {
    global_name: String,
    script: String,
}

impl EnvironmentExporter {
    #[must_use]
    pub fn new(global_name: impl Into<String>, script: impl Into<String>) -> Self {
        Self {
            global_name: global_name.into(),
            script: script.into(),
        }
    }

    /// Renders the script text.
    #[must_use]
    pub fn render(&self, env: &RuntimeEnvironment) -> String {
        literal::assignment(&self.global_name, env.entries())
    }

    /// Path the script is written to inside `output_dir`.
    #[must_use]
    pub fn script_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(&self.script)
    }

    /// Writes the script into `output_dir`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Write` carrying the I/O error unchanged.
    pub fn export(
        &self,
        env: &RuntimeEnvironment,
        output_dir: &Path,
    ) -> std::result::Result<PathBuf, ExportError> {
        let path = self.script_path(output_dir);
        tracing::debug!(
            path = %path.display(),
            variables = env.len(),
            "writing runtime environment"
        );
        for (name, _) in env.selected() {
            tracing::trace!(name, "exporting variable");
        }

        std::fs::write(&path, self.render(env)).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;

        tracing::info!("env variables were successfully copied to {}", path.display());
        Ok(path)
    }
}
