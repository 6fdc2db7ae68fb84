// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output path configuration.
//!
//! ```text
//! root/
//!   public/        (development and other modes)
//!     env.js
//!     index.html
//!   build/         (NODE_ENV=production)
//!     env.js
//!     index.html
//! ```
//!
//! Relative directories are resolved against the root, never the
//! caller's working directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::env::Mode;
use crate::error::ConfigError;

/// Output directories and file names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output directory in production mode.
    pub build_dir: PathBuf,
    /// Output directory in every other mode.
    pub public_dir: PathBuf,
    /// File name of the runtime environment script.
    pub script: String,
    /// File name of the HTML entry point.
    pub document: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            build_dir: PathBuf::from("build"),
            public_dir: PathBuf::from("public"),
            script: "env.js".to_string(),
            document: "index.html".to_string(),
        }
    }
}

impl OutputConfig {
    /// Resolve the output directory for `mode` against `root`.
    #[must_use]
    pub fn output_dir(&self, root: &Path, mode: &Mode) -> PathBuf {
        let dir = if mode.is_production() {
            &self.build_dir
        } else {
            &self.public_dir
        };
        if dir.is_absolute() {
            dir.clone()
        } else {
            root.join(dir)
        }
    }

    /// Checks that `script` and `document` are bare file names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending key.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        for (key, value) in [("script", &self.script), ("document", &self.document)] {
            let mut components = Path::new(value).components();
            let is_file_name = matches!(
                (components.next(), components.next()),
                (Some(std::path::Component::Normal(_)), None)
            );
            if !is_file_name {
                return Err(ConfigError::InvalidValue {
                    section: "output".to_string(),
                    key: key.to_string(),
                    message: format!("'{value}' must be a plain file name"),
                });
            }
        }
        Ok(())
    }
}
