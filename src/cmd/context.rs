// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Resolved inputs shared by the two phases.
//!
//! ```text
//! Config + EnvSnapshot + root
//!   mode        = Mode::from_snapshot (before .env.local)
//!   env         = snapshot (+ .env.local unless production)
//!   output_dir  = root/{build|public}
//!   runtime     = RuntimeEnvironment::from_snapshot
//!   public_path = PublicPath::from_public_url(raw PUBLIC_URL)
//! ```

use std::path::{Path, PathBuf};

use bon::Builder;

use crate::config::Config;
use crate::env::{EnvSnapshot, Mode, dotenv};
use crate::export::{EnvironmentExporter, RuntimeEnvironment};
use crate::inject::PublicPath;

/// Everything both phases need, built once and passed by reference.
#[derive(Debug, Clone, Builder)]
pub struct StepContext {
    mode: Mode,
    output_dir: PathBuf,
    runtime: RuntimeEnvironment,
    public_path: PublicPath,
    script: String,
    document: String,
    global_name: String,
    #[builder(default = false)]
    strict: bool,
}

impl StepContext {
    /// Resolves the context from configuration and a process snapshot.
    ///
    /// Outside production mode the local environment file is merged into
    /// the snapshot first; variables already set take precedence.
    #[must_use]
    pub fn resolve(config: &Config, mut env: EnvSnapshot, root: &Path) -> Self {
        let mode = Mode::from_snapshot(&env);
        if !mode.is_production() {
            dotenv::merge_into(&mut env, &root.join(&config.export.env_file));
        }

        let runtime = RuntimeEnvironment::from_snapshot(&env, &config.export);
        let public_path = PublicPath::from_public_url(runtime.public_url());
        let output_dir = config.output.output_dir(root, &mode);

        tracing::debug!(
            %mode,
            output_dir = %output_dir.display(),
            public_path = %public_path,
            "resolved step context"
        );

        Self::builder()
            .mode(mode)
            .output_dir(output_dir)
            .runtime(runtime)
            .public_path(public_path)
            .script(config.output.script.clone())
            .document(config.output.document.clone())
            .global_name(config.export.global_name.clone())
            .strict(config.global.strict)
            .build()
    }

    #[must_use]
    pub const fn mode(&self) -> &Mode {
        &self.mode
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    #[must_use]
    pub const fn runtime(&self) -> &RuntimeEnvironment {
        &self.runtime
    }

    #[must_use]
    pub const fn public_path(&self) -> &PublicPath {
        &self.public_path
    }

    #[must_use]
    pub const fn strict(&self) -> bool {
        self.strict
    }

    /// Path of the HTML entry point.
    #[must_use]
    pub fn document_path(&self) -> PathBuf {
        self.output_dir.join(&self.document)
    }

    #[must_use]
    pub fn exporter(&self) -> EnvironmentExporter {
        EnvironmentExporter::new(&self.global_name, &self.script)
    }
}
