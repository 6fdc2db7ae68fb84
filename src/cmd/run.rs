// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The bootstrap step: `env.js` export followed by `<base>` injection.
//!
//! # Failure Policy
//!
//! ```text
//! env.js write fails          --> fatal (later steps need the file)
//! index.html missing          --> fatal, env.js is kept
//! index.html read/parse/write --> logged; fatal only with --strict
//! ```

use std::path::PathBuf;

use super::context::StepContext;
use crate::error::{BootstrapError, ExportError, InjectError, Result, bail_out};
use crate::inject::{BaseElementInjector, InjectOutcome, ensure_document_exists};

/// Runs both phases in order.
///
/// # Errors
///
/// Returns an error if `env.js` cannot be written, if the HTML document is
/// missing, or, in strict mode, if the injection fails.
pub async fn run_bootstrap_command(ctx: &StepContext) -> Result<()> {
    tracing::info!(mode = %ctx.mode(), "Bootstrapping {}", ctx.output_dir().display());
    run_env_command(ctx)?;
    run_base_command(ctx).await
}

/// Writes the runtime environment script.
///
/// # Errors
///
/// Returns the export error, with the I/O error as its source.
pub fn run_env_command(ctx: &StepContext) -> Result<()> {
    export_env(ctx).map_err(BootstrapError::from)?;
    Ok(())
}

/// Writes the runtime environment script, returning its path.
///
/// # Errors
///
/// Returns `ExportError::Write` if the file cannot be written.
pub fn export_env(ctx: &StepContext) -> std::result::Result<PathBuf, ExportError> {
    ctx.exporter()
        .export(ctx.runtime(), ctx.output_dir())
        .inspect_err(|e| tracing::error!("{e}"))
}

/// Injects the `<base>` element into the HTML entry point.
///
/// # Errors
///
/// Returns an error if the document is missing, or if the injection fails in
/// strict mode.
pub async fn run_base_command(ctx: &StepContext) -> Result<()> {
    match inject_base(ctx).await {
        Ok(_) => Ok(()),
        Err(e) if e.is_fatal() || ctx.strict() => Err(bail_out(e.to_string()).into()),
        Err(_) => Ok(()),
    }
}

/// Injects the `<base>` element, logging any failure.
///
/// # Errors
///
/// Returns the injection error after logging it.
pub async fn inject_base(ctx: &StepContext) -> std::result::Result<InjectOutcome, InjectError> {
    let path = ctx.document_path();
    if let Err(e) = ensure_document_exists(&path).await {
        tracing::error!("{e}");
        return Err(e);
    }

    BaseElementInjector::new()
        .inject(&path, ctx.public_path())
        .await
        .inspect_err(|e| tracing::error!(path = %e.path().display(), "{e}"))
}
