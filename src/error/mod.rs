// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          BootstrapError (~24 bytes)
//!                  |
//!   +------+-------+-------+
//!   |      |       |       |
//!   v      v       v       v
//! Bail   Config  Export  Inject
//!        Box     Box     Box
//!
//! Sub-errors (unboxed internally):
//!   Config  ReadError, ParseError, MissingKey, InvalidValue
//!   Export  Write
//!   Inject  MissingFile, Read, Parse, Write
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Writing the runtime environment script failed.
    #[error("export error: {0}")]
    Export(#[from] Box<ExportError>),

    /// Base element injection failed.
    #[error("inject error: {0}")]
    Inject(#[from] Box<InjectError>),
}

/// Create a fatal [`BootstrapError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> BootstrapError {
    BootstrapError::Bailed(message.into().into_boxed_str())
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for BootstrapError {
                fn from(err: $error) -> Self {
                    BootstrapError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
    ExportError => Export,
    InjectError => Inject,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

// --- Export Errors ---

/// Errors from writing the runtime environment script.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The script could not be written. The I/O error is kept as-is.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ExportError {
    /// The underlying I/O error.
    #[must_use]
    pub const fn io_error(&self) -> &std::io::Error {
        match self {
            Self::Write { source, .. } => source,
        }
    }
}

// --- Inject Errors ---

/// Errors from rewriting the HTML document's `<base>` element.
#[derive(Debug, Error)]
pub enum InjectError {
    /// The target document does not exist.
    #[error("the file {} can't be found", path.display())]
    MissingFile { path: PathBuf },

    /// The target document exists but could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document could not be parsed or rewritten.
    #[error("failed to process '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// The rewritten document could not be written back.
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InjectError {
    /// Path of the document the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::MissingFile { path }
            | Self::Read { path, .. }
            | Self::Parse { path, .. }
            | Self::Write { path, .. } => path,
        }
    }

    /// Whether this error always terminates the step, regardless of strictness.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingFile { .. })
    }
}
