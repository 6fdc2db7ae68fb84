// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Local environment file (`.env.local`) support.
//!
//! ```text
//! # comment                 skipped
//! export KEY=value          "export " prefix dropped
//! KEY="quoted value"        quotes stripped
//! KEY=value # trailing      comment stripped (unquoted values only)
//! ```
//!
//! Entries are merged into the process snapshot without overriding
//! variables that are already set.

use std::path::Path;

use super::EnvSnapshot;

/// Parses the contents of an environment file.
#[must_use]
pub fn parse(content: &str) -> EnvSnapshot {
    let mut env = EnvSnapshot::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        env.set(key, unquote(value.trim()));
    }
    env
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    // `#` only starts a comment when preceded by whitespace
    match value.find(" #") {
        Some(pos) => value[..pos].trim_end(),
        None => value,
    }
}

/// Loads an environment file.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns the I/O error if the file exists but cannot be read.
pub fn load(path: &Path) -> std::io::Result<Option<EnvSnapshot>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(parse(&content))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Loads `path` into `env`, keeping variables that are already set.
///
/// A missing file is silently ignored; an unreadable one is logged.
pub fn merge_into(env: &mut EnvSnapshot, path: &Path) {
    match load(path) {
        Ok(Some(local)) => {
            let added = env.merge_missing(local);
            tracing::debug!(path = %path.display(), added, "loaded local environment file");
        }
        Ok(None) => {
            tracing::debug!(path = %path.display(), "no local environment file");
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read local environment file");
        }
    }
}
