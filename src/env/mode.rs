// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Build mode derived from `NODE_ENV`.

use super::{EnvSnapshot, NODE_ENV};

/// Build mode.
///
/// ```text
/// NODE_ENV unset / ""   --> Development
/// NODE_ENV=production   --> Production
/// NODE_ENV=<other>      --> Other(<other>)
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Development,
    Production,
    /// Any other value, kept verbatim (e.g. `test`).
    Other(String),
}

impl Mode {
    /// Resolves the mode from the `NODE_ENV` entry of a snapshot.
    #[must_use]
    pub fn from_snapshot(env: &EnvSnapshot) -> Self {
        env.get(NODE_ENV).map_or(Self::Development, Self::parse)
    }

    /// Parses a raw `NODE_ENV` value.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "development" => Self::Development,
            "production" => Self::Production,
            other => Self::Other(other.to_string()),
        }
    }

    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Other(value) => value,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
