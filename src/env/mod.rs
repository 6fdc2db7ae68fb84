// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process environment capture.
//!
//! # Architecture
//!
//! ```text
//! current_env() --> EnvSnapshot (ordered, insertion order kept)
//!                        |
//!      Mode::from_snapshot (NODE_ENV)
//!                        |
//!      not production? --> dotenv::load(.env.local) --> merge_missing
//! ```
//!
//! The snapshot is taken once by the entry point and handed to the
//! components by reference; nothing reads `std::env` after that.

pub mod dotenv;
pub mod mode;
pub mod snapshot;

#[cfg(test)]
mod tests;

pub use mode::Mode;
pub use snapshot::EnvSnapshot;

/// Name of the variable selecting the build mode.
pub const NODE_ENV: &str = "NODE_ENV";

/// Name of the variable carrying the public mount path.
pub const PUBLIC_URL: &str = "PUBLIC_URL";

/// Captures the current process environment.
///
/// Variables whose name or value is not valid Unicode are skipped.
#[must_use]
pub fn current_env() -> EnvSnapshot {
    std::env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
        .collect()
}
