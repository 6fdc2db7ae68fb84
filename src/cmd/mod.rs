// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> StepContext --> cmd::run_* handlers
//!   run (env + base), env, base, print, options, config-files
//! ```

pub mod config;
pub mod context;
pub mod run;
