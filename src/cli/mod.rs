// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! spa-bootstrap [global options] [command]
//! run            (default) env.js + <base>
//! env            env.js only
//! base           <base> only
//! print          show env.js contents without writing
//! options
//! config-files
//! version
//! ```

pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// Runtime environment and base element injector.
#[derive(Debug, Parser)]
#[command(
    name = "spa-bootstrap",
    author,
    version,
    about = "Prepares a single-page app's env.js and <base> element",
    long_about = "spa-bootstrap Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Writes NODE_ENV, PUBLIC_URL and every REACT_APP_* variable to\n\
                  env.js as `window.ENV`, then sets the <base> element of\n\
                  index.html to PUBLIC_URL. Files live in build/ when\n\
                  NODE_ENV=production and in public/ otherwise.",
    after_help = "CONFIG FILES:\n\n\
                  spa-bootstrap reads spa-bootstrap.toml from the root directory\n\
                  if it exists. Additional files can be given with --config, those\n\
                  are loaded after it. Use --no-default-config to only use --config.\n\
                  Any key can also be set with SPA_BOOTSTRAP__SECTION__KEY or --set."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute (defaults to `run`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Writes env.js and injects the <base> element.
    Run,

    /// Writes env.js only.
    Env,

    /// Injects the <base> element only.
    Base,

    /// Prints the env.js contents without writing anything.
    Print,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files in use.
    #[command(name = "config-files")]
    ConfigFiles,

    /// Shows the version.
    Version,
}

impl Cli {
    /// The command to run, `run` when none was given.
    #[must_use]
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Run)
    }
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
