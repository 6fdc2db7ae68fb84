// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use spa_bootstrap::cli::{Cli, Command};
use std::path::PathBuf;

// =============================================================================
// Commands
// =============================================================================

#[test]
fn cli_no_command_runs_both_phases() {
    let cli = Cli::try_parse_from(["spa-bootstrap"]).unwrap();
    assert_eq!(cli.command(), Command::Run);
    assert!(!cli.global.strict);
    assert!(cli.global.configs.is_empty());
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["spa-bootstrap", "deploy"]).is_err());
}

#[test]
fn cli_help_is_an_error_result() {
    let err = Cli::try_parse_from(["spa-bootstrap", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

// =============================================================================
// Global options
// =============================================================================

#[test]
fn cli_global_options_after_command() {
    let cli = Cli::try_parse_from(["spa-bootstrap", "env", "--root", "site", "-l", "1"]).unwrap();
    assert_eq!(cli.command(), Command::Env);
    assert_eq!(cli.global.root, Some(PathBuf::from("site")));
    assert_eq!(cli.global.log_level, Some(1));
}

#[test]
fn cli_repeated_set_options_keep_order() {
    let cli = Cli::try_parse_from([
        "spa-bootstrap",
        "--set",
        "export.prefix=VITE_",
        "-s",
        "export.prefix=APP_",
    ])
    .unwrap();
    assert_eq!(
        cli.global.to_config_overrides(),
        ["export.prefix=VITE_", "export.prefix=APP_"]
    );
}

#[test]
fn cli_file_log_level_overrides_log_level() {
    let cli =
        Cli::try_parse_from(["spa-bootstrap", "-l", "1", "--file-log-level", "5"]).unwrap();
    assert_eq!(
        cli.global.to_config_overrides(),
        ["global.output_log_level=1", "global.file_log_level=5"]
    );
}

#[test]
fn cli_root_and_strict_become_overrides() {
    let cli = Cli::try_parse_from(["spa-bootstrap", "--strict", "-r", "/srv/app"]).unwrap();
    assert_eq!(
        cli.global.to_config_overrides(),
        ["global.root=/srv/app", "global.strict=true"]
    );
}

#[test]
fn cli_no_default_config() {
    let cli = Cli::try_parse_from(["spa-bootstrap", "--no-default-config", "options"]).unwrap();
    assert!(cli.global.no_default_config);
    assert_eq!(cli.command(), Command::Options);
}
