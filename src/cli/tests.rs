// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_default_command_is_run() {
    let cli = Cli::try_parse_from(["spa-bootstrap"]).unwrap();
    assert_eq!(cli.command, None);
    assert_eq!(cli.command(), Command::Run);
}

#[test]
fn test_parse_subcommands() {
    let cases = [
        ("run", Command::Run),
        ("env", Command::Env),
        ("base", Command::Base),
        ("print", Command::Print),
        ("options", Command::Options),
        ("config-files", Command::ConfigFiles),
        ("version", Command::Version),
    ];
    for (arg, expected) in cases {
        let cli = Cli::try_parse_from(["spa-bootstrap", arg]).unwrap();
        assert_eq!(cli.command(), expected, "{arg}");
    }
}

#[test]
fn test_parse_global_options() {
    let cli = Cli::try_parse_from([
        "spa-bootstrap",
        "-l",
        "4",
        "--root",
        "/srv/app",
        "--strict",
        "-c",
        "a.toml",
        "-c",
        "b.toml",
        "base",
    ])
    .unwrap();

    assert_eq!(cli.global.log_level, Some(4));
    assert_eq!(cli.global.root, Some(PathBuf::from("/srv/app")));
    assert!(cli.global.strict);
    assert_eq!(
        cli.global.configs,
        [PathBuf::from("a.toml"), PathBuf::from("b.toml")]
    );
    assert_eq!(cli.command(), Command::Base);
}

#[test]
fn test_log_level_out_of_range_rejected() {
    assert!(Cli::try_parse_from(["spa-bootstrap", "-l", "7"]).is_err());
}

#[test]
fn test_config_overrides() {
    let cli = Cli::try_parse_from([
        "spa-bootstrap",
        "-s",
        "export.prefix=VITE_",
        "-l",
        "2",
        "--log-file",
        "logs/bootstrap.log",
        "--strict",
    ])
    .unwrap();

    insta::assert_snapshot!(cli.global.to_config_overrides().join("\n"), @r"
    export.prefix=VITE_
    global.output_log_level=2
    global.file_log_level=2
    global.log_file=logs/bootstrap.log
    global.strict=true
    ");
}
