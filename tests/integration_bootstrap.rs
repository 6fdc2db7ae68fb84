// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! End-to-end tests running the binary against a temporary project.
// cargo_bin is deprecated in favor of the cargo_bin! macro; both work.
#![allow(deprecated)]

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin;
use predicates::prelude::*;
use tempfile::TempDir;

const PAGE: &str = "<!DOCTYPE html>\n<html>\n<head>\n<title>App</title>\n</head>\n<body></body>\n</html>\n";

fn project(output: &str, page: &[u8]) -> TempDir {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(output);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("index.html"), page).unwrap();
    temp
}

fn bootstrap(root: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("spa-bootstrap"));
    cmd.env_clear().arg("--root").arg(root);
    cmd
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

// =============================================================================
// run
// =============================================================================

#[test]
fn run_writes_env_script_and_base() {
    let temp = project("public", PAGE.as_bytes());

    bootstrap(temp.path())
        .env("REACT_APP_API", "https://x")
        .env("PUBLIC_URL", "/app")
        .assert()
        .success();

    insta::assert_snapshot!(
        read(temp.path().join("public/env.js")).trim_end(),
        @r#"window.ENV = {"NODE_ENV":"development","PUBLIC_URL":"/app","REACT_APP_API":"https://x"};"#
    );
    let html = read(temp.path().join("public/index.html"));
    assert_eq!(html.matches("<base").count(), 1, "{html}");
    assert!(html.contains(r#"<base href="/app/">"#), "{html}");
    assert!(html.starts_with("<!DOCTYPE html>"), "{html}");
}

#[test]
fn run_in_production_uses_build_dir() {
    let temp = project("build", PAGE.as_bytes());

    bootstrap(temp.path())
        .env("NODE_ENV", "production")
        .arg("run")
        .assert()
        .success();

    insta::assert_snapshot!(
        read(temp.path().join("build/env.js")).trim_end(),
        @r#"window.ENV = {"NODE_ENV":"production","PUBLIC_URL":"/"};"#
    );
    assert!(read(temp.path().join("build/index.html")).contains(r#"<base href="">"#));
    assert!(!temp.path().join("public").exists());
}

#[test]
fn run_replaces_existing_base_elements() {
    let page = r#"<html><head><base href="/old/"><base href="/older/"></head><body></body></html>"#;
    let temp = project("public", page.as_bytes());

    bootstrap(temp.path())
        .env("PUBLIC_URL", "https://cdn.example.com/app")
        .assert()
        .success();

    let html = read(temp.path().join("public/index.html"));
    assert_eq!(html.matches("<base").count(), 1, "{html}");
    assert!(
        html.contains(r#"<base href="https://cdn.example.com/app/">"#),
        "{html}"
    );
}

#[test]
fn run_puts_base_inside_unclosed_head() {
    let page = r#"<!DOCTYPE html><html><head><base href="/old/"><title>App</title><body><p>hi</p></body></html>"#;
    let temp = project("public", page.as_bytes());

    bootstrap(temp.path())
        .env("PUBLIC_URL", "/new")
        .assert()
        .success();

    let html = read(temp.path().join("public/index.html"));
    assert_eq!(html.matches("<base").count(), 1, "{html}");
    let base = html.find(r#"<base href="/new/">"#).unwrap();
    assert!(base < html.find("<title>").unwrap(), "{html}");
}

#[test]
fn run_twice_is_idempotent() {
    let temp = project("public", PAGE.as_bytes());

    for _ in 0..2 {
        bootstrap(temp.path())
            .env("PUBLIC_URL", "/app")
            .assert()
            .success();
    }

    let html = read(temp.path().join("public/index.html"));
    assert_eq!(html.matches("<base").count(), 1, "{html}");
}

#[test]
fn run_reads_local_env_file_outside_production() {
    let temp = project("public", PAGE.as_bytes());
    fs::write(
        temp.path().join(".env.local"),
        "REACT_APP_FROM_FILE=yes\nREACT_APP_API=file\n",
    )
    .unwrap();

    bootstrap(temp.path())
        .env("REACT_APP_API", "process")
        .assert()
        .success();

    insta::assert_snapshot!(
        read(temp.path().join("public/env.js")).trim_end(),
        @r#"window.ENV = {"NODE_ENV":"development","PUBLIC_URL":"/","REACT_APP_API":"process","REACT_APP_FROM_FILE":"yes"};"#
    );
}

// =============================================================================
// Failure policy
// =============================================================================

#[test]
fn missing_document_fails_but_keeps_env_script() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("public")).unwrap();

    bootstrap(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't be found"));

    assert!(temp.path().join("public/env.js").exists());
}

#[test]
fn missing_output_dir_fails_export() {
    let temp = TempDir::new().unwrap();

    bootstrap(temp.path()).arg("env").assert().failure();
}

#[test]
fn unreadable_document_is_logged_not_fatal() {
    let temp = project("public", b"<html>\xff\xfe</html>");

    bootstrap(temp.path()).assert().success();
    assert!(temp.path().join("public/env.js").exists());
}

#[test]
fn unreadable_document_fails_in_strict_mode() {
    let temp = project("public", b"<html>\xff\xfe</html>");

    bootstrap(temp.path()).arg("--strict").assert().failure();
}

// =============================================================================
// Single phases
// =============================================================================

#[test]
fn env_command_leaves_document_untouched() {
    let temp = project("public", PAGE.as_bytes());

    bootstrap(temp.path()).arg("env").assert().success();

    assert!(temp.path().join("public/env.js").exists());
    assert_eq!(read(temp.path().join("public/index.html")), PAGE);
}

#[test]
fn base_command_writes_no_env_script() {
    let temp = project("public", PAGE.as_bytes());

    bootstrap(temp.path())
        .env("PUBLIC_URL", "/app/")
        .arg("base")
        .assert()
        .success();

    assert!(!temp.path().join("public/env.js").exists());
    assert!(read(temp.path().join("public/index.html")).contains(r#"<base href="/app/">"#));
}

#[test]
fn print_command_writes_nothing() {
    let temp = project("public", PAGE.as_bytes());

    bootstrap(temp.path())
        .env("REACT_APP_QUOTE", "say \"hi\"")
        .args(["-l", "0", "print"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            r#""REACT_APP_QUOTE":"say \"hi\"""#,
        ));

    assert!(!temp.path().join("public/env.js").exists());
}

#[test]
fn print_stdout_holds_only_the_script() {
    let temp = project("public", PAGE.as_bytes());

    bootstrap(temp.path())
        .args(["-l", "5", "print"])
        .assert()
        .success()
        .stdout("window.ENV = {\"NODE_ENV\":\"development\",\"PUBLIC_URL\":\"/\"};\n");
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn root_config_file_changes_prefix() {
    let temp = project("public", PAGE.as_bytes());
    fs::write(
        temp.path().join("spa-bootstrap.toml"),
        "[export]\nprefix = \"VITE_\"\n",
    )
    .unwrap();

    bootstrap(temp.path())
        .env("VITE_API", "v")
        .env("REACT_APP_API", "r")
        .arg("env")
        .assert()
        .success();

    insta::assert_snapshot!(
        read(temp.path().join("public/env.js")).trim_end(),
        @r#"window.ENV = {"NODE_ENV":"development","PUBLIC_URL":"/","VITE_API":"v"};"#
    );
}

#[test]
fn set_option_overrides_output_dir() {
    let temp = project("static", PAGE.as_bytes());

    bootstrap(temp.path())
        .args(["-s", "output.public_dir=static"])
        .assert()
        .success();

    assert!(temp.path().join("static/env.js").exists());
}

#[test]
fn env_var_overrides_global_name() {
    let temp = project("public", PAGE.as_bytes());

    bootstrap(temp.path())
        .env("SPA_BOOTSTRAP__EXPORT__GLOBAL_NAME", "self.CONFIG")
        .arg("env")
        .assert()
        .success();

    assert!(read(temp.path().join("public/env.js")).starts_with("self.CONFIG = {"));
}

#[test]
fn invalid_config_fails_before_writing() {
    let temp = project("public", PAGE.as_bytes());

    bootstrap(temp.path())
        .args(["-s", "output.script=../env.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));

    assert!(!temp.path().join("public/env.js").exists());
}

#[test]
fn version_prints_package_version() {
    Command::new(cargo_bin("spa-bootstrap"))
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
