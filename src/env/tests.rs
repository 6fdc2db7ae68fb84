// spa-bootstrap: Runtime Environment and Base Element Injector
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::{EnvSnapshot, Mode, current_env, dotenv};

#[test]
fn test_snapshot_keeps_insertion_order() {
    let env: EnvSnapshot = [("ZED", "1"), ("ALPHA", "2"), ("MID", "3")]
        .into_iter()
        .collect();
    let names: Vec<_> = env.iter().map(|(k, _)| k).collect();
    assert_eq!(names, ["ZED", "ALPHA", "MID"]);
}

#[test]
fn test_snapshot_set_replaces_in_place() {
    let mut env = EnvSnapshot::new();
    env.set("A", "1").set("B", "2").set("A", "3");

    assert_eq!(env.len(), 2);
    assert_eq!(env.get("A"), Some("3"));
    assert_eq!(env.iter().next(), Some(("A", "3")));
}

#[test]
fn test_snapshot_is_case_sensitive() {
    let env: EnvSnapshot = [("react_app_x", "lower")].into_iter().collect();
    assert_eq!(env.get("REACT_APP_X"), None);
    assert_eq!(env.get("react_app_x"), Some("lower"));
}

#[test]
fn test_merge_missing_does_not_override() {
    let mut env: EnvSnapshot = [("REACT_APP_API", "process")].into_iter().collect();
    let local: EnvSnapshot = [("REACT_APP_API", "file"), ("REACT_APP_KEY", "k")]
        .into_iter()
        .collect();

    let added = env.merge_missing(local);

    assert_eq!(added, 1);
    assert_eq!(env.get("REACT_APP_API"), Some("process"));
    assert_eq!(env.get("REACT_APP_KEY"), Some("k"));
}

#[test]
fn test_current_env_captures_process() {
    let env = current_env();
    if let Ok(path) = std::env::var("PATH") {
        assert_eq!(env.get("PATH"), Some(path.as_str()));
    }
}

#[test]
fn test_mode_resolution() {
    let cases = [
        (None, Mode::Development),
        (Some(""), Mode::Development),
        (Some("development"), Mode::Development),
        (Some("production"), Mode::Production),
        (Some("test"), Mode::Other("test".to_string())),
    ];
    for (value, expected) in cases {
        let mut env = EnvSnapshot::new();
        if let Some(value) = value {
            env.set("NODE_ENV", value);
        }
        assert_eq!(Mode::from_snapshot(&env), expected, "NODE_ENV={value:?}");
    }
    assert!(Mode::Production.is_production());
    assert!(!Mode::Other("staging".into()).is_production());
    assert_eq!(Mode::Other("staging".into()).to_string(), "staging");
}

#[test]
fn test_dotenv_parse() {
    let content = r#"
# local overrides
REACT_APP_API=https://localhost:8080
export REACT_APP_NAME="My App"
REACT_APP_SINGLE='single # not a comment'
REACT_APP_TRAILING=value # comment
REACT_APP_HASH=a#b
not a pair
=novalue
"#;
    let env = dotenv::parse(content);
    let pairs: Vec<_> = env.iter().collect();
    assert_eq!(
        pairs,
        [
            ("REACT_APP_API", "https://localhost:8080"),
            ("REACT_APP_NAME", "My App"),
            ("REACT_APP_SINGLE", "single # not a comment"),
            ("REACT_APP_TRAILING", "value"),
            ("REACT_APP_HASH", "a#b"),
        ]
    );
}

#[test]
fn test_dotenv_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let loaded = dotenv::load(&dir.path().join(".env.local")).unwrap();
    assert!(loaded.is_none());
}

#[test]
fn test_dotenv_merge_into() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".env.local");
    std::fs::write(&path, "REACT_APP_A=file\nREACT_APP_B=file\n").unwrap();

    let mut env: EnvSnapshot = [("REACT_APP_A", "process")].into_iter().collect();
    dotenv::merge_into(&mut env, &path);

    assert_eq!(env.get("REACT_APP_A"), Some("process"));
    assert_eq!(env.get("REACT_APP_B"), Some("file"));
}
