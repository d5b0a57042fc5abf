// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Bootstrapper, ConfigMap, RunReport};
use crate::config::Config;
use crate::error::FetchError;
use std::path::PathBuf;

fn report(launched: bool, exit_code: Option<i32>) -> RunReport {
    RunReport {
        applied: 0,
        launched,
        exit_code,
    }
}

#[test]
fn test_config_map_parse_strings() {
    let map = ConfigMap::parse(br#"{"FOO":"bar","BAZ":"1"}"#).unwrap();

    assert_eq!(map.len(), 2);
    assert_eq!(map.get("FOO"), Some("bar"));
    assert_eq!(map.get("BAZ"), Some("1"));
    assert_eq!(map.keys().collect::<Vec<_>>(), ["BAZ", "FOO"]);
}

#[test]
fn test_config_map_coerces_values_to_text() {
    let map = ConfigMap::parse(
        br#"{
        "PORT": 3000,
        "RATIO": 2.5,
        "DEBUG": true,
        "EMPTY": null,
        "HOSTS": ["a", "b"],
        "NESTED": {"k": 1}
    }"#,
    )
    .unwrap();

    let lines: Vec<_> = map.iter().map(|(k, v)| format!("{k}={v}")).collect();
    insta::assert_snapshot!(lines.join("\n"), @r#"
    DEBUG=true
    EMPTY=
    HOSTS=["a","b"]
    NESTED={"k":1}
    PORT=3000
    RATIO=2.5
    "#);
}

#[test]
fn test_config_map_empty_object() {
    let map = ConfigMap::parse(b"{}").unwrap();
    assert!(map.is_empty());
}

#[test]
fn test_config_map_surrounding_whitespace() {
    let map = ConfigMap::parse(b"\n  {\"A\": \"b\"}\n").unwrap();
    assert_eq!(map.get("A"), Some("b"));
}

#[test]
fn test_config_map_rejects_invalid_json() {
    for raw in ["not-json", "", "{\"FOO\":"] {
        let err = ConfigMap::parse(raw.as_bytes()).unwrap_err();
        assert!(
            matches!(err, FetchError::MalformedConfig { .. }),
            "{raw:?} should be malformed, got {err:?}"
        );
    }
}

#[test]
fn test_config_map_rejects_invalid_utf8() {
    let err = ConfigMap::parse(b"{\"SECRET\":\"a\xffb\"}").unwrap_err();
    assert!(
        matches!(err, FetchError::MalformedConfig { .. }),
        "invalid UTF-8 must not be rewritten, got {err:?}"
    );

    let err = ConfigMap::parse(b"{\"\xfe\":\"x\"}").unwrap_err();
    assert!(matches!(err, FetchError::MalformedConfig { .. }));
}

#[test]
fn test_config_map_rejects_non_objects() {
    let found: Vec<_> = ["[]", "\"text\"", "42", "null", "true"]
        .into_iter()
        .map(|raw| match ConfigMap::parse(raw.as_bytes()) {
            Err(FetchError::NotAnObject { found }) => found,
            other => panic!("{raw} should not be accepted: {other:?}"),
        })
        .collect();

    assert_eq!(found, ["array", "string", "number", "null", "boolean"]);
}

#[test]
fn test_config_map_rejects_unusable_entries() {
    let err = ConfigMap::parse(br#"{"A=B":"x"}"#).unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"malformed configuration: invalid variable name 'A=B' (contains '=')");

    let err = ConfigMap::parse(br#"{"":"x"}"#).unwrap_err();
    assert!(matches!(err, FetchError::InvalidKey { reason: "empty name", .. }));

    let err = ConfigMap::parse(br#"{"KEY":"a\u0000b"}"#).unwrap_err();
    assert!(matches!(err, FetchError::InvalidValue { ref key } if key == "KEY"));
}

#[test]
fn test_child_env_overlays_inherited() {
    let bootstrapper = Bootstrapper::new(Config::default());
    let map = ConfigMap::parse(br#"{"RUN_BADGES_UNIT_OVERLAY":"on"}"#).unwrap();

    let env = bootstrapper.child_env(&map);

    assert_eq!(env.get("RUN_BADGES_UNIT_OVERLAY"), Some("on"));
    assert!(env.get("PATH").is_some() || env.get("Path").is_some());
    assert!(std::env::var_os("RUN_BADGES_UNIT_OVERLAY").is_none());
}

#[test]
fn test_child_env_config_wins() {
    let bootstrapper = Bootstrapper::new(Config::default());
    let map = ConfigMap::parse(br#"{"PATH":"/opt/custom/bin"}"#).unwrap();

    let env = bootstrapper.child_env(&map);
    assert_eq!(env.get("PATH"), Some("/opt/custom/bin"));
}

#[test]
fn test_downstream_command_single_argument() {
    let mut config = Config::default();
    config.downstream.runtime = PathBuf::from("cargo");
    config.downstream.script = PathBuf::from("/srv/app/scripts/calculate-badges.js");
    let bootstrapper = Bootstrapper::new(config);

    let env = bootstrapper.child_env(&ConfigMap::default());
    let command = bootstrapper.downstream_command(env).unwrap();

    assert_eq!(command.args_slice(), ["/srv/app/scripts/calculate-badges.js"]);
}

#[test]
fn test_downstream_command_missing_runtime() {
    let mut config = Config::default();
    config.downstream.runtime = PathBuf::from("nonexistent_runtime_12345");
    let bootstrapper = Bootstrapper::new(config);

    let err = bootstrapper
        .downstream_command(bootstrapper.child_env(&ConfigMap::default()))
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"executable not found: 'nonexistent_runtime_12345' (not in PATH)");
}

#[tokio::test]
async fn test_fetch_missing_tool() {
    let mut config = Config::default();
    config.fetch.program = PathBuf::from("/nonexistent/bin/get-config");
    let bootstrapper = Bootstrapper::new(config);

    let err = bootstrapper.fetch_config().await.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<FetchError>(),
        Some(FetchError::ToolNotFound { .. })
    ));
}

#[test]
fn test_exit_status_not_propagated_by_default() {
    assert_eq!(report(true, Some(0)).exit_status(false), 0);
    assert_eq!(report(true, Some(3)).exit_status(false), 0);
    assert_eq!(report(true, None).exit_status(false), 0);
}

#[test]
fn test_exit_status_propagated() {
    assert_eq!(report(true, Some(0)).exit_status(true), 0);
    assert_eq!(report(true, Some(3)).exit_status(true), 3);
    assert_eq!(report(true, None).exit_status(true), 1);
    assert_eq!(report(true, Some(-1_073_741_510)).exit_status(true), 1);
    assert_eq!(report(false, None).exit_status(true), 0);
}
