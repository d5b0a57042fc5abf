// run-badges: Badge calculation bootstrapper
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the environment module.

use super::current_env;
use crate::core::env::container::Env;
use std::collections::BTreeMap;

#[test]
fn test_env_basic_operations() {
    let mut env = Env::new();
    env.set("FOO", "bar");

    assert_eq!(env.get("FOO"), Some("bar"));
    assert_eq!(env.get("NOTEXIST"), None);
    assert_eq!(env.len(), 1);
}

#[test]
#[cfg(windows)]
fn test_env_keys_case_insensitive_on_windows() {
    let mut env = Env::new();
    env.set("Path", "C:\\bin");
    env.set("PATH", "C:\\tools");

    assert_eq!(env.len(), 1);
    assert_eq!(env.get("path"), Some("C:\\tools"));
}

#[test]
#[cfg(not(windows))]
fn test_env_keys_case_sensitive_elsewhere() {
    let mut env = Env::new();
    env.set("foo", "lower");
    env.set("FOO", "upper");

    assert_eq!(env.len(), 2);
    assert_eq!(env.get("foo"), Some("lower"));
    assert_eq!(env.get("FOO"), Some("upper"));
}

#[test]
fn test_env_extend_overrides_existing() {
    let mut env = Env::new();
    env.set("NODE_ENV", "development").set("HOME", "/root");

    env.extend([("NODE_ENV", "production"), ("DB_HOST", "db.internal")]);

    insta::assert_yaml_snapshot!(env.to_map(), @r"
    DB_HOST: db.internal
    HOME: /root
    NODE_ENV: production
    ");
}

#[test]
fn test_env_copy_on_write() {
    let mut env1 = Env::new();
    env1.set("KEY1", "value1");

    let mut env2 = env1.clone();
    env2.set("KEY2", "value2");

    assert_eq!(env1.get("KEY2"), None);
    assert_eq!(env2.get("KEY1"), Some("value1"));
    assert_eq!(env2.get("KEY2"), Some("value2"));
    assert_eq!(env1.len(), 1);
    assert_eq!(env2.len(), 2);
}

#[test]
fn test_current_env() {
    let env = current_env();
    assert!(
        env.get("PATH").is_some() || env.get("Path").is_some(),
        "PATH should exist in current environment"
    );
}

#[test]
fn test_env_from_map_iterates_sorted() {
    let mut map = BTreeMap::new();
    map.insert("ZETA".to_string(), "1".to_string());
    map.insert("ALPHA".to_string(), "2".to_string());

    let env = Env::from_map(map);
    let keys: Vec<_> = env.iter().map(|(k, _)| k).collect();

    assert_eq!(keys, ["ALPHA", "ZETA"]);
    assert_eq!(env.len(), 2);
}
