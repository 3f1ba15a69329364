//! Config loading: TOML, JSON, env var, defaults.

use std::fs;
use std::path::Path;

use ovh_gateway::config::{load_from_path, load_with_env, load_with_fallback};
use ovh_gateway::{CoreError, GatewayConfig};

#[test]
fn toml_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gateway.toml");
    fs::write(
        &path,
        r#"
[discovery]
services = ["orders-service", "payments-service"]

[checker]
enabled = false
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.discovery.services, vec!["orders-service", "payments-service"]);
    assert!(!config.checker.enabled);
}

#[test]
fn json_config_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gateway.json");
    fs::write(&path, r#"{ "discovery": { "services": ["users"] } }"#).unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.discovery.services, vec!["users"]);
    assert!(config.checker.enabled);
}

#[test]
fn empty_toml_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gateway.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(load_from_path(&path).unwrap(), GatewayConfig::default());
}

#[test]
fn invalid_toml_is_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gateway.toml");
    fs::write(&path, "[discovery\nservices = 1").unwrap();

    match load_from_path(&path) {
        Err(CoreError::Config(msg)) => assert!(msg.contains("failed to parse")),
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn invalid_json_is_config_error_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gateway.json");
    fs::write(&path, "{ not json").unwrap();

    match load_from_path(&path) {
        Err(CoreError::Config(msg)) => {
            assert!(msg.contains("failed to parse"));
            assert!(msg.contains(&path.display().to_string()));
        }
        other => panic!("expected Config error, got {other:?}"),
    }
}

#[test]
fn missing_file_is_config_error() {
    let err = load_from_path(Path::new("/definitely/not/here.toml")).unwrap_err();
    assert!(matches!(err, CoreError::Config(_)));
}

#[test]
fn explicit_path_wins_over_env() {
    let dir = tempfile::tempdir().unwrap();
    let explicit = dir.path().join("explicit.toml");
    fs::write(&explicit, "[discovery]\nservices = [\"explicit\"]\n").unwrap();
    let from_env = dir.path().join("env.toml");
    fs::write(&from_env, "[discovery]\nservices = [\"env\"]\n").unwrap();

    let loaded = load_with_env(Some(explicit.as_path()), Some(from_env.display().to_string())).unwrap();
    assert_eq!(loaded.path.as_deref(), Some(explicit.as_path()));
    assert_eq!(loaded.config.discovery.services, vec!["explicit"]);
}

#[test]
fn env_path_used_without_explicit() {
    let dir = tempfile::tempdir().unwrap();
    let from_env = dir.path().join("env.toml");
    fs::write(&from_env, "[discovery]\nservices = [\"env\"]\n").unwrap();

    let loaded = load_with_env(None, Some(from_env.display().to_string())).unwrap();
    assert_eq!(loaded.config.discovery.services, vec!["env"]);
}

#[test]
fn missing_fallback_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let fallback = dir.path().join("config/gateway.toml");

    let loaded = load_with_fallback(None, None, &fallback).unwrap();
    assert_eq!(loaded.path, None);
    assert_eq!(loaded.config, GatewayConfig::default());
}

#[test]
fn empty_env_var_counts_as_unset() {
    let dir = tempfile::tempdir().unwrap();
    let fallback = dir.path().join("gateway.toml");

    let loaded = load_with_fallback(None, Some(String::new()), &fallback).unwrap();
    assert_eq!(loaded.path, None);
    assert_eq!(loaded.config, GatewayConfig::default());
}

#[test]
fn existing_fallback_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let fallback = dir.path().join("gateway.toml");
    fs::write(&fallback, "[discovery]\nservices = [\"fallback\"]\n").unwrap();

    let loaded = load_with_fallback(None, Some(String::new()), &fallback).unwrap();
    assert_eq!(loaded.path.as_deref(), Some(fallback.as_path()));
    assert_eq!(loaded.config.discovery.services, vec!["fallback"]);
}
