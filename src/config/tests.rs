use super::*;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| map.get(name).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.scaffold.target, PathBuf::from("theme"));
    assert_eq!(config.scaffold.branch, "main");
    assert_eq!(config.scaffold.host, "github.com");
    assert_eq!(
        config.scaffold.assets,
        vec!["logo.png", "hero.jpg", "favicon.png"]
    );
    assert_eq!(config.redact.placeholder, "***REMOVED***");
    assert!(config.redact.keep_workspace);
}

#[test]
fn test_config_parse_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("themeops.toml");
    fs::write(
        &path,
        r#"
[scaffold]
target = "build/theme"
owner = "acme"
repo = "storefront"
assets = ["logo.svg"]

[redact]
keep_workspace = false
"#,
    )
    .unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert!(warnings.is_empty());
    assert_eq!(config.scaffold.target, PathBuf::from("build/theme"));
    assert_eq!(config.scaffold.owner, "acme");
    assert_eq!(config.scaffold.repo, "storefront");
    assert_eq!(config.scaffold.assets, vec!["logo.svg"]);
    // unspecified keys keep their defaults
    assert_eq!(config.scaffold.branch, "main");
    assert!(!config.redact.keep_workspace);
    assert_eq!(config.redact.placeholder, "***REMOVED***");
}

#[test]
fn test_config_load_with_warnings_reports_unknown_key_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("themeops.toml");
    fs::write(&path, "[scaffold]\nbrnch = \"dev\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.scaffold.branch, "main");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "brnch");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion, Some("branch".to_string()));
}

#[test]
fn test_token_in_config_is_ignored() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("themeops.toml");
    fs::write(&path, "[scaffold]\ntoken = \"ghp_not_read\"\n").unwrap();

    let (_config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "token");
}

#[test]
fn test_invalid_toml_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("themeops.toml");
    fs::write(&path, "[scaffold\n").unwrap();

    let err = Config::load_with_warnings(&path).unwrap_err();
    assert_eq!(err.code(), "invalid_config");
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let dir = tempdir().unwrap();
    let err = Config::resolve(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert_eq!(err.code(), "invalid_config");
}

#[test]
fn test_env_overrides() {
    let mut sink = Vec::new();
    let config = apply_env_overrides(
        Config::default(),
        env(&[
            ("THEMEOPS_TARGET", "out/theme"),
            ("THEMEOPS_ASSETS_SOURCE", "media"),
            ("THEMEOPS_OWNER", "acme"),
            ("THEMEOPS_REPO", "storefront"),
            ("THEMEOPS_BRANCH", "release"),
            ("THEMEOPS_KEEP_WORKSPACE", "0"),
        ]),
        &mut sink,
    );

    assert_eq!(config.scaffold.target, PathBuf::from("out/theme"));
    assert_eq!(config.scaffold.assets_source, PathBuf::from("media"));
    assert_eq!(config.scaffold.owner, "acme");
    assert_eq!(config.scaffold.repo, "storefront");
    assert_eq!(config.scaffold.branch, "release");
    assert!(!config.redact.keep_workspace);
    assert!(sink.is_empty());
}

#[test]
fn test_blank_env_values_are_ignored() {
    let mut sink = Vec::new();
    let config = apply_env_overrides(
        Config::default(),
        env(&[("THEMEOPS_BRANCH", "   "), ("THEMEOPS_OWNER", "")]),
        &mut sink,
    );
    assert_eq!(config.scaffold.branch, "main");
    assert_eq!(config.scaffold.owner, "");
}

#[test]
fn test_invalid_keep_workspace_warns_and_keeps_value() {
    let mut sink = Vec::new();
    let config = apply_env_overrides(
        Config::default(),
        env(&[("THEMEOPS_KEEP_WORKSPACE", "flase")]),
        &mut sink,
    );

    assert!(config.redact.keep_workspace);
    let msg = String::from_utf8(sink).unwrap();
    assert!(msg.contains("Did you mean 'false'?"), "{}", msg);
}

#[test]
fn test_known_key_in_wrong_table_gets_no_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("themeops.toml");
    fs::write(&path, "[scaffold]\nplaceholder = \"[x]\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.redact.placeholder, "***REMOVED***");
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "placeholder");
    assert_eq!(warnings[0].suggestion, None);
}
