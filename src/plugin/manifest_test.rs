use super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_manifest(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

// =========================================================================
// ManifestFormat::detect tests
// =========================================================================

#[test]
fn test_detect_json() {
    assert_eq!(
        ManifestFormat::detect(Path::new("plugins.json")).unwrap(),
        ManifestFormat::Json
    );
}

#[test]
fn test_detect_toml() {
    assert_eq!(
        ManifestFormat::detect(Path::new("plugins.toml")).unwrap(),
        ManifestFormat::Toml
    );
}

#[test]
fn test_detect_unsupported_extension() {
    let result = ManifestFormat::detect(Path::new("plugins.yaml"));
    match result {
        Err(NurayaError::UnsupportedFormat { path, reason }) => {
            assert_eq!(path, PathBuf::from("plugins.yaml"));
            assert!(reason.contains(".yaml"));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_detect_missing_extension() {
    let result = ManifestFormat::detect(Path::new("plugins"));
    assert!(matches!(result, Err(NurayaError::UnsupportedFormat { .. })));
}

// =========================================================================
// parse_json tests
// =========================================================================

#[test]
fn test_parse_plugins_key_in_order() {
    let json = r#"{"plugins": [
        {"name": "grafana-clock-panel", "version": "2.1.5"},
        {"name": "foo", "version": "1.2.3"},
        {"name": "bar", "version": "0.1.0"}
    ]}"#;
    let plugins = parse_json(json, Path::new("m.json")).unwrap();

    assert_eq!(plugins.len(), 3);
    assert_eq!(plugins[0], Plugin::new("grafana-clock-panel", "2.1.5"));
    assert_eq!(plugins[1], Plugin::new("foo", "1.2.3"));
    assert_eq!(plugins[2], Plugin::new("bar", "0.1.0"));
}

#[test]
fn test_parse_versions_key() {
    let json = r#"{"versions": [{"name": "foo", "version": "1.2.3"}]}"#;
    let plugins = parse_json(json, Path::new("m.json")).unwrap();
    assert_eq!(plugins, vec![Plugin::new("foo", "1.2.3")]);
}

#[test]
fn test_parse_plugins_key_wins_over_versions() {
    let json = r#"{
        "plugins": [{"name": "foo", "version": "1.0.0"}],
        "versions": [{"name": "bar", "version": "2.0.0"}]
    }"#;
    let plugins = parse_json(json, Path::new("m.json")).unwrap();
    assert_eq!(plugins, vec![Plugin::new("foo", "1.0.0")]);
}

#[test]
fn test_parse_empty_plugins() {
    let plugins = parse_json(r#"{"plugins": []}"#, Path::new("m.json")).unwrap();
    assert!(plugins.is_empty());
}

#[test]
fn test_parse_missing_key_is_unsupported() {
    let result = parse_json(r#"{"dependencies": []}"#, Path::new("m.json"));
    assert!(matches!(result, Err(NurayaError::UnsupportedFormat { .. })));
}

#[test]
fn test_parse_top_level_array_is_unsupported() {
    let result = parse_json(
        r#"[{"name": "foo", "version": "1.2.3"}]"#,
        Path::new("m.json"),
    );
    assert!(matches!(result, Err(NurayaError::UnsupportedFormat { .. })));
}

#[test]
fn test_parse_non_array_plugins_is_unsupported() {
    let result = parse_json(r#"{"plugins": {"foo": "1.2.3"}}"#, Path::new("m.json"));
    assert!(matches!(result, Err(NurayaError::UnsupportedFormat { .. })));
}

#[test]
fn test_parse_plugins_ignores_malformed_versions() {
    let json = r#"{
        "plugins": [{"name": "foo", "version": "1.2.3"}],
        "versions": "legacy"
    }"#;
    let plugins = parse_json(json, Path::new("m.json")).unwrap();
    assert_eq!(plugins, vec![Plugin::new("foo", "1.2.3")]);
}

#[test]
fn test_parse_falls_back_to_versions_when_plugins_not_array() {
    let json = r#"{
        "plugins": "see versions",
        "versions": [{"name": "bar", "version": "2.0.0"}]
    }"#;
    let plugins = parse_json(json, Path::new("m.json")).unwrap();
    assert_eq!(plugins, vec![Plugin::new("bar", "2.0.0")]);
}

#[test]
fn test_parse_missing_version_is_invalid() {
    let result = parse_json(r#"{"plugins": [{"name": "foo"}]}"#, Path::new("m.json"));
    assert!(matches!(result, Err(NurayaError::InvalidManifest(_))));
}

#[test]
fn test_parse_invalid_json() {
    let result = parse_json("{plugins: ", Path::new("m.json"));
    assert!(matches!(result, Err(NurayaError::InvalidManifest(_))));
}

// =========================================================================
// load_manifest tests
// =========================================================================

#[test]
fn test_load_manifest_json() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(
        &temp,
        "plugins.json",
        r#"{"plugins":[{"name":"foo","version":"1.2.3"}]}"#,
    );

    let plugins = load_manifest(&path).unwrap();
    assert_eq!(plugins, vec![Plugin::new("foo", "1.2.3")]);
}

#[test]
fn test_load_manifest_toml_not_implemented() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(&temp, "plugins.toml", "[[plugins]]\nname = \"foo\"\n");

    let result = load_manifest(&path);
    assert!(matches!(result, Err(NurayaError::NotImplemented(_))));
}

#[test]
fn test_load_manifest_unsupported_before_read() {
    // 存在しないファイルでも拡張子エラーが先に返る
    let result = load_manifest(Path::new("/nonexistent/plugins.yaml"));
    assert!(matches!(result, Err(NurayaError::UnsupportedFormat { .. })));
}

#[test]
fn test_load_manifest_missing_file() {
    let result = load_manifest(Path::new("/nonexistent/plugins.json"));
    assert!(matches!(result, Err(NurayaError::Io(_))));
}
