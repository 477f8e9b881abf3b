use std::fs;

use paper_reader_app::config::Config;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.server.name, "paper-reader");
    assert_eq!(config.server.version, "1.0.0");
    assert_eq!(config.limits.read_max_chars, 15_000);
    assert_eq!(config.limits.abstract_min_chars, 80);
    assert_eq!(config.log_level, "info");
    assert!(config.validate().is_ok());
}

#[test]
fn test_partial_yaml_keeps_defaults() {
    let config_yaml = r#"
limits:
  read_max_chars: 2000
log_level: debug
"#;

    let config: Config = serde_yaml::from_str(config_yaml).unwrap();
    assert_eq!(config.limits.read_max_chars, 2000);
    assert_eq!(config.limits.abstract_min_chars, 80);
    assert_eq!(config.server.name, "paper-reader");
    assert_eq!(config.log_level, "debug");
}

#[test]
fn test_unknown_keys_rejected() {
    let config_yaml = r#"
limits:
  max_pages: 3
"#;
    assert!(serde_yaml::from_str::<Config>(config_yaml).is_err());
}

#[test]
fn test_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paper-reader.yaml");
    fs::write(
        &path,
        "server:\n  name: lab-reader\n  version: 2.0.0\nlimits:\n  snippet_chars: 300\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.server.name, "lab-reader");
    assert_eq!(config.server.version, "2.0.0");
    assert_eq!(config.limits.snippet_chars, 300);
}

#[test]
fn test_empty_file_is_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.yaml");
    fs::write(&path, "\n").unwrap();

    assert_eq!(Config::load(&path).unwrap(), Config::default());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(Config::load(&dir.path().join("absent.yaml")).is_err());
}

#[test]
fn test_load_or_default_without_path() {
    assert_eq!(Config::load_or_default(None).unwrap(), Config::default());
}

#[test]
fn test_zero_limit_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "limits:\n  read_max_chars: 0\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("read_max_chars"));
}

#[test]
fn test_blank_server_name_rejected() {
    let mut config = Config::default();
    config.server.name = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_zero_abstract_threshold_allowed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("any-abstract.yaml");
    fs::write(&path, "limits:\n  abstract_min_chars: 0\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.limits.abstract_min_chars, 0);
}
