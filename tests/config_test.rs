//! Tests for loading the sample configuration file

use fwportal::config::Config;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_sample_config_loads() {
    let config = Config::load(Some(Path::new("config.toml"))).expect("config.toml should load");

    assert!(config.api.base_url.starts_with("http"));
    assert!(config.api.timeout_secs > 0);
    assert_eq!(config.ui.vote_log_page_size, 20);
}

#[test]
fn test_invalid_base_url_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    let content = std::fs::read_to_string("config.toml")
        .unwrap()
        .replace("http://localhost:8000", "ftp://portal.example");
    std::fs::write(&path, content).unwrap();

    assert!(Config::load(Some(&path)).is_err());
}

#[test]
fn test_missing_file_reports_path() {
    let err = Config::load(Some(Path::new("does-not-exist.toml"))).unwrap_err();
    assert!(format!("{err:#}").contains("does-not-exist.toml"));
}
