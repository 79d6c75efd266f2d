//! Configuration resolution tests
//!
//! Serialized because they manipulate process environment variables.

use serial_test::serial;
use songshelf_common::config::{
    resolve_api_base_url, resolve_root_folder, TomlConfig, API_URL_ENV, DEFAULT_API_BASE_URL,
    ROOT_FOLDER_ENV,
};
use std::path::PathBuf;

#[test]
#[serial]
fn test_root_folder_cli_beats_env() {
    std::env::set_var(ROOT_FOLDER_ENV, "/tmp/from-env");

    let resolved = resolve_root_folder(Some("/tmp/from-cli"), &TomlConfig::default());
    assert_eq!(resolved, PathBuf::from("/tmp/from-cli"));

    std::env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_root_folder_env_beats_toml() {
    std::env::set_var(ROOT_FOLDER_ENV, "/tmp/from-env");

    let config = TomlConfig {
        root_folder: Some("/tmp/from-toml".to_string()),
        ..Default::default()
    };
    let resolved = resolve_root_folder(None, &config);
    assert_eq!(resolved, PathBuf::from("/tmp/from-env"));

    std::env::remove_var(ROOT_FOLDER_ENV);
}

#[test]
#[serial]
fn test_root_folder_toml_beats_default() {
    std::env::remove_var(ROOT_FOLDER_ENV);

    let config = TomlConfig {
        root_folder: Some("/tmp/from-toml".to_string()),
        ..Default::default()
    };
    let resolved = resolve_root_folder(None, &config);
    assert_eq!(resolved, PathBuf::from("/tmp/from-toml"));
}

#[test]
#[serial]
fn test_root_folder_compiled_default() {
    std::env::remove_var(ROOT_FOLDER_ENV);

    let resolved = resolve_root_folder(None, &TomlConfig::default());
    // Exact path is OS-dependent; the folder name is not
    assert!(resolved.to_string_lossy().contains("songshelf"));
}

#[test]
#[serial]
fn test_api_base_url_default() {
    std::env::remove_var(API_URL_ENV);

    let resolved = resolve_api_base_url(None, &TomlConfig::default());
    assert_eq!(resolved, DEFAULT_API_BASE_URL);
}

#[test]
#[serial]
fn test_api_base_url_env_beats_toml() {
    std::env::set_var(API_URL_ENV, "https://api.example.com:9443");

    let config = TomlConfig {
        api_base_url: Some("http://from-toml:1234".to_string()),
        ..Default::default()
    };
    assert_eq!(
        resolve_api_base_url(None, &config),
        "https://api.example.com:9443"
    );

    std::env::remove_var(API_URL_ENV);
}

#[test]
#[serial]
fn test_api_base_url_strips_trailing_slash() {
    std::env::remove_var(API_URL_ENV);

    let resolved = resolve_api_base_url(Some("http://127.0.0.1:5741/"), &TomlConfig::default());
    assert_eq!(resolved, "http://127.0.0.1:5741");
}

#[test]
fn test_toml_config_parses() {
    let config: TomlConfig = toml::from_str(
        r#"
        root_folder = "/srv/songshelf"
        api_base_url = "http://127.0.0.1:5741"
        listen_port = 5740
        "#,
    )
    .unwrap();

    assert_eq!(config.root_folder.as_deref(), Some("/srv/songshelf"));
    assert_eq!(config.api_base_url.as_deref(), Some("http://127.0.0.1:5741"));
    assert_eq!(config.listen_port, Some(5740));
}
