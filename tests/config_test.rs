// tests/config_test.rs
use release_notion::config::{load_config, Config, Settings, SettingsOverrides};
use release_notion::domain::ReleaseType;
use serial_test::serial;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

const ENV_KEYS: &[&str] = &[
    "GITHUB_REPOSITORY",
    "RELEASE_TAG",
    "GITHUB_REF_NAME",
    "GITHUB_TOKEN",
    "NOTION_TOKEN",
    "NOTION_API_KEY",
    "NOTION_DATABASE_ID",
    "GITHUB_EVENT_PATH",
];

fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.labels.major, "Major");
    assert_eq!(config.labels.unknown, "Unknown");
    assert_eq!(config.notion.api_version, "2022-06-28");
    assert_eq!(config.notion.properties.title, "Name");
    assert_eq!(config.notion.properties.category, "Type");
    assert_eq!(config.github.api_url, "https://api.github.com");
    assert_eq!(config.github.per_page, 30);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[labels]
major = "Breaking"

[notion]
api_version = "2025-09-03"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.labels.major, "Breaking");
    // Unspecified keys keep their defaults
    assert_eq!(config.labels.minor, "Minor");
    assert_eq!(config.notion.api_version, "2025-09-03");
    assert_eq!(config.notion.base_url, "https://api.notion.com/v1");
    assert_eq!(config.notion.properties.url, "URL");
}

#[test]
fn test_load_fixture_with_localized_labels() {
    let config = load_config(Some("tests/fixtures/custom_labels.toml"))
        .expect("Failed to load test config");
    assert_eq!(config.labels.label_for(ReleaseType::Major), "大版本");
    assert_eq!(config.labels.label_for(ReleaseType::Patch), "问题修复");
    assert_eq!(config.labels.label_for(ReleaseType::Unknown), "Unknown");
    assert_eq!(config.notion.properties.title, "Release");
    assert_eq!(config.notion.properties.category, "Category");
    assert_eq!(config.github.page_size(), 100);
}

#[test]
fn test_load_invalid_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[labels\nmajor = ").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error"));
}

#[test]
fn test_load_missing_file() {
    let err = load_config(Some("tests/fixtures/does_not_exist.toml")).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}

#[test]
#[serial]
fn test_settings_from_process_env() {
    clear_env();
    std::env::set_var("GITHUB_REPOSITORY", "octo/app");
    std::env::set_var("GITHUB_REF_NAME", "v1.4.0");
    std::env::set_var("NOTION_TOKEN", "secret_abc");
    std::env::set_var("NOTION_DATABASE_ID", "db-1");

    let settings = Settings::from_env(SettingsOverrides::default()).unwrap();
    assert_eq!(settings.repository, "octo/app");
    assert_eq!(settings.tag, "v1.4.0");
    assert_eq!(settings.github_token, None);
    assert_eq!(settings.notion_credentials().unwrap(), ("secret_abc", "db-1"));

    clear_env();
}

#[test]
#[serial]
fn test_settings_tag_from_event_payload() {
    clear_env();
    std::env::set_var("GITHUB_REPOSITORY", "octo/app");
    std::env::set_var("GITHUB_EVENT_PATH", "tests/fixtures/release_event.json");

    let settings = Settings::from_env(SettingsOverrides::default()).unwrap();
    assert_eq!(settings.tag, "v2.0.0");
    assert_eq!(
        settings.event_path,
        Some(PathBuf::from("tests/fixtures/release_event.json"))
    );

    clear_env();
}

#[test]
#[serial]
fn test_settings_missing_tag() {
    clear_env();
    std::env::set_var("GITHUB_REPOSITORY", "octo/app");

    let err = Settings::from_env(SettingsOverrides::default()).unwrap_err();
    assert!(err.to_string().contains("release tag is not set"));

    clear_env();
}
