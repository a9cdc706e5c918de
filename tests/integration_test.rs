// tests/integration_test.rs
use std::process::Command;

fn release_notion() -> Command {
    Command::new(env!("CARGO_BIN_EXE_release-notion"))
}

#[test]
fn test_release_notion_help() {
    let output = release_notion()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("release-notion"));
    assert!(stdout.contains("Record a GitHub release"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_release_notion_version() {
    let output = release_notion()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("release-notion "));
}

#[test]
fn test_missing_repository_exits_non_zero() {
    let output = release_notion()
        .args(["--tag", "v1.0.0", "--config", "tests/fixtures/custom_labels.toml"])
        .env_remove("GITHUB_REPOSITORY")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("GITHUB_REPOSITORY"));
}

#[test]
fn test_missing_notion_credentials_exits_non_zero() {
    let output = release_notion()
        .args(["--tag", "v1.0.0", "--config", "tests/fixtures/custom_labels.toml"])
        .env("GITHUB_REPOSITORY", "octo/app")
        .env_remove("NOTION_TOKEN")
        .env_remove("NOTION_API_KEY")
        .env_remove("NOTION_DATABASE_ID")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("NOTION_TOKEN"));
}
