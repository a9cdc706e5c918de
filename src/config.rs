use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ReleaseType;
use crate::error::{ReleaseNotionError, Result};

/// Name of the configuration file searched in the working and user config directories
pub const CONFIG_FILE_NAME: &str = "release-notion.toml";

/// Represents the file configuration for release-notion.
///
/// Contains display labels, Notion page layout, and GitHub API settings.
/// Secrets never live here; they come from the environment via [`Settings`].
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub labels: LabelsConfig,

    #[serde(default)]
    pub notion: NotionConfig,

    #[serde(default)]
    pub github: GitHubConfig,
}

/// Display strings written to the Notion category column for each release type.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct LabelsConfig {
    #[serde(default = "default_major_label")]
    pub major: String,

    #[serde(default = "default_minor_label")]
    pub minor: String,

    #[serde(default = "default_patch_label")]
    pub patch: String,

    #[serde(default = "default_unknown_label")]
    pub unknown: String,
}

fn default_major_label() -> String {
    "Major".to_string()
}

fn default_minor_label() -> String {
    "Minor".to_string()
}

fn default_patch_label() -> String {
    "Patch".to_string()
}

fn default_unknown_label() -> String {
    "Unknown".to_string()
}

impl Default for LabelsConfig {
    fn default() -> Self {
        LabelsConfig {
            major: default_major_label(),
            minor: default_minor_label(),
            patch: default_patch_label(),
            unknown: default_unknown_label(),
        }
    }
}

impl LabelsConfig {
    /// Label configured for a release type
    pub fn label_for(&self, release_type: ReleaseType) -> &str {
        match release_type {
            ReleaseType::Major => &self.major,
            ReleaseType::Minor => &self.minor,
            ReleaseType::Patch => &self.patch,
            ReleaseType::Unknown => &self.unknown,
        }
    }
}

/// Notion API endpoint and database column names.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotionConfig {
    #[serde(default = "default_notion_base_url")]
    pub base_url: String,

    #[serde(default = "default_notion_api_version")]
    pub api_version: String,

    #[serde(default)]
    pub properties: NotionProperties,
}

fn default_notion_base_url() -> String {
    "https://api.notion.com/v1".to_string()
}

fn default_notion_api_version() -> String {
    "2022-06-28".to_string()
}

impl Default for NotionConfig {
    fn default() -> Self {
        NotionConfig {
            base_url: default_notion_base_url(),
            api_version: default_notion_api_version(),
            properties: NotionProperties::default(),
        }
    }
}

/// Column names of the target Notion database.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotionProperties {
    #[serde(default = "default_title_property")]
    pub title: String,

    #[serde(default = "default_category_property")]
    pub category: String,

    #[serde(default = "default_version_property")]
    pub version: String,

    #[serde(default = "default_date_property")]
    pub date: String,

    #[serde(default = "default_url_property")]
    pub url: String,
}

fn default_title_property() -> String {
    "Name".to_string()
}

fn default_category_property() -> String {
    "Type".to_string()
}

fn default_version_property() -> String {
    "Version".to_string()
}

fn default_date_property() -> String {
    "Date".to_string()
}

fn default_url_property() -> String {
    "URL".to_string()
}

impl Default for NotionProperties {
    fn default() -> Self {
        NotionProperties {
            title: default_title_property(),
            category: default_category_property(),
            version: default_version_property(),
            date: default_date_property(),
            url: default_url_property(),
        }
    }
}

/// GitHub REST API settings.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct GitHubConfig {
    #[serde(default = "default_github_api_url")]
    pub api_url: String,

    /// Size of the single release page fetched for history lookup (1..=100)
    #[serde(default = "default_per_page")]
    pub per_page: u8,
}

fn default_github_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> u8 {
    30
}

impl Default for GitHubConfig {
    fn default() -> Self {
        GitHubConfig {
            api_url: default_github_api_url(),
            per_page: default_per_page(),
        }
    }
}

impl GitHubConfig {
    /// Page size clamped to what the GitHub API accepts
    pub fn page_size(&self) -> u8 {
        self.per_page.clamp(1, 100)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release-notion.toml` in current directory
/// 3. `release-notion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If the file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(PathBuf::from(path)),
        None => find_config_file(),
    };

    let Some(path) = path else {
        tracing::debug!("no config file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading config file");
    let config_str = fs::read_to_string(&path)?;
    toml::from_str(&config_str).map_err(|e| {
        ReleaseNotionError::config(format!("cannot parse '{}': {}", path.display(), e))
    })
}

fn find_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.exists())
}

/// Run settings resolved from the environment once at startup.
///
/// Core logic never reads the environment; it receives these values
/// explicitly.
#[derive(Clone, PartialEq)]
pub struct Settings {
    /// `owner/name` of the repository the release belongs to
    pub repository: String,
    /// Tag of the release being recorded
    pub tag: String,
    pub github_token: Option<String>,
    pub notion_token: Option<String>,
    pub notion_database_id: Option<String>,
    /// Webhook payload holding the release, when running inside Actions
    pub event_path: Option<PathBuf>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("repository", &self.repository)
            .field("tag", &self.tag)
            .field("github_token", &self.github_token.as_ref().map(|_| "***"))
            .field("notion_token", &self.notion_token.as_ref().map(|_| "***"))
            .field("notion_database_id", &self.notion_database_id)
            .field("event_path", &self.event_path)
            .finish()
    }
}

/// Values supplied on the command line that take precedence over the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub tag: Option<String>,
    pub event_path: Option<PathBuf>,
}

impl Settings {
    /// Resolve settings from the process environment
    pub fn from_env(overrides: SettingsOverrides) -> Result<Self> {
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary variable lookup.
    ///
    /// Empty values count as unset. When no tag is given on the command line
    /// or in `RELEASE_TAG`/`GITHUB_REF_NAME`, the tag of the release in the
    /// event payload is used.
    pub fn resolve<F>(overrides: SettingsOverrides, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let repository = var("GITHUB_REPOSITORY")
            .ok_or_else(|| ReleaseNotionError::config("GITHUB_REPOSITORY is not set"))?;
        if !is_repository_slug(&repository) {
            return Err(ReleaseNotionError::config(format!(
                "GITHUB_REPOSITORY must look like 'owner/name', got '{}'",
                repository
            )));
        }

        let event_path = overrides
            .event_path
            .or_else(|| var("GITHUB_EVENT_PATH").map(PathBuf::from));

        let tag = match overrides
            .tag
            .or_else(|| var("RELEASE_TAG"))
            .or_else(|| var("GITHUB_REF_NAME"))
        {
            Some(tag) => tag,
            None => event_path
                .as_deref()
                .and_then(tag_from_event)
                .ok_or_else(|| {
                    ReleaseNotionError::config(
                        "release tag is not set (use --tag, RELEASE_TAG or GITHUB_REF_NAME)",
                    )
                })?,
        };

        Ok(Settings {
            repository,
            tag,
            github_token: var("GITHUB_TOKEN"),
            notion_token: var("NOTION_TOKEN").or_else(|| var("NOTION_API_KEY")),
            notion_database_id: var("NOTION_DATABASE_ID"),
            event_path,
        })
    }

    /// Notion token and database id, required before any page is written
    pub fn notion_credentials(&self) -> Result<(&str, &str)> {
        let token = self.notion_token.as_deref().ok_or_else(|| {
            ReleaseNotionError::config("NOTION_TOKEN (or NOTION_API_KEY) is not set")
        })?;
        let database_id = self
            .notion_database_id
            .as_deref()
            .ok_or_else(|| ReleaseNotionError::config("NOTION_DATABASE_ID is not set"))?;
        Ok((token, database_id))
    }
}

fn is_repository_slug(value: &str) -> bool {
    let mut parts = value.split('/');
    matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
    )
}

fn tag_from_event(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let event: crate::domain::ReleaseEvent = serde_json::from_str(&content).ok()?;
    Some(event.release.tag_name)
}
