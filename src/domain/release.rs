use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Author of a release as reported by GitHub
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReleaseAuthor {
    pub login: String,
}

/// A GitHub release, limited to the fields the Notion page needs
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Release {
    pub tag_name: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub draft: bool,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub author: Option<ReleaseAuthor>,
}

impl Release {
    /// Create a bare release for a tag
    pub fn new(tag_name: impl Into<String>) -> Self {
        Release {
            tag_name: tag_name.into(),
            name: None,
            body: None,
            html_url: String::new(),
            published_at: None,
            draft: false,
            prerelease: false,
            author: None,
        }
    }

    /// Release name, or the tag when the name is missing or blank
    pub fn title(&self) -> &str {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => &self.tag_name,
        }
    }

    /// Release notes, empty when GitHub sent none
    pub fn notes(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

/// Payload of a `release` webhook event (`$GITHUB_EVENT_PATH` in Actions)
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseEvent {
    #[serde(default)]
    pub action: Option<String>,
    pub release: Release,
}
