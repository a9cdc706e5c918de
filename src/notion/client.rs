use reqwest::blocking::Client;
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::config::{NotionConfig, NotionProperties};
use crate::error::{ReleaseNotionError, Result};
use crate::notion::{PageSink, ReleasePage};

/// Notion API client writing pages into one database
pub struct NotionClient {
    client: Client,
    base_url: String,
    api_version: String,
    token: String,
    database_id: String,
    properties: NotionProperties,
}

#[derive(Deserialize)]
struct CreatedPage {
    id: String,
}

/// Error body returned by the Notion API
#[derive(Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    message: String,
}

/// Show only the first and last four characters of an id.
///
/// Ids of eight characters or fewer are hidden entirely.
pub fn mask_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.is_empty() {
        return "not set".to_string();
    }
    if chars.len() <= 8 {
        return "****".to_string();
    }

    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}...{}", head, tail)
}

/// Build the error for a failed page creation from its status and body
fn page_error(status: StatusCode, body: &str, database_id: &str) -> ReleaseNotionError {
    match serde_json::from_str::<ApiError>(body) {
        Ok(api) if api.code == "object_not_found" => ReleaseNotionError::notion(format!(
            "database {} not found ({}). Check that the database id is correct, \
             that the database still exists, and that it is shared with your integration \
             (open the database, '...' menu, Connections, add the integration)",
            mask_id(database_id),
            api.message
        )),
        Ok(api) => ReleaseNotionError::notion(format!(
            "page creation returned {} ({}): {}",
            status, api.code, api.message
        )),
        Err(_) => ReleaseNotionError::notion(format!(
            "page creation returned {}: {}",
            status,
            body.trim()
        )),
    }
}

impl NotionClient {
    /// Create a client for the database `database_id`
    pub fn new(
        config: &NotionConfig,
        token: impl Into<String>,
        database_id: impl Into<String>,
    ) -> Self {
        NotionClient {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            token: token.into(),
            database_id: database_id.into(),
            properties: config.properties.clone(),
        }
    }

    fn pages_url(&self) -> String {
        format!("{}/pages", self.base_url)
    }
}

impl PageSink for NotionClient {
    fn create_page(&self, page: &ReleasePage) -> Result<String> {
        let url = self.pages_url();
        let request = page.to_request(&self.database_id, &self.properties);
        debug!(%url, title = %page.title, "creating Notion page");

        let response = self
            .client
            .post(&url)
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header("Notion-Version", self.api_version.as_str())
            .json(&request)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(page_error(status, &body, &self.database_id));
        }

        let created: CreatedPage = response.json()?;
        Ok(created.id)
    }
}
