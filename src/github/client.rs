use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Url;
use tracing::debug;

use crate::config::GitHubConfig;
use crate::domain::Release;
use crate::error::{ReleaseNotionError, Result};
use crate::github::ReleaseSource;

const GITHUB_API_VERSION: &str = "2022-11-28";

/// GitHub REST client bound to one repository
pub struct GitHubClient {
    client: Client,
    api_url: String,
    repository: String,
    token: Option<String>,
    per_page: u8,
}

impl GitHubClient {
    /// Create a client for `owner/name`
    pub fn new(config: &GitHubConfig, repository: impl Into<String>, token: Option<String>) -> Self {
        GitHubClient {
            client: Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            repository: repository.into(),
            token,
            per_page: config.page_size(),
        }
    }

    /// `{api}/repos/{owner}/{name}/releases` followed by `extra` segments.
    ///
    /// Each segment is percent-encoded on its own, so tags holding `/`, `#`
    /// or `?` stay a single path segment.
    fn releases_url(&self, extra: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&self.api_url).map_err(|e| {
            ReleaseNotionError::config(format!("invalid GitHub API URL '{}': {}", self.api_url, e))
        })?;

        url.path_segments_mut()
            .map_err(|_| {
                ReleaseNotionError::config(format!(
                    "GitHub API URL '{}' cannot take a path",
                    self.api_url
                ))
            })?
            .pop_if_empty()
            .push("repos")
            .extend(self.repository.split('/'))
            .push("releases")
            .extend(extra);

        Ok(url)
    }

    fn get(&self, url: Url) -> RequestBuilder {
        debug!(%url, "GitHub request");
        let request = self
            .client
            .get(url)
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, "release-notion")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION);

        match &self.token {
            Some(token) => request.header(AUTHORIZATION, format!("Bearer {}", token)),
            None => request,
        }
    }
}

/// Turn a non-2xx response into a GitHub error carrying status and body
fn check_status(response: Response, what: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    Err(ReleaseNotionError::github(format!(
        "{} returned {}: {}",
        what,
        status,
        body.trim()
    )))
}

impl ReleaseSource for GitHubClient {
    fn fetch_release(&self, tag: &str) -> Result<Release> {
        let url = self.releases_url(&["tags", tag])?;
        let response = self.get(url).send()?;
        let response = check_status(response, &format!("release '{}'", tag))?;
        Ok(response.json::<Release>()?)
    }

    fn list_release_tags(&self) -> Result<Vec<String>> {
        let mut url = self.releases_url(&[])?;
        url.query_pairs_mut()
            .append_pair("per_page", &self.per_page.to_string());
        let response = self.get(url).send()?;
        let response = check_status(response, "release list")?;
        let releases: Vec<Release> = response.json()?;

        debug!(count = releases.len(), "fetched release history");
        Ok(tags_newest_first(releases))
    }
}

/// Tags of published releases in the order GitHub listed them
fn tags_newest_first(releases: Vec<Release>) -> Vec<String> {
    releases
        .into_iter()
        .filter(|release| !release.draft)
        .map(|release| release.tag_name)
        .collect()
}
