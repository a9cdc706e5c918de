use crate::domain::Release;
use crate::error::{ReleaseNotionError, Result};
use crate::github::ReleaseSource;

/// Mock release source for testing without network access
pub struct MockReleaseSource {
    releases: Vec<Release>,
}

impl MockReleaseSource {
    /// Create a new empty mock source
    pub fn new() -> Self {
        MockReleaseSource {
            releases: Vec::new(),
        }
    }

    /// Build a source from tags given newest first
    pub fn with_tags(tags: &[&str]) -> Self {
        MockReleaseSource {
            releases: tags.iter().map(|tag| Release::new(*tag)).collect(),
        }
    }

    /// Append a release; later calls are treated as older releases
    pub fn add_release(&mut self, release: Release) {
        self.releases.push(release);
    }
}

impl Default for MockReleaseSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReleaseSource for MockReleaseSource {
    fn fetch_release(&self, tag: &str) -> Result<Release> {
        self.releases
            .iter()
            .find(|release| release.tag_name == tag)
            .cloned()
            .ok_or_else(|| {
                ReleaseNotionError::github(format!("release '{}' returned 404 Not Found", tag))
            })
    }

    fn list_release_tags(&self) -> Result<Vec<String>> {
        Ok(self
            .releases
            .iter()
            .filter(|release| !release.draft)
            .map(|release| release.tag_name.clone())
            .collect())
    }
}
