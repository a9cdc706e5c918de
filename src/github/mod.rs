//! GitHub release lookup
//!
//! The [ReleaseSource] trait abstracts where release metadata comes from so
//! the workflow can run against the REST API or an in-memory mock.
//!
//! - [client::GitHubClient]: blocking `reqwest` client for the GitHub REST API
//! - [mock::MockReleaseSource]: in-memory releases for tests

pub mod client;
pub mod mock;

pub use client::GitHubClient;
pub use mock::MockReleaseSource;

use crate::domain::Release;
use crate::error::Result;

/// Source of release metadata for a single repository
pub trait ReleaseSource {
    /// Fetch the release published for `tag`
    ///
    /// # Returns
    /// * `Ok(Release)` - The release metadata
    /// * `Err` - If the release does not exist or the request fails
    fn fetch_release(&self, tag: &str) -> Result<Release>;

    /// List release tags, newest first
    ///
    /// Only one page is requested; drafts are left out.
    fn list_release_tags(&self) -> Result<Vec<String>>;
}
