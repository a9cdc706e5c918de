//! Notion page creation
//!
//! [ReleasePage] holds what gets written; [PageSink] is where it goes.
//!
//! - [client::NotionClient]: blocking `reqwest` client for the Notion API
//! - [mock::MockPageSink]: records pages in memory for tests

pub mod client;
pub mod mock;
pub mod page;

pub use client::{mask_id, NotionClient};
pub use mock::MockPageSink;
pub use page::ReleasePage;

use crate::error::Result;

/// Destination for release summary pages
pub trait PageSink {
    /// Create a page and return its id
    fn create_page(&self, page: &ReleasePage) -> Result<String>;
}
