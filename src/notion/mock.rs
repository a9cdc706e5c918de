use std::cell::RefCell;

use crate::error::{ReleaseNotionError, Result};
use crate::notion::{PageSink, ReleasePage};

/// Mock page sink that keeps created pages in memory
#[derive(Default)]
pub struct MockPageSink {
    pages: RefCell<Vec<ReleasePage>>,
    fail_with: Option<String>,
}

impl MockPageSink {
    /// Create a sink that accepts every page
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sink that rejects every page with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        MockPageSink {
            pages: RefCell::new(Vec::new()),
            fail_with: Some(message.into()),
        }
    }

    /// Pages created so far
    pub fn pages(&self) -> Vec<ReleasePage> {
        self.pages.borrow().clone()
    }
}

impl PageSink for MockPageSink {
    fn create_page(&self, page: &ReleasePage) -> Result<String> {
        if let Some(message) = &self.fail_with {
            return Err(ReleaseNotionError::notion(message.clone()));
        }

        let mut pages = self.pages.borrow_mut();
        pages.push(page.clone());
        Ok(format!("mock-page-{}", pages.len()))
    }
}
