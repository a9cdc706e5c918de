use chrono::NaiveDate;
use serde_json::{json, Map, Value};

use crate::config::{LabelsConfig, NotionProperties};
use crate::domain::{Release, ReleaseType, Version};

/// Maximum length Notion accepts in one rich text object, in UTF-16 code units
pub const MAX_TEXT_LEN: usize = 2000;

/// Maximum child blocks accepted in one page creation request
pub const MAX_CHILD_BLOCKS: usize = 100;

/// Contents of the Notion page summarizing one release
#[derive(Debug, Clone, PartialEq)]
pub struct ReleasePage {
    pub title: String,
    /// Display label of the release type
    pub category: String,
    pub version: String,
    pub date: Option<NaiveDate>,
    pub url: String,
    pub body: String,
}

impl ReleasePage {
    /// Build the page for a release and its classification.
    ///
    /// The version column holds the parsed `X.Y.Z` when the tag parses and
    /// the raw tag otherwise.
    pub fn new(release: &Release, release_type: ReleaseType, labels: &LabelsConfig) -> Self {
        let version = Version::parse(&release.tag_name)
            .map(|v| v.to_string())
            .unwrap_or_else(|| release.tag_name.clone());

        ReleasePage {
            title: release.title().to_string(),
            category: labels.label_for(release_type).to_string(),
            version,
            date: release.published_at.map(|at| at.date_naive()),
            url: release.html_url.clone(),
            body: release.notes().to_string(),
        }
    }

    /// Render the `POST /pages` request body for a database parent
    pub fn to_request(&self, database_id: &str, properties: &NotionProperties) -> Value {
        let mut props = Map::new();
        props.insert(
            properties.title.clone(),
            json!({ "title": [text(&self.title)] }),
        );
        props.insert(
            properties.category.clone(),
            json!({ "select": { "name": self.category } }),
        );
        props.insert(
            properties.version.clone(),
            json!({ "rich_text": [text(&self.version)] }),
        );
        if let Some(date) = self.date {
            props.insert(
                properties.date.clone(),
                json!({ "date": { "start": date.format("%Y-%m-%d").to_string() } }),
            );
        }
        if !self.url.is_empty() {
            props.insert(properties.url.clone(), json!({ "url": self.url }));
        }

        let children: Vec<Value> = chunk_text(&self.body, MAX_TEXT_LEN)
            .into_iter()
            .take(MAX_CHILD_BLOCKS)
            .map(|chunk| {
                json!({
                    "object": "block",
                    "type": "paragraph",
                    "paragraph": { "rich_text": [text(chunk)] }
                })
            })
            .collect();

        json!({
            "parent": { "database_id": database_id },
            "properties": props,
            "children": children,
        })
    }

    /// Characters of the body beyond the last block a request can carry
    pub fn dropped_body_chars(&self) -> usize {
        chunk_text(&self.body, MAX_TEXT_LEN)
            .into_iter()
            .skip(MAX_CHILD_BLOCKS)
            .map(|chunk| chunk.chars().count())
            .sum()
    }
}

fn text(content: &str) -> Value {
    json!({ "type": "text", "text": { "content": content } })
}

/// Split text into pieces of at most `max_units` UTF-16 code units.
///
/// Notion measures text length in UTF-16, so a character outside the BMP
/// counts twice. Splits never fall inside a character. Blank text yields no
/// pieces.
pub fn chunk_text(text: &str, max_units: usize) -> Vec<&str> {
    if text.trim().is_empty() || max_units == 0 {
        return Vec::new();
    }

    let mut chunks = Vec::new();
    let mut start = 0;
    let mut units = 0;
    for (index, c) in text.char_indices() {
        let width = c.len_utf16();
        if units > 0 && units + width > max_units {
            chunks.push(&text[start..index]);
            start = index;
            units = 0;
        }
        units += width;
    }
    chunks.push(&text[start..]);
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_release() -> Release {
        let mut release = Release::new("v1.3.0");
        release.name = Some("Ferris".to_string());
        release.body = Some("Faster sync".to_string());
        release.html_url = "https://github.com/octo/app/releases/tag/v1.3.0".to_string();
        release.published_at = Some(Utc.with_ymd_and_hms(2024, 5, 2, 23, 15, 0).unwrap());
        release
    }

    #[test]
    fn test_page_from_release() {
        let page = ReleasePage::new(
            &sample_release(),
            ReleaseType::Minor,
            &LabelsConfig::default(),
        );
        assert_eq!(page.title, "Ferris");
        assert_eq!(page.category, "Minor");
        assert_eq!(page.version, "1.3.0");
        assert_eq!(page.date, NaiveDate::from_ymd_opt(2024, 5, 2));
        assert_eq!(page.body, "Faster sync");
    }

    #[test]
    fn test_page_version_keeps_unparseable_tag() {
        let page = ReleasePage::new(
            &Release::new("nightly-42"),
            ReleaseType::Unknown,
            &LabelsConfig::default(),
        );
        assert_eq!(page.version, "nightly-42");
        assert_eq!(page.category, "Unknown");
    }

    #[test]
    fn test_request_shape() {
        let page = ReleasePage::new(
            &sample_release(),
            ReleaseType::Minor,
            &LabelsConfig::default(),
        );
        let request = page.to_request("db-123", &NotionProperties::default());

        assert_eq!(request["parent"]["database_id"], "db-123");
        assert_eq!(
            request["properties"]["Name"]["title"][0]["text"]["content"],
            "Ferris"
        );
        assert_eq!(request["properties"]["Type"]["select"]["name"], "Minor");
        assert_eq!(
            request["properties"]["Version"]["rich_text"][0]["text"]["content"],
            "1.3.0"
        );
        assert_eq!(request["properties"]["Date"]["date"]["start"], "2024-05-02");
        assert_eq!(
            request["properties"]["URL"]["url"],
            "https://github.com/octo/app/releases/tag/v1.3.0"
        );
        assert_eq!(
            request["children"][0]["paragraph"]["rich_text"][0]["text"]["content"],
            "Faster sync"
        );
    }

    #[test]
    fn test_request_omits_missing_date_and_url() {
        let page = ReleasePage::new(
            &Release::new("v0.1.0"),
            ReleaseType::Minor,
            &LabelsConfig::default(),
        );
        let request = page.to_request("db", &NotionProperties::default());
        let properties = request["properties"].as_object().unwrap();

        assert!(!properties.contains_key("Date"));
        assert!(!properties.contains_key("URL"));
        assert!(request["children"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_request_uses_configured_columns() {
        let columns = NotionProperties {
            title: "Release".to_string(),
            category: "Kind".to_string(),
            ..NotionProperties::default()
        };
        let page = ReleasePage::new(
            &sample_release(),
            ReleaseType::Major,
            &LabelsConfig::default(),
        );
        let request = page.to_request("db", &columns);

        assert!(request["properties"]["Release"]["title"].is_array());
        assert_eq!(request["properties"]["Kind"]["select"]["name"], "Major");
    }

    #[test]
    fn test_chunk_text_limits() {
        let long = "a".repeat(MAX_TEXT_LEN * 2 + 5);
        let chunks = chunk_text(&long, MAX_TEXT_LEN);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), MAX_TEXT_LEN);
        assert_eq!(chunks[2].len(), 5);
    }

    #[test]
    fn test_chunk_text_multibyte() {
        let chunks = chunk_text("版本发布说明", 4);
        assert_eq!(chunks, vec!["版本发布", "说明"]);
    }

    #[test]
    fn test_chunk_text_counts_utf16_units() {
        // Each emoji is two UTF-16 code units
        let chunks = chunk_text("😀😀😀", 4);
        assert_eq!(chunks, vec!["😀😀", "😀"]);

        let chunks = chunk_text("a😀b", 2);
        assert_eq!(chunks, vec!["a", "😀", "b"]);
    }

    #[test]
    fn test_chunk_text_emoji_body_fits_limit() {
        let body = "🚀".repeat(MAX_TEXT_LEN);
        let chunks = chunk_text(&body, MAX_TEXT_LEN);
        assert_eq!(chunks.len(), 2);
        for chunk in chunks {
            assert!(chunk.encode_utf16().count() <= MAX_TEXT_LEN);
        }
    }

    #[test]
    fn test_chunk_text_blank() {
        assert!(chunk_text("", 10).is_empty());
        assert!(chunk_text("  \n ", 10).is_empty());
    }

    #[test]
    fn test_request_caps_child_blocks() {
        let mut release = sample_release();
        release.body = Some("x".repeat(MAX_TEXT_LEN * (MAX_CHILD_BLOCKS + 3)));
        let page = ReleasePage::new(&release, ReleaseType::Patch, &LabelsConfig::default());
        let request = page.to_request("db", &NotionProperties::default());
        assert_eq!(
            request["children"].as_array().unwrap().len(),
            MAX_CHILD_BLOCKS
        );
        assert_eq!(page.dropped_body_chars(), MAX_TEXT_LEN * 3);
    }

    #[test]
    fn test_dropped_body_chars_zero_when_body_fits() {
        let page = ReleasePage::new(
            &sample_release(),
            ReleaseType::Patch,
            &LabelsConfig::default(),
        );
        assert_eq!(page.dropped_body_chars(), 0);
    }
}
