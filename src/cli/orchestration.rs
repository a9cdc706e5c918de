//! Release workflow orchestration
//!
//! Resolves the release, classifies it against the previous release, and
//! writes the summary page. Kept apart from `main` so it can run against
//! mock services.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::boundary::BoundaryWarning;
use crate::config::{Config, Settings};
use crate::domain::{previous_tag, Release, ReleaseEvent, ReleaseType, Version};
use crate::error::{ReleaseNotionError, Result};
use crate::github::ReleaseSource;
use crate::notion::{mask_id, PageSink, ReleasePage};

/// Arguments for the release workflow
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReleaseWorkflowArgs {
    /// Build the page but do not write it
    pub dry_run: bool,
}

/// Outcome of classifying a tag against the release history
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub release_type: ReleaseType,
    pub previous_tag: Option<String>,
    pub warnings: Vec<BoundaryWarning>,
}

/// Result of a successful workflow run
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// The tag that was recorded
    pub tag: String,

    /// Tag of the release before it, if one was found
    pub previous_tag: Option<String>,

    pub release_type: ReleaseType,

    /// Display label written to the category column
    pub label: String,

    pub page: ReleasePage,

    /// Id of the created page; `None` on a dry run
    pub page_id: Option<String>,

    /// Request body that would be sent; only set on a dry run
    pub request: Option<Value>,

    pub warnings: Vec<BoundaryWarning>,
}

/// Classify `tag` using `tags` (newest first) as history.
///
/// - tag does not parse: `Unknown`
/// - previous release found and parses: compared field by field
/// - otherwise: inferred from the version number alone
pub fn classify_release<S: AsRef<str>>(tag: &str, tags: &[S]) -> Classification {
    let mut warnings = Vec::new();
    let prev_tag = previous_tag(tags, tag).map(str::to_string);

    let Some(current) = Version::parse(tag) else {
        warnings.push(BoundaryWarning::UnparsableTag {
            tag: tag.to_string(),
        });
        return Classification {
            release_type: ReleaseType::Unknown,
            previous_tag: prev_tag,
            warnings,
        };
    };

    let previous = match prev_tag.as_deref() {
        None => {
            warnings.push(BoundaryWarning::PreviousReleaseNotFound {
                tag: tag.to_string(),
            });
            None
        }
        Some(prev) => {
            let parsed = Version::parse(prev);
            if parsed.is_none() {
                warnings.push(BoundaryWarning::UnparsablePreviousTag {
                    tag: prev.to_string(),
                });
            }
            parsed
        }
    };

    match previous {
        Some(previous) if current < previous => {
            warnings.push(BoundaryWarning::VersionRegression { current, previous });
        }
        None => warnings.push(BoundaryWarning::FallbackClassification {
            tag: tag.to_string(),
        }),
        _ => {}
    }

    Classification {
        release_type: ReleaseType::determine(current, previous),
        previous_tag: prev_tag,
        warnings,
    }
}

/// Read the release from a `release` webhook payload
pub fn load_event_release(path: &Path) -> Result<Release> {
    let content = fs::read_to_string(path)?;
    let event: ReleaseEvent = serde_json::from_str(&content)?;
    Ok(event.release)
}

/// Use the event payload when it describes `tag`, otherwise ask the source
fn resolve_release<S: ReleaseSource>(settings: &Settings, source: &S) -> Result<Release> {
    if let Some(path) = settings.event_path.as_deref() {
        match load_event_release(path) {
            Ok(release) if release.tag_name == settings.tag => {
                debug!(path = %path.display(), "using release from event payload");
                return Ok(release);
            }
            Ok(release) => debug!(
                event_tag = %release.tag_name,
                tag = %settings.tag,
                "event payload describes another release"
            ),
            Err(e) => debug!(path = %path.display(), error = %e, "no release in event payload"),
        }
    }

    let release = source.fetch_release(&settings.tag)?;
    if release.tag_name != settings.tag {
        return Err(ReleaseNotionError::github(format!(
            "requested release '{}' but received '{}'",
            settings.tag, release.tag_name
        )));
    }
    Ok(release)
}

/// Main release workflow
///
/// 1. Resolve the current release (event payload or GitHub)
/// 2. List release tags and find the previous one
/// 3. Classify the release
/// 4. Build the page and write it unless this is a dry run
///
/// `sink` may be `None` only on a dry run.
pub fn run_release_workflow<S: ReleaseSource>(
    args: &ReleaseWorkflowArgs,
    settings: &Settings,
    config: &Config,
    source: &S,
    sink: Option<&dyn PageSink>,
) -> Result<WorkflowResult> {
    let release = resolve_release(settings, source)?;
    info!(tag = %release.tag_name, repository = %settings.repository, "resolved release");

    let tags = source.list_release_tags()?;
    let classification = classify_release(&release.tag_name, &tags);
    for warning in &classification.warnings {
        warn!(%warning, "classification warning");
    }
    info!(
        release_type = %classification.release_type,
        previous = ?classification.previous_tag,
        "classified release"
    );

    let label = config
        .labels
        .label_for(classification.release_type)
        .to_string();
    let page = ReleasePage::new(&release, classification.release_type, &config.labels);

    let mut warnings = classification.warnings;
    let dropped = page.dropped_body_chars();
    if dropped > 0 {
        let warning = BoundaryWarning::ReleaseNotesTruncated {
            tag: release.tag_name.clone(),
            dropped_chars: dropped,
        };
        warn!(%warning, "release notes truncated");
        warnings.push(warning);
    }

    info!(
        database = %mask_id(settings.notion_database_id.as_deref().unwrap_or("")),
        "using Notion database"
    );

    let (page_id, request) = if args.dry_run {
        let database_id = settings
            .notion_database_id
            .as_deref()
            .unwrap_or("<NOTION_DATABASE_ID>");
        let request = page.to_request(database_id, &config.notion.properties);
        (None, Some(request))
    } else {
        let sink = sink.ok_or_else(|| {
            ReleaseNotionError::config("no Notion destination configured for a real run")
        })?;
        let page_id = sink.create_page(&page)?;
        info!(%page_id, "created Notion page");
        (Some(page_id), None)
    };

    Ok(WorkflowResult {
        tag: release.tag_name,
        previous_tag: classification.previous_tag,
        release_type: classification.release_type,
        label,
        page,
        page_id,
        request,
        warnings,
    })
}
