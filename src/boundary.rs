use std::fmt;

use crate::domain::Version;

/// Warnings raised while classifying and recording a release.
/// These are non-fatal; the run still records the release.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// The release tag is not a semantic version; the type stays unknown
    UnparsableTag { tag: String },
    /// No older release follows the current tag in the release list
    PreviousReleaseNotFound { tag: String },
    /// The previous release exists but its tag is not a semantic version
    UnparsablePreviousTag { tag: String },
    /// The current version is lower than the previous one
    VersionRegression { current: Version, previous: Version },
    /// The type was guessed from the version number alone
    FallbackClassification { tag: String },
    /// Release notes exceed what one page request can carry
    ReleaseNotesTruncated { tag: String, dropped_chars: usize },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnparsableTag { tag } => {
                write!(
                    f,
                    "Cannot parse tag '{}' as a semantic version; release type is unknown",
                    tag
                )
            }
            BoundaryWarning::PreviousReleaseNotFound { tag } => {
                write!(f, "No release found before '{}'", tag)
            }
            BoundaryWarning::UnparsablePreviousTag { tag } => {
                write!(f, "Cannot parse previous tag '{}' as a semantic version", tag)
            }
            BoundaryWarning::VersionRegression { current, previous } => {
                write!(
                    f,
                    "Version {} is lower than previous release {}",
                    current, previous
                )
            }
            BoundaryWarning::FallbackClassification { tag } => {
                write!(
                    f,
                    "Release type of '{}' was inferred from its version number alone",
                    tag
                )
            }
            BoundaryWarning::ReleaseNotesTruncated { tag, dropped_chars } => {
                write!(
                    f,
                    "Release notes of '{}' were truncated; {} characters not written",
                    tag, dropped_chars
                )
            }
        }
    }
}
