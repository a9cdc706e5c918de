use crate::domain::Version;
use std::fmt;

/// Scope of change between two releases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleaseType {
    Major,
    Minor,
    Patch,
    Unknown,
}

impl ReleaseType {
    /// Compare a release against the one before it.
    ///
    /// Fields are checked in priority order (major, minor, patch) and only a
    /// strict increase counts. Identical versions, a missing previous
    /// version, and a current version lower than the previous one all yield
    /// [`ReleaseType::Unknown`].
    pub fn classify(current: Version, previous: Option<Version>) -> Self {
        let Some(previous) = previous else {
            return ReleaseType::Unknown;
        };

        if current.major > previous.major {
            ReleaseType::Major
        } else if current.minor > previous.minor {
            ReleaseType::Minor
        } else if current.patch > previous.patch {
            ReleaseType::Patch
        } else {
            ReleaseType::Unknown
        }
    }

    /// Best-effort guess from a single version when there is no history.
    ///
    /// - `X.0.0` with `X > 0` -> Major
    /// - `X.Y.0` -> Minor
    /// - anything else -> Patch
    ///
    /// Never returns [`ReleaseType::Unknown`].
    pub fn infer(current: Version) -> Self {
        if current.major > 0 && current.minor == 0 && current.patch == 0 {
            ReleaseType::Major
        } else if current.patch == 0 {
            ReleaseType::Minor
        } else {
            ReleaseType::Patch
        }
    }

    /// Classify against history when a previous version is known, otherwise
    /// fall back to [`ReleaseType::infer`].
    pub fn determine(current: Version, previous: Option<Version>) -> Self {
        match previous {
            Some(_) => Self::classify(current, previous),
            None => Self::infer(current),
        }
    }

    /// Lowercase identifier, also used as the key in the `[labels]` config table
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Major => "major",
            ReleaseType::Minor => "minor",
            ReleaseType::Patch => "patch",
            ReleaseType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
