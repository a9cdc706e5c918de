use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Leading `v`, three dot-separated numeric groups, anything after is ignored.
const VERSION_PATTERN: &str = r"^v?(\d+)\.(\d+)\.(\d+)";

fn version_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(VERSION_PATTERN).expect("version pattern is valid"))
}

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version from the start of a release tag.
    ///
    /// Accepts an optional lowercase `v` prefix followed by `X.Y.Z`. Any
    /// suffix after the patch number (`-beta`, `+build`, `.4`) is ignored.
    /// Returns `None` when the tag does not start with that shape; an
    /// unparseable tag is a normal outcome, not an error.
    ///
    /// # Example
    /// ```
    /// use release_notion::domain::Version;
    ///
    /// assert_eq!(Version::parse("v2.3.0"), Some(Version::new(2, 3, 0)));
    /// assert_eq!(Version::parse("2.3.0-beta"), Some(Version::new(2, 3, 0)));
    /// assert_eq!(Version::parse("release-2.3.0"), None);
    /// ```
    pub fn parse(tag: &str) -> Option<Self> {
        let caps = version_regex().captures(tag)?;

        // Groups that overflow u64 are treated like any other non-match
        let major = caps[1].parse::<u64>().ok()?;
        let minor = caps[2].parse::<u64>().ok()?;
        let patch = caps[3].parse::<u64>().ok()?;

        Some(Version::new(major, minor, patch))
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_parse() {
        let v = Version::parse("v1.2.3").unwrap();
        assert_eq!(v.major, 1);
        assert_eq!(v.minor, 2);
        assert_eq!(v.patch, 3);
    }

    #[test]
    fn test_version_parse_without_v() {
        assert_eq!(Version::parse("1.2.3"), Some(Version::new(1, 2, 3)));
    }

    #[test]
    fn test_version_parse_ignores_suffix() {
        assert_eq!(Version::parse("2.3.0-beta"), Some(Version::new(2, 3, 0)));
        assert_eq!(Version::parse("v1.2.3.4"), Some(Version::new(1, 2, 3)));
        assert_eq!(
            Version::parse("v4.0.1+build.7 (hotfix)"),
            Some(Version::new(4, 0, 1))
        );
    }

    #[test]
    fn test_version_parse_leading_zeros_are_decimal() {
        assert_eq!(Version::parse("v01.002.0010"), Some(Version::new(1, 2, 10)));
        assert_eq!(Version::parse("08.09.00"), Some(Version::new(8, 9, 0)));
    }

    #[test]
    fn test_version_parse_anchored_at_start() {
        assert_eq!(Version::parse("release-v1.2.3"), None);
        assert_eq!(Version::parse(" v1.2.3"), None);
        assert_eq!(Version::parse("xv1.2.3"), None);
    }

    #[test]
    fn test_version_parse_invalid() {
        assert_eq!(Version::parse(""), None);
        assert_eq!(Version::parse("abc"), None);
        assert_eq!(Version::parse("1.2"), None);
        assert_eq!(Version::parse("v"), None);
        assert_eq!(Version::parse("vv1.2.3"), None);
        assert_eq!(Version::parse("V1.2.3"), None);
        assert_eq!(Version::parse("1.x.3"), None);
    }

    #[test]
    fn test_version_parse_overflow_is_absent() {
        assert_eq!(Version::parse("99999999999999999999999.0.0"), None);
    }

    #[test]
    fn test_version_parse_is_idempotent() {
        for tag in ["v0.0.1", "10.20.30-rc.1", "v7.0.0"] {
            assert_eq!(Version::parse(tag), Version::parse(tag));
        }
    }

    #[test]
    fn test_version_ordering() {
        assert!(Version::new(2, 0, 0) > Version::new(1, 9, 9));
        assert!(Version::new(1, 3, 0) > Version::new(1, 2, 9));
        assert!(Version::new(1, 2, 3) < Version::new(1, 2, 4));
    }

    #[test]
    fn test_version_display() {
        assert_eq!(Version::new(1, 2, 3).to_string(), "1.2.3");
    }
}
