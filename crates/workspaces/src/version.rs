//! Strict SemVer checks for manifest versions and release categories.
//!
//! Validity is decided by the `semver` crate's strict parser plus a
//! round-trip check: a version string is accepted only when its canonical
//! rendering is byte-for-byte identical to the input. This rejects `v`
//! prefixes, surrounding whitespace and any other non-canonical spelling
//! that a lenient parser would normalize away.
//!
//! Build metadata (`+build`) is not part of a manifest version, and numeric
//! components must fit in [`MAX_SAFE_COMPONENT`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Returns whether `value` is a string holding a valid, unprefixed SemVer version.
///
/// Non-string values are never valid.
///
/// ```
/// use pkgscan_workspaces::version::is_valid_semver;
/// use serde_json::json;
///
/// assert!(is_valid_semver(&json!("1.0.0-beta.1")));
/// assert!(!is_valid_semver(&json!("v1.0.0")));
/// assert!(!is_valid_semver(&json!(null)));
/// ```
#[must_use]
pub fn is_valid_semver(value: &Value) -> bool {
    value.as_str().is_some_and(is_valid_semver_str)
}

/// Largest accepted major, minor or patch number (2^53 - 1).
pub const MAX_SAFE_COMPONENT: u64 = (1 << 53) - 1;

/// Returns whether `value` is a valid, unprefixed SemVer version string.
///
/// ```
/// use pkgscan_workspaces::version::is_valid_semver_str;
///
/// assert!(is_valid_semver_str("2.0.0-rc.1"));
/// assert!(!is_valid_semver_str("2.0.0+build.5"));
/// ```
#[must_use]
pub fn is_valid_semver_str(value: &str) -> bool {
    semver::Version::parse(value).is_ok_and(|parsed| {
        parsed.build.is_empty()
            && [parsed.major, parsed.minor, parsed.patch]
                .iter()
                .all(|component| *component <= MAX_SAFE_COMPONENT)
            && parsed.to_string() == value
    })
}

/// Returns whether the given release category is a major one.
///
/// ```
/// use pkgscan_workspaces::version::{is_major_semver_diff, ReleaseType};
///
/// assert!(is_major_semver_diff(ReleaseType::Premajor));
/// assert!(!is_major_semver_diff(ReleaseType::Minor));
/// ```
#[must_use]
pub fn is_major_semver_diff(diff: ReleaseType) -> bool {
    diff.is_major()
}

/// The category of change between two versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseType {
    /// Breaking change.
    Major,
    /// Pre-release of the next major version.
    Premajor,
    /// Backwards compatible feature.
    Minor,
    /// Pre-release of the next minor version.
    Preminor,
    /// Backwards compatible fix.
    Patch,
    /// Pre-release of the next patch version.
    Prepatch,
    /// Change of the pre-release identifier only.
    Prerelease,
}

impl ReleaseType {
    /// Every release type, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Major,
        Self::Premajor,
        Self::Minor,
        Self::Preminor,
        Self::Patch,
        Self::Prepatch,
        Self::Prerelease,
    ];

    /// Returns the lowercase name of the release type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Premajor => "premajor",
            Self::Minor => "minor",
            Self::Preminor => "preminor",
            Self::Patch => "patch",
            Self::Prepatch => "prepatch",
            Self::Prerelease => "prerelease",
        }
    }

    /// Whether the category name contains "major".
    #[must_use]
    pub fn is_major(&self) -> bool {
        self.as_str().contains("major")
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|release| release.as_str() == s)
            .ok_or_else(|| format!("Unknown release type: {s}"))
    }
}
