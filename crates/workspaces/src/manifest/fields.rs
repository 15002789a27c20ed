//! Closed enumerations of the well-known `package.json` field names.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level manifest fields that carry meaning for validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManifestField {
    /// `engines`: tool name to version range.
    Engines,
    /// `name`: the package name.
    Name,
    /// `private`: must be `true` for monorepo roots.
    Private,
    /// `version`: a strict SemVer string.
    Version,
    /// `workspaces`: glob patterns for member packages.
    Workspaces,
}

impl ManifestField {
    /// Every manifest field, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Engines,
        Self::Name,
        Self::Private,
        Self::Version,
        Self::Workspaces,
    ];

    /// Returns the exact key used in `package.json`.
    ///
    /// # Example
    ///
    /// ```
    /// use pkgscan_workspaces::ManifestField;
    ///
    /// assert_eq!(ManifestField::Workspaces.as_str(), "workspaces");
    /// assert_eq!(ManifestField::Private.as_str(), "private");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Engines => "engines",
            Self::Name => "name",
            Self::Private => "private",
            Self::Version => "version",
            Self::Workspaces => "workspaces",
        }
    }
}

impl fmt::Display for ManifestField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Dependency categories, each a map from package name to version range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DependencyField {
    /// `dependencies`
    #[serde(rename = "dependencies")]
    Production,
    /// `devDependencies`
    #[serde(rename = "devDependencies")]
    Development,
    /// `peerDependencies`
    #[serde(rename = "peerDependencies")]
    Peer,
    /// `bundledDependencies`
    #[serde(rename = "bundledDependencies")]
    Bundled,
    /// `optionalDependencies`
    #[serde(rename = "optionalDependencies")]
    Optional,
}

impl DependencyField {
    /// Every dependency category, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Production,
        Self::Development,
        Self::Peer,
        Self::Bundled,
        Self::Optional,
    ];

    /// Returns the exact key used in `package.json`.
    ///
    /// # Example
    ///
    /// ```
    /// use pkgscan_workspaces::DependencyField;
    ///
    /// assert_eq!(DependencyField::Development.as_str(), "devDependencies");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Production => "dependencies",
            Self::Development => "devDependencies",
            Self::Peer => "peerDependencies",
            Self::Bundled => "bundledDependencies",
            Self::Optional => "optionalDependencies",
        }
    }
}

impl fmt::Display for DependencyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tools recognised under the `engines` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineName {
    /// Node.js
    Node,
    /// npm
    Npm,
    /// pnpm
    Pnpm,
    /// Yarn
    Yarn,
}

impl EngineName {
    /// Every engine, in declaration order.
    pub const ALL: [Self; 4] = [Self::Node, Self::Npm, Self::Pnpm, Self::Yarn];

    /// Returns the key used under `engines`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "node",
            Self::Npm => "npm",
            Self::Pnpm => "pnpm",
            Self::Yarn => "yarn",
        }
    }
}

impl fmt::Display for EngineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
