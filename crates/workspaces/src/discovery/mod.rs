//! Workspace location discovery for `package.json` monorepos.
//!
//! Workspace patterns declared in a root manifest are expanded with glob
//! semantics into directory paths relative to the repository root. In
//! recursive mode every resolved workspace whose own manifest declares
//! `workspaces` is treated as a nested monorepo and expanded in turn.
//!
//! # Usage
//!
//! ```rust,ignore
//! use pkgscan_workspaces::discovery::get_workspace_locations;
//! use std::path::Path;
//!
//! let locations = get_workspace_locations(&["packages/*"], Path::new("."), true).await?;
//! for location in locations {
//!     println!("{}", location.display());
//! }
//! ```
//!
//! # Ordering
//!
//! Patterns are expanded one at a time in declaration order, and matches of
//! a single pattern are listed in the glob crate's order: byte-wise by path,
//! so `B` sorts before `a`. This is not the locale-aware order of Node's glob
//! libraries. A trailing `**` matches the directories below its base but not
//! the base itself. Nested manifests are read one at a time, and a nested
//! monorepo's descendants follow it directly in the output. Duplicate
//! patterns yield duplicate paths.
//!
//! Returned paths are normalized lexically: `.` segments are dropped and
//! `..` cancels the preceding segment, so `../b` under `packages/a` is
//! reported as `packages/b`.
//!
//! # Cycles
//!
//! Workspace graphs are assumed to be acyclic. A workspace whose patterns
//! resolve back to itself or an ancestor recurses until a read fails or
//! resources run out.

use crate::error::{Error, Result};
use crate::manifest::{
    ManifestField, get_package_manifest, validate_monorepo_manifest, validate_version,
};
use async_recursion::async_recursion;
use glob::{MatchOptions, Pattern};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, trace};

/// Glob options matching how package managers expand workspace patterns:
/// `*` stays within one path segment and hidden directories must be named
/// explicitly.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Resolves workspace patterns to workspace directories relative to `root_dir`.
///
/// With `recursive` set, nested monorepos are expanded as well and their
/// members are listed directly after them.
///
/// # Errors
///
/// Returns [`Error::InvalidGlob`] for a malformed pattern and [`Error::Io`]
/// if a directory cannot be read during expansion. In recursive mode, any
/// error reading a workspace manifest, and any validation failure of a
/// workspace that declares `workspaces`, aborts the whole resolution.
pub async fn get_workspace_locations(
    patterns: &[&str],
    root_dir: &Path,
    recursive: bool,
) -> Result<Vec<PathBuf>> {
    resolve(patterns, root_dir, Path::new(""), recursive).await
}

/// Like [`get_workspace_locations`], but expands `patterns` inside
/// `root_dir/prefix` and joins every match onto `prefix`.
///
/// Returned paths stay relative to `root_dir`, so a nested monorepo's
/// members can be listed alongside the root's.
///
/// # Errors
///
/// See [`get_workspace_locations`].
pub async fn get_workspace_locations_with_prefix(
    patterns: &[&str],
    root_dir: &Path,
    recursive: bool,
    prefix: &Path,
) -> Result<Vec<PathBuf>> {
    resolve(patterns, root_dir, prefix, recursive).await
}

#[async_recursion]
async fn resolve<'a>(
    patterns: &'a [&'a str],
    root_dir: &'a Path,
    prefix: &'a Path,
    recursive: bool,
) -> Result<Vec<PathBuf>> {
    let cwd = if prefix.as_os_str().is_empty() {
        root_dir.to_path_buf()
    } else {
        root_dir.join(prefix)
    };

    let mut resolved = Vec::new();
    for pattern in patterns {
        let matches = expand_pattern_blocking(&cwd, pattern).await?;
        debug!(
            pattern = %pattern,
            cwd = %cwd.display(),
            matches = matches.len(),
            "Expanded workspace pattern"
        );
        resolved.extend(matches.into_iter().map(|m| normalize(&prefix.join(m))));
    }

    if !recursive {
        return Ok(resolved);
    }

    let mut locations = Vec::with_capacity(resolved.len());
    for workspace in resolved {
        let manifest = get_package_manifest(&root_dir.join(&workspace)).await?;

        let nested = if manifest.contains(ManifestField::Workspaces) {
            let versioned = validate_version(&manifest, &workspace)?;
            let monorepo = validate_monorepo_manifest(versioned, &workspace)?;
            debug!(
                workspace = %workspace.display(),
                patterns = ?monorepo.workspaces(),
                "Descending into nested monorepo"
            );
            resolve(monorepo.workspaces(), root_dir, &workspace, true).await?
        } else {
            trace!(workspace = %workspace.display(), "Leaf workspace");
            Vec::new()
        };

        locations.push(workspace);
        locations.extend(nested);
    }

    Ok(locations)
}

/// Lexically resolves `.` and `..` segments without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(normalized.components().next_back(), Some(Component::Normal(_))) {
                    normalized.pop();
                } else {
                    normalized.push(component);
                }
            }
            other => normalized.push(other),
        }
    }
    normalized
}

async fn expand_pattern_blocking(cwd: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let cwd = cwd.to_path_buf();
    let pattern = pattern.to_string();

    tokio::task::spawn_blocking(move || expand_pattern(&cwd, &pattern))
        .await
        .map_err(|e| Error::Io {
            source: std::io::Error::other(e),
            path: None,
            operation: "expanding workspace pattern".to_string(),
        })?
}

/// Expands one glob pattern inside `cwd`, returning matches relative to `cwd`.
///
/// # Errors
///
/// Returns [`Error::InvalidGlob`] if the pattern is malformed and
/// [`Error::Io`] if a directory cannot be read while matching.
pub fn expand_pattern(cwd: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let invalid = |message: String| Error::InvalidGlob {
        pattern: pattern.to_string(),
        message,
    };

    let cwd_str = cwd
        .to_str()
        .ok_or_else(|| invalid(format!("root {} is not valid UTF-8", cwd.display())))?;
    let full_pattern = Path::new(&Pattern::escape(cwd_str)).join(pattern);
    let full_pattern = full_pattern
        .to_str()
        .ok_or_else(|| invalid("pattern is not valid UTF-8".to_string()))?;

    let entries =
        glob::glob_with(full_pattern, MATCH_OPTIONS).map_err(|e| invalid(e.to_string()))?;

    let mut matches = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            Error::Io {
                source: e.into(),
                path: Some(path),
                operation: "expanding workspace pattern".to_string(),
            }
        })?;
        let relative = match path.strip_prefix(cwd) {
            Ok(relative) => relative.to_path_buf(),
            Err(_) => path,
        };
        matches.push(relative);
    }

    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_manifest(dir: &Path, contents: &str) {
        fs::create_dir_all(dir).unwrap();
        fs::write(dir.join("package.json"), contents).unwrap();
    }

    #[test]
    fn test_expand_pattern_basic() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("packages/b")).unwrap();
        fs::create_dir_all(root.join("packages/a")).unwrap();
        fs::create_dir_all(root.join("apps/app1")).unwrap();

        let result = expand_pattern(root, "packages/*").unwrap();
        assert_eq!(
            result,
            vec![PathBuf::from("packages/a"), PathBuf::from("packages/b")]
        );
    }

    #[test]
    fn test_expand_pattern_literal() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("foo/bar")).unwrap();

        assert_eq!(
            expand_pattern(root, "foo/bar").unwrap(),
            vec![PathBuf::from("foo/bar")]
        );
        assert!(expand_pattern(root, "foo/missing").unwrap().is_empty());
    }

    #[test]
    fn test_expand_pattern_star_does_not_cross_separator() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("packages/group/deep")).unwrap();

        assert_eq!(
            expand_pattern(root, "packages/*").unwrap(),
            vec![PathBuf::from("packages/group")]
        );
        assert_eq!(
            expand_pattern(root, "packages/**/deep").unwrap(),
            vec![PathBuf::from("packages/group/deep")]
        );
    }

    #[test]
    fn test_expand_pattern_skips_hidden_directories() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("packages/.cache")).unwrap();
        fs::create_dir_all(root.join("packages/a")).unwrap();

        assert_eq!(
            expand_pattern(root, "packages/*").unwrap(),
            vec![PathBuf::from("packages/a")]
        );
    }

    #[test]
    fn test_expand_pattern_orders_bytewise() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("packages/a")).unwrap();
        fs::create_dir_all(root.join("packages/B")).unwrap();

        assert_eq!(
            expand_pattern(root, "packages/*").unwrap(),
            vec![PathBuf::from("packages/B"), PathBuf::from("packages/a")]
        );
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize(Path::new("packages/a/../b")), PathBuf::from("packages/b"));
        assert_eq!(normalize(Path::new("./packages/./a")), PathBuf::from("packages/a"));
        assert_eq!(normalize(Path::new("../outside")), PathBuf::from("../outside"));
        assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
    }

    #[test]
    fn test_expand_pattern_invalid_glob() {
        let temp_dir = TempDir::new().unwrap();

        let err = expand_pattern(temp_dir.path(), "packages/[").unwrap_err();
        match err {
            Error::InvalidGlob { pattern, .. } => assert_eq!(pattern, "packages/["),
            other => panic!("Expected InvalidGlob error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_recursive_does_not_read_manifests() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        // No package.json anywhere: reading one would fail.
        fs::create_dir_all(root.join("packages/a")).unwrap();
        fs::create_dir_all(root.join("apps/b")).unwrap();

        let result = get_workspace_locations(&["packages/*", "apps/*"], root, false)
            .await
            .unwrap();
        assert_eq!(
            result,
            vec![PathBuf::from("packages/a"), PathBuf::from("apps/b")]
        );
    }

    #[tokio::test]
    async fn test_duplicate_patterns_are_kept() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("packages/a")).unwrap();

        let result = get_workspace_locations(&["packages/*", "packages/a"], root, false)
            .await
            .unwrap();
        assert_eq!(
            result,
            vec![PathBuf::from("packages/a"), PathBuf::from("packages/a")]
        );
    }

    #[tokio::test]
    async fn test_prefix_is_joined_onto_matches() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("foo/bar/baz")).unwrap();

        let result =
            get_workspace_locations_with_prefix(&["baz"], root, false, Path::new("foo/bar"))
                .await
                .unwrap();
        assert_eq!(result, vec![PathBuf::from("foo/bar/baz")]);
    }

    #[tokio::test]
    async fn test_parent_segments_are_normalized() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("packages/a")).unwrap();
        fs::create_dir_all(root.join("packages/b")).unwrap();

        let result =
            get_workspace_locations_with_prefix(&["../b"], root, false, Path::new("packages/a"))
                .await
                .unwrap();
        assert_eq!(result, vec![PathBuf::from("packages/b")]);
    }

    #[tokio::test]
    async fn test_recursive_leaf() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        write_manifest(&root.join("foo/bar"), r#"{"name": "bar", "version": "1.0.0"}"#);

        let result = get_workspace_locations(&["foo/bar"], root, true).await.unwrap();
        assert_eq!(result, vec![PathBuf::from("foo/bar")]);
    }

    #[tokio::test]
    async fn test_recursive_missing_manifest_aborts() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("packages/a")).unwrap();

        let err = get_workspace_locations(&["packages/*"], root, true)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }
}
