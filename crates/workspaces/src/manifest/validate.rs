//! Field and profile validation for manifests.
//!
//! Every field has a capability check returning the narrowed value, or
//! `None` when the field is missing or malformed. The public validators turn
//! a `None` into an [`Error::InvalidField`] naming the field, and the profile
//! validators apply the field validators in a fixed order so the first
//! failure wins.

use super::{Manifest, ManifestField};
use crate::error::{Error, Result};
use crate::version::is_valid_semver_str;
use serde_json::Value;
use std::ops::Deref;
use std::path::Path;

/// A manifest whose `version` is a valid SemVer string.
///
/// Only [`validate_version`] produces this view, which makes it the
/// precondition for [`validate_monorepo_manifest`].
#[derive(Debug, Clone, Copy)]
pub struct VersionedManifest<'a> {
    manifest: &'a Manifest,
    version: &'a str,
}

impl<'a> VersionedManifest<'a> {
    /// The validated version.
    #[must_use]
    pub const fn version(&self) -> &'a str {
        self.version
    }

    /// The underlying manifest.
    #[must_use]
    pub const fn manifest(&self) -> &'a Manifest {
        self.manifest
    }
}

impl Deref for VersionedManifest<'_> {
    type Target = Manifest;

    fn deref(&self) -> &Manifest {
        self.manifest
    }
}

/// A single-package manifest with a valid `name` and `version`.
#[derive(Debug, Clone, Copy)]
pub struct PolyrepoManifest<'a> {
    manifest: &'a Manifest,
    name: &'a str,
    version: &'a str,
}

impl<'a> PolyrepoManifest<'a> {
    /// The validated, non-empty package name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// The validated version.
    #[must_use]
    pub const fn version(&self) -> &'a str {
        self.version
    }

    /// The underlying manifest.
    #[must_use]
    pub const fn manifest(&self) -> &'a Manifest {
        self.manifest
    }
}

impl Deref for PolyrepoManifest<'_> {
    type Target = Manifest;

    fn deref(&self) -> &Manifest {
        self.manifest
    }
}

/// A monorepo root manifest: valid `version`, non-empty `workspaces`, and
/// `private: true`.
#[derive(Debug, Clone)]
pub struct MonorepoManifest<'a> {
    manifest: &'a Manifest,
    version: &'a str,
    workspaces: Vec<&'a str>,
}

impl<'a> MonorepoManifest<'a> {
    /// The validated version.
    #[must_use]
    pub const fn version(&self) -> &'a str {
        self.version
    }

    /// The workspace glob patterns, in declaration order. Never empty.
    #[must_use]
    pub fn workspaces(&self) -> &[&'a str] {
        &self.workspaces
    }

    /// The underlying manifest.
    #[must_use]
    pub const fn manifest(&self) -> &'a Manifest {
        self.manifest
    }
}

impl Deref for MonorepoManifest<'_> {
    type Target = Manifest;

    fn deref(&self) -> &Manifest {
        self.manifest
    }
}

fn check_name(manifest: &Manifest) -> Option<&str> {
    manifest.usable_name()
}

fn check_version(manifest: &Manifest) -> Option<&str> {
    manifest
        .get(ManifestField::Version)
        .and_then(Value::as_str)
        .filter(|version| is_valid_semver_str(version))
}

fn check_private(manifest: &Manifest) -> Option<()> {
    matches!(manifest.get(ManifestField::Private), Some(Value::Bool(true))).then_some(())
}

fn check_workspaces(manifest: &Manifest) -> Option<Vec<&str>> {
    let patterns = manifest.get(ManifestField::Workspaces)?.as_array()?;
    if patterns.is_empty() {
        return None;
    }
    patterns.iter().map(Value::as_str).collect()
}

/// Names the failing field, by package name when there is one, else by path.
fn error_prefix(field: ManifestField, manifest: &Manifest, dir_path: &Path) -> String {
    match manifest.usable_name() {
        Some(name) => format!("\"{name}\" manifest \"{field}\""),
        None => format!("\"{field}\" of manifest in \"{}\"", dir_path.display()),
    }
}

fn received(manifest: &Manifest, field: ManifestField) -> String {
    match manifest.get(field) {
        None => "undefined".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Validates the `name` field.
///
/// # Errors
///
/// Returns [`Error::InvalidField`] unless `name` is a non-empty string.
pub fn validate_name<'a>(manifest: &'a Manifest, dir_path: &Path) -> Result<&'a str> {
    check_name(manifest).ok_or_else(|| {
        Error::invalid_field(
            ManifestField::Name,
            format!(
                "Manifest in \"{}\" does not have a valid \"{}\" field.",
                dir_path.display(),
                ManifestField::Name
            ),
        )
    })
}

/// Validates the `version` field.
///
/// # Errors
///
/// Returns [`Error::InvalidField`] unless `version` is a strict, unprefixed
/// SemVer string.
pub fn validate_version<'a>(
    manifest: &'a Manifest,
    dir_path: &Path,
) -> Result<VersionedManifest<'a>> {
    let version = check_version(manifest).ok_or_else(|| {
        Error::invalid_field(
            ManifestField::Version,
            format!(
                "{} is not a valid SemVer version: {}",
                error_prefix(ManifestField::Version, manifest, dir_path),
                received(manifest, ManifestField::Version)
            ),
        )
    })?;

    Ok(VersionedManifest { manifest, version })
}

/// Validates the `private` field.
///
/// # Errors
///
/// Returns [`Error::InvalidField`] unless `private` is the boolean `true`.
pub fn validate_private(manifest: &Manifest, dir_path: &Path) -> Result<()> {
    check_private(manifest).ok_or_else(|| {
        Error::invalid_field(
            ManifestField::Private,
            format!(
                "{} must be \"true\" if \"{}\" is present. Received: {}",
                error_prefix(ManifestField::Private, manifest, dir_path),
                ManifestField::Workspaces,
                received(manifest, ManifestField::Private)
            ),
        )
    })
}

/// Validates the `workspaces` field and returns its patterns.
///
/// # Errors
///
/// Returns [`Error::InvalidField`] unless `workspaces` is a non-empty array
/// of strings.
pub fn validate_workspaces<'a>(manifest: &'a Manifest, dir_path: &Path) -> Result<Vec<&'a str>> {
    check_workspaces(manifest).ok_or_else(|| {
        Error::invalid_field(
            ManifestField::Workspaces,
            format!(
                "{} must be a non-empty array if present. Received: {}",
                error_prefix(ManifestField::Workspaces, manifest, dir_path),
                received(manifest, ManifestField::Workspaces)
            ),
        )
    })
}

/// Validates a single-package manifest: `version` first, then `name`.
///
/// # Errors
///
/// Returns the first [`Error::InvalidField`] encountered.
pub fn validate_polyrepo_manifest<'a>(
    manifest: &'a Manifest,
    dir_path: &Path,
) -> Result<PolyrepoManifest<'a>> {
    let version = validate_version(manifest, dir_path)?.version();
    let name = validate_name(manifest, dir_path)?;

    Ok(PolyrepoManifest {
        manifest,
        name,
        version,
    })
}

/// Validates a monorepo root: `workspaces` first, then `private`.
///
/// The version was already proven by [`validate_version`] and is not
/// checked again.
///
/// # Errors
///
/// Returns the first [`Error::InvalidField`] encountered.
pub fn validate_monorepo_manifest<'a>(
    manifest: VersionedManifest<'a>,
    dir_path: &Path,
) -> Result<MonorepoManifest<'a>> {
    let workspaces = validate_workspaces(manifest.manifest, dir_path)?;
    validate_private(manifest.manifest, dir_path)?;

    Ok(MonorepoManifest {
        manifest: manifest.manifest,
        version: manifest.version,
        workspaces,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PATH: &str = "fooPath";

    fn manifest(value: Value) -> Manifest {
        serde_json::from_value(value).unwrap()
    }

    fn path() -> &'static Path {
        Path::new(PATH)
    }

    #[test]
    fn test_valid_version_passes_through() {
        let m = manifest(json!({ "version": "1.0.0" }));

        let versioned = validate_version(&m, path()).unwrap();
        assert_eq!(versioned.version(), "1.0.0");
        assert_eq!(*versioned, m);
    }

    #[test]
    fn test_invalid_version() {
        for bad in [json!("foo"), json!("v1.0.0"), json!(null), json!(true)] {
            let m = manifest(json!({ "version": bad }));
            let err = validate_version(&m, path()).unwrap_err();

            assert_eq!(err.field(), Some(ManifestField::Version));
            assert!(err.to_string().contains("\"version\""));
        }

        let m = manifest(json!({ "name": "foo-name" }));
        let err = validate_version(&m, path()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"foo-name\" manifest \"version\" is not a valid SemVer version: undefined"
        );
    }

    #[test]
    fn test_version_error_without_name_references_path() {
        let m = manifest(json!({ "version": "v1.0.0" }));
        let err = validate_version(&m, path()).unwrap_err();

        assert_eq!(
            err.to_string(),
            "\"version\" of manifest in \"fooPath\" is not a valid SemVer version: v1.0.0"
        );
    }

    #[test]
    fn test_valid_name_passes_through() {
        let m = manifest(json!({ "name": "foo-name" }));
        assert_eq!(validate_name(&m, path()).unwrap(), "foo-name");
    }

    #[test]
    fn test_invalid_name() {
        for bad in [json!(1), json!(""), json!(null), json!(true)] {
            let m = manifest(json!({ "name": bad }));
            let err = validate_name(&m, path()).unwrap_err();

            assert_eq!(
                err.to_string(),
                "Manifest in \"fooPath\" does not have a valid \"name\" field."
            );
        }
    }

    #[test]
    fn test_polyrepo_manifest() {
        let m = manifest(json!({ "name": "fooName", "version": "1.0.0", "extra": [1, 2] }));

        let polyrepo = validate_polyrepo_manifest(&m, path()).unwrap();
        assert_eq!(polyrepo.name(), "fooName");
        assert_eq!(polyrepo.version(), "1.0.0");
        assert_eq!(polyrepo.get_raw("extra"), Some(&json!([1, 2])));
    }

    #[test]
    fn test_polyrepo_reports_version_before_name() {
        let m = manifest(json!({ "name": "", "version": "bad" }));

        let err = validate_polyrepo_manifest(&m, path()).unwrap_err();
        assert_eq!(err.field(), Some(ManifestField::Version));

        let m = manifest(json!({ "version": "1.0.0" }));
        let err = validate_polyrepo_manifest(&m, path()).unwrap_err();
        assert_eq!(err.field(), Some(ManifestField::Name));
    }

    #[test]
    fn test_monorepo_manifest() {
        let m = manifest(json!({
            "private": true,
            "version": "1.0.0",
            "workspaces": ["a", "b"]
        }));

        let monorepo =
            validate_monorepo_manifest(validate_version(&m, path()).unwrap(), path()).unwrap();
        assert_eq!(monorepo.workspaces(), &["a", "b"]);
        assert_eq!(monorepo.version(), "1.0.0");
        assert_eq!(*monorepo, m);
    }

    #[test]
    fn test_monorepo_invalid_workspaces() {
        for bad in [json!([]), json!("foo"), json!({ "packages": ["a"] }), json!([1])] {
            let m = manifest(json!({
                "private": true,
                "version": "1.0.0",
                "workspaces": bad
            }));

            let err = validate_monorepo_manifest(validate_version(&m, path()).unwrap(), path())
                .unwrap_err();
            let message = err.to_string();

            assert_eq!(err.field(), Some(ManifestField::Workspaces));
            assert!(message.starts_with("\"workspaces\" of manifest in \"fooPath\""));
            assert!(message.contains("non-empty array"));
        }
    }

    #[test]
    fn test_monorepo_invalid_private() {
        for bad in [json!(false), json!({}), json!("true"), json!(1)] {
            let m = manifest(json!({
                "private": bad,
                "version": "1.0.0",
                "workspaces": ["a", "b"]
            }));

            let err = validate_monorepo_manifest(validate_version(&m, path()).unwrap(), path())
                .unwrap_err();
            let message = err.to_string();

            assert_eq!(err.field(), Some(ManifestField::Private));
            assert!(message.starts_with("\"private\" of manifest in \"fooPath\""));
            assert!(message.contains("must be \"true\""));
        }
    }

    #[test]
    fn test_monorepo_checks_workspaces_before_private() {
        let m = manifest(json!({ "version": "1.0.0", "workspaces": [] }));

        let err =
            validate_monorepo_manifest(validate_version(&m, path()).unwrap(), path()).unwrap_err();
        assert_eq!(err.field(), Some(ManifestField::Workspaces));
    }

    #[test]
    fn test_monorepo_errors_prefer_package_name() {
        let m = manifest(json!({
            "name": "root",
            "private": false,
            "version": "1.0.0",
            "workspaces": ["packages/*"]
        }));

        let err =
            validate_monorepo_manifest(validate_version(&m, path()).unwrap(), path()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "\"root\" manifest \"private\" must be \"true\" if \"workspaces\" is present. Received: false"
        );
    }
}
