//! Manifest validation and recursive workspace discovery for `package.json`
//! repositories.
//!
//! A repository is either a *polyrepo*, with a single manifest at its root,
//! or a *monorepo*, whose private root manifest lists glob patterns under
//! `workspaces`. Any workspace may itself be a monorepo with its own
//! `workspaces`, and discovery can follow those nested roots transitively.
//!
//! # Modules
//!
//! - [`json`] - Reading JSON object files and writing pretty-printed JSON
//! - [`version`] - Strict SemVer checks and release categories
//! - [`manifest`] - The [`Manifest`] type, well-known field names, and validators
//! - [`discovery`] - Glob expansion of workspace patterns, optionally recursive
//!
//! # Validation
//!
//! Validators never modify a manifest. They return borrowed views whose
//! existence proves the relevant fields are well-formed:
//!
//! ```
//! use pkgscan_workspaces::{Manifest, validate_monorepo_manifest, validate_version};
//! use std::path::Path;
//!
//! let manifest: Manifest = serde_json::from_str(
//!     r#"{"version": "1.0.0", "private": true, "workspaces": ["packages/*"]}"#,
//! )?;
//! let dir = Path::new(".");
//!
//! let monorepo = validate_monorepo_manifest(validate_version(&manifest, dir)?, dir)?;
//! assert_eq!(monorepo.workspaces(), &["packages/*"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Discovery
//!
//! ```rust,ignore
//! use pkgscan_workspaces::{get_package_manifest, get_workspace_locations};
//! use pkgscan_workspaces::{validate_monorepo_manifest, validate_version};
//! use std::path::Path;
//!
//! let root = Path::new("/path/to/repo");
//! let manifest = get_package_manifest(root).await?;
//! let monorepo = validate_monorepo_manifest(validate_version(&manifest, root)?, root)?;
//!
//! for location in get_workspace_locations(monorepo.workspaces(), root, true).await? {
//!     println!("{}", location.display());
//! }
//! ```
//!
//! All I/O is asynchronous and sequential, so results are deterministic for a
//! given filesystem state.

pub mod discovery;
pub mod error;
pub mod json;
pub mod manifest;
pub mod version;

// Re-export error types
pub use error::{Error, Result};

// Re-export manifest types and validators
pub use manifest::{
    DependencyField, EngineName, Manifest, ManifestField, MonorepoManifest, PACKAGE_JSON,
    PolyrepoManifest, VersionedManifest, get_package_manifest, validate_monorepo_manifest,
    validate_name, validate_polyrepo_manifest, validate_private, validate_version,
    validate_workspaces,
};

// Re-export file helpers
pub use json::{read_json_object_file, write_json_file};

// Re-export SemVer helpers
pub use version::{ReleaseType, is_major_semver_diff, is_valid_semver, is_valid_semver_str};

// Re-export discovery
pub use discovery::{get_workspace_locations, get_workspace_locations_with_prefix};
