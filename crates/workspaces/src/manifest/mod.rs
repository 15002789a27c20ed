//! Parsed `package.json` manifests and their validated views.
//!
//! A [`Manifest`] is an open-ended JSON object. Validation never mutates it;
//! the validators in [`validate`] instead return borrowed views
//! ([`VersionedManifest`], [`PolyrepoManifest`], [`MonorepoManifest`]) whose
//! existence proves that particular fields are well-formed. Each view
//! dereferences to the unchanged manifest.

mod fields;
pub mod validate;

pub use fields::{DependencyField, EngineName, ManifestField};
pub use validate::{
    MonorepoManifest, PolyrepoManifest, VersionedManifest, validate_monorepo_manifest,
    validate_name, validate_polyrepo_manifest, validate_private, validate_version,
    validate_workspaces,
};

use crate::error::Result;
use crate::json::read_json_object_file;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// File name of every package manifest.
pub const PACKAGE_JSON: &str = "package.json";

/// A parsed `package.json` file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest(Map<String, Value>);

impl Manifest {
    /// Returns the value of a well-known field.
    #[must_use]
    pub fn get(&self, field: ManifestField) -> Option<&Value> {
        self.0.get(field.as_str())
    }

    /// Returns the value of an arbitrary key.
    #[must_use]
    pub fn get_raw(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the manifest has the given key at all, whatever its value.
    #[must_use]
    pub fn contains(&self, field: ManifestField) -> bool {
        self.0.contains_key(field.as_str())
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the manifest has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `name` field when it is a non-empty string.
    #[must_use]
    pub fn usable_name(&self) -> Option<&str> {
        self.get(ManifestField::Name)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Entries of a dependency category, sorted by package name.
    ///
    /// Entries whose range is not a string are skipped. A missing or
    /// non-object category yields an empty map.
    #[must_use]
    pub fn dependencies(&self, category: DependencyField) -> BTreeMap<&str, &str> {
        self.0
            .get(category.as_str())
            .and_then(Value::as_object)
            .map(|deps| {
                deps.iter()
                    .filter_map(|(name, range)| Some((name.as_str(), range.as_str()?)))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Version ranges declared under `engines` for the recognised tools.
    #[must_use]
    pub fn engines(&self) -> BTreeMap<EngineName, &str> {
        let Some(engines) = self.get(ManifestField::Engines).and_then(Value::as_object) else {
            return BTreeMap::new();
        };

        EngineName::ALL
            .into_iter()
            .filter_map(|engine| {
                let range = engines.get(engine.as_str())?.as_str()?;
                Some((engine, range))
            })
            .collect()
    }
}

impl From<Map<String, Value>> for Manifest {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl From<Manifest> for Value {
    fn from(manifest: Manifest) -> Self {
        Self::Object(manifest.0)
    }
}

/// Reads the `package.json` file in the given directory.
///
/// The manifest is not validated.
///
/// # Errors
///
/// Returns any error from [`read_json_object_file`].
pub async fn get_package_manifest(containing_dir: &Path) -> Result<Manifest> {
    read_json_object_file(&containing_dir.join(PACKAGE_JSON)).await
}
