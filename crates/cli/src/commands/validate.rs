use pkgscan_workspaces::{
    ManifestField, Result, get_package_manifest, validate_monorepo_manifest,
    validate_polyrepo_manifest, validate_version,
};
use std::fmt;
use std::path::Path;
use tracing::{info, instrument};

/// Repository layout proven by a successful validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoKind {
    Polyrepo,
    Monorepo,
}

impl fmt::Display for RepoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Polyrepo => write!(f, "polyrepo"),
            Self::Monorepo => write!(f, "monorepo"),
        }
    }
}

/// Validates the manifest at `root` against the profile its shape implies.
///
/// A manifest declaring `workspaces` must be a valid monorepo root; any other
/// manifest must be a valid single package.
#[instrument(skip_all, fields(root = %root.display()))]
pub async fn execute_validate(root: &Path) -> Result<RepoKind> {
    let manifest = get_package_manifest(root).await?;

    let kind = if manifest.contains(ManifestField::Workspaces) {
        let monorepo = validate_monorepo_manifest(validate_version(&manifest, root)?, root)?;
        info!(
            version = monorepo.version(),
            workspaces = monorepo.workspaces().len(),
            "Validated monorepo manifest"
        );
        RepoKind::Monorepo
    } else {
        let package = validate_polyrepo_manifest(&manifest, root)?;
        info!(
            name = package.name(),
            version = package.version(),
            "Validated polyrepo manifest"
        );
        RepoKind::Polyrepo
    };

    Ok(kind)
}
