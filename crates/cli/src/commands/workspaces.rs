use crate::cli::OutputFormat;
use crate::errors::CliError;
use pkgscan_workspaces::{
    get_package_manifest, get_workspace_locations, validate_monorepo_manifest, validate_version,
};
use std::path::Path;
use tracing::{debug, instrument};

/// Lists the workspaces of the monorepo rooted at `root`.
///
/// The root manifest must be a valid monorepo. Locations are relative to
/// `root`, with nested workspaces following their parent when `recursive`
/// is set.
#[instrument(skip_all, fields(root = %root.display(), recursive = recursive))]
pub async fn execute_workspaces(
    root: &Path,
    recursive: bool,
    format: OutputFormat,
) -> Result<String, CliError> {
    let manifest = get_package_manifest(root).await?;
    let monorepo = validate_monorepo_manifest(validate_version(&manifest, root)?, root)?;

    let locations = get_workspace_locations(monorepo.workspaces(), root, recursive).await?;
    debug!(count = locations.len(), "Resolved workspace locations");

    let locations: Vec<String> = locations
        .iter()
        .map(|location| location.display().to_string())
        .collect();

    match format {
        OutputFormat::Text => Ok(locations.join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(&locations)
            .map_err(|source| CliError::Serialization { source }),
    }
}
