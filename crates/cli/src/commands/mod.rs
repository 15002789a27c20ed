//! Command implementations
//!
//! Each command returns the text destined for stdout and leaves writing it to
//! the caller.

pub mod validate;
pub mod version;
pub mod workspaces;

use crate::cli::Commands;
use crate::errors::CliError;
use std::path::Path;
use tracing::instrument;

/// Run `command` against the repository rooted at `root`.
#[instrument(skip_all, fields(root = %root.display()))]
pub async fn execute(command: Commands, root: &Path) -> Result<String, CliError> {
    match command {
        Commands::Validate => {
            ensure_root(root).await?;
            let kind = validate::execute_validate(root).await?;
            Ok(kind.to_string())
        }
        Commands::Workspaces { recursive, format } => {
            ensure_root(root).await?;
            workspaces::execute_workspaces(root, recursive, format).await
        }
        Commands::Version => Ok(version::get_version_info()),
    }
}

async fn ensure_root(root: &Path) -> Result<(), CliError> {
    match tokio::fs::metadata(root).await {
        Ok(metadata) if metadata.is_dir() => Ok(()),
        Ok(_) => Err(CliError::invalid_root(root)),
        Err(source) => Err(root_error(root, source)),
    }
}

fn root_error(root: &Path, source: std::io::Error) -> CliError {
    if source.kind() == std::io::ErrorKind::NotFound {
        CliError::invalid_root(root)
    } else {
        CliError::root_access(root, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_ensure_root_accepts_directory() {
        let temp_dir = TempDir::new().unwrap();
        ensure_root(temp_dir.path()).await.unwrap();
    }

    #[tokio::test]
    async fn test_ensure_root_rejects_missing_and_files() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("package.json");
        std::fs::write(&file, "{}").unwrap();

        for path in [temp_dir.path().join("missing"), file] {
            let err = ensure_root(&path).await.unwrap_err();
            assert!(matches!(err, CliError::InvalidRoot { .. }), "{err:?}");
        }
    }

    #[test]
    fn test_root_error_keeps_other_io_errors() {
        let root = Path::new("locked");

        let err = root_error(root, Error::from(ErrorKind::PermissionDenied));
        match err {
            CliError::RootAccess { path, source } => {
                assert_eq!(path, root);
                assert_eq!(source.kind(), ErrorKind::PermissionDenied);
            }
            other => panic!("Expected RootAccess error, got {other:?}"),
        }

        let err = root_error(root, Error::from(ErrorKind::NotFound));
        assert!(matches!(err, CliError::InvalidRoot { .. }));
    }
}
