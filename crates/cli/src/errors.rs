//! CLI error types rendered through miette diagnostics

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific error types with diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// A manifest could not be read or failed validation.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Workspaces(#[from] pkgscan_workspaces::Error),

    #[error("Repository root \"{}\" is not a directory", path.display())]
    #[diagnostic(
        code(pkgscan::cli::invalid_root),
        help("Pass --root or set PKGSCAN_ROOT to a directory containing package.json")
    )]
    InvalidRoot { path: PathBuf },

    #[error("Failed to access repository root \"{}\"", path.display())]
    #[diagnostic(
        code(pkgscan::cli::root_access),
        help("Check that you have permission to read the repository root")
    )]
    RootAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize command output")]
    #[diagnostic(code(pkgscan::cli::serialization_error))]
    Serialization {
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write command output")]
    #[diagnostic(
        code(pkgscan::cli::output_error),
        help("Check that stdout is still open, e.g. that a downstream pipe did not exit")
    )]
    Output {
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub fn invalid_root(path: impl Into<PathBuf>) -> Self {
        Self::InvalidRoot { path: path.into() }
    }

    pub fn root_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::RootAccess {
            path: path.into(),
            source,
        }
    }
}
