//! Error types for manifest and workspace operations.

use crate::manifest::ManifestField;
use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for manifest and workspace operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading manifests or resolving workspaces.
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// I/O error occurred.
    #[error("I/O error during {operation}{}: {source}", path.as_ref().map(|p| format!(" at {}", p.display())).unwrap_or_default())]
    #[diagnostic(
        code(pkgscan::workspaces::io_error),
        help(
            "Check that the referenced paths exist and that you have permission to read or write them"
        )
    )]
    Io {
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
        /// Optional path where the error occurred.
        path: Option<PathBuf>,
        /// Description of the operation being performed.
        operation: String,
    },

    /// The file is not syntactically valid JSON.
    ///
    /// The message is the parser's own, unchanged.
    #[error("{source}")]
    #[diagnostic(
        code(pkgscan::workspaces::json_error),
        help("Ensure the file contains valid JSON")
    )]
    Json {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
        /// Optional path to the file being parsed.
        path: Option<PathBuf>,
    },

    /// The file parsed to `null`, an array, or a scalar.
    #[error("Assumed JSON file at path \"{}\" parsed to a non-object value.", path.display())]
    #[diagnostic(
        code(pkgscan::workspaces::non_object_value),
        help("A package manifest must contain a single JSON object at the top level")
    )]
    NonObjectValue {
        /// Path to the offending file.
        path: PathBuf,
    },

    /// A manifest field is missing or malformed.
    #[error("{message}")]
    #[diagnostic(
        code(pkgscan::workspaces::invalid_field),
        help(
            "Monorepo roots need a SemVer \"version\", a non-empty \"workspaces\" array and \"private\": true; packages need a \"name\" and a SemVer \"version\""
        )
    )]
    InvalidField {
        /// The field that failed validation.
        field: ManifestField,
        /// Human-readable description naming the field and the received value.
        message: String,
    },

    /// A workspace pattern is not a valid glob.
    #[error("Invalid workspace pattern '{pattern}': {message}")]
    #[diagnostic(
        code(pkgscan::workspaces::invalid_glob),
        help("Workspace patterns use glob syntax, e.g. \"packages/*\"")
    )]
    InvalidGlob {
        /// The offending pattern.
        pattern: String,
        /// Description of the pattern error.
        message: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidField`] for the given field.
    pub(crate) fn invalid_field(field: ManifestField, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// The manifest field that failed validation, if this is a field error.
    #[must_use]
    pub const fn field(&self) -> Option<ManifestField> {
        match self {
            Self::InvalidField { field, .. } => Some(*field),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            path: None,
            operation: "file operation".to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Json { source, path: None }
    }
}
