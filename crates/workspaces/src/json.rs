//! Reading and writing JSON files.

use crate::error::{Error, Result};
use crate::manifest::Manifest;
use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tokio::fs;

/// Reads the JSON file at `path` and returns its top-level object.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, [`Error::Json`] if it is
/// not valid JSON, and [`Error::NonObjectValue`] if it parses to `null`, an
/// array, or a scalar.
pub async fn read_json_object_file(path: &Path) -> Result<Manifest> {
    let content = fs::read_to_string(path).await.map_err(|e| Error::Io {
        source: e,
        path: Some(path.to_path_buf()),
        operation: "reading json file".to_string(),
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| Error::Json {
        source: e,
        path: Some(path.to_path_buf()),
    })?;

    match value {
        Value::Object(fields) => Ok(Manifest::from(fields)),
        _ => Err(Error::NonObjectValue {
            path: path.to_path_buf(),
        }),
    }
}

/// Writes `value` to `path` as two-space indented JSON followed by a newline.
///
/// Existing contents are replaced.
///
/// # Errors
///
/// Returns [`Error::Json`] if `value` cannot be serialized and [`Error::Io`]
/// if the file cannot be written.
pub async fn write_json_file<T>(path: &Path, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    let mut content = serde_json::to_string_pretty(value).map_err(|e| Error::Json {
        source: e,
        path: Some(path.to_path_buf()),
    })?;
    content.push('\n');

    fs::write(path, content).await.map_err(|e| Error::Io {
        source: e,
        path: Some(path.to_path_buf()),
        operation: "writing json file".to_string(),
    })
}
