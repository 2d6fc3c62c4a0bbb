//! Attribute set loader.
//!
//! Reads an action metadata file (`action.yml`) and returns the parsed
//! [`ActionMetadata`]. Nothing is written.

use std::io::ErrorKind;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::LoadError;
use crate::types::ActionMetadata;

/// Load the action metadata at `path`.
///
/// Returns `LoadError::NotFound` if absent,
/// `LoadError::Parse` (with path + line context) if malformed YAML.
pub fn load_metadata(path: &Path) -> Result<ActionMetadata, LoadError> {
    read_yaml(path)
}

/// Parse already-read metadata text; `path` is only used for error context.
pub fn parse_metadata(path: &Path, contents: &str) -> Result<ActionMetadata, LoadError> {
    parse_yaml(path, contents)
}

pub(crate) fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    parse_yaml(path, &contents)
}

fn parse_yaml<T: DeserializeOwned>(path: &Path, contents: &str) -> Result<T, LoadError> {
    serde_yaml::from_str(contents).map_err(|e| LoadError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
