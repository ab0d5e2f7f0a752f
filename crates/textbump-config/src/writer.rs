use std::path::Path;

use semver::Version;
use toml_edit::{DocumentMut, value};

use crate::error::ConfigError;

/// Replaces `current_version` in the config file, leaving comments and layout
/// untouched.
///
/// # Errors
///
/// Returns an error if the config cannot be read, parsed, or written, or if it
/// has no `current_version` key.
pub fn write_current_version(path: &Path, version: &Version) -> Result<(), ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut doc = content
        .parse::<DocumentMut>()
        .map_err(|source| ConfigError::Edit {
            path: path.to_path_buf(),
            source,
        })?;

    let item = doc
        .get_mut("current_version")
        .ok_or_else(|| ConfigError::MissingField {
            path: path.to_path_buf(),
            field: "current_version",
        })?;

    // Keep the decor around the old value so trailing comments survive.
    let decor = item.as_value().map(|v| v.decor().clone());
    *item = value(version.to_string());
    if let (Some(decor), Some(new_value)) = (decor, item.as_value_mut()) {
        *new_value.decor_mut() = decor;
    }

    std::fs::write(path, doc.to_string()).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}
