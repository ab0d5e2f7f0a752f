use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config at '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to edit config at '{path}'")]
    Edit {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },

    #[error("missing required field '{field}' in '{path}'")]
    MissingField { path: PathBuf, field: &'static str },

    #[error("invalid version string '{version}' in '{path}'")]
    InvalidVersion {
        path: PathBuf,
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("no {file_name} found traversing from '{start_dir}'")]
    NotFound {
        start_dir: PathBuf,
        file_name: &'static str,
    },

    #[error("config at '{path}' has no [[files]] entries")]
    NoFiles { path: PathBuf },
}
