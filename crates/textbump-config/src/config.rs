use std::path::{Path, PathBuf};

use semver::Version;
use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_FILE_NAME: &str = ".textbump.toml";

const DEFAULT_SEARCH_FORMAT_PATTERN: &str = "{current_version}";
const DEFAULT_REPLACE_FORMAT_PATTERN: &str = "{new_version}";

/// One group of files and the patterns used to rewrite them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Glob pattern, relative to the project root.
    pub file_glob: String,
    #[serde(default = "default_search_format_pattern")]
    pub search_format_pattern: String,
    #[serde(default = "default_replace_format_pattern")]
    pub replace_format_pattern: String,
}

impl FileConfig {
    #[must_use]
    pub fn new(file_glob: impl Into<String>) -> Self {
        Self {
            file_glob: file_glob.into(),
            search_format_pattern: default_search_format_pattern(),
            replace_format_pattern: default_replace_format_pattern(),
        }
    }

    #[must_use]
    pub fn with_search_format_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.search_format_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_replace_format_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.replace_format_pattern = pattern.into();
        self
    }
}

fn default_search_format_pattern() -> String {
    DEFAULT_SEARCH_FORMAT_PATTERN.to_string()
}

fn default_replace_format_pattern() -> String {
    DEFAULT_REPLACE_FORMAT_PATTERN.to_string()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub current_version: Version,
    pub files: Vec<FileConfig>,
}

/// A config file located on disk together with the project it governs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredConfig {
    /// Directory containing the config file.
    pub root: PathBuf,
    pub path: PathBuf,
    pub config: Config,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    current_version: Option<String>,
    #[serde(default)]
    files: Vec<FileConfig>,
}

/// Parses config text. `path` is only used for error reporting.
///
/// # Errors
///
/// Returns `ConfigError::Parse` for malformed TOML, `ConfigError::MissingField`
/// or `ConfigError::InvalidVersion` for a bad `current_version`, and
/// `ConfigError::NoFiles` when no file groups are configured.
pub fn parse_config(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let raw: RawConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let version_str = raw
        .current_version
        .ok_or_else(|| ConfigError::MissingField {
            path: path.to_path_buf(),
            field: "current_version",
        })?;

    let current_version =
        Version::parse(&version_str).map_err(|source| ConfigError::InvalidVersion {
            path: path.to_path_buf(),
            version: version_str.clone(),
            source,
        })?;

    if raw.files.is_empty() {
        return Err(ConfigError::NoFiles {
            path: path.to_path_buf(),
        });
    }

    Ok(Config {
        current_version,
        files: raw.files,
    })
}

/// # Errors
///
/// Returns `ConfigError::Read` if the file cannot be read, otherwise see
/// [`parse_config`].
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config(&content, path)
}

/// Walks up from `start_dir` until a directory containing [`CONFIG_FILE_NAME`]
/// is found.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no ancestor has a config file, otherwise
/// see [`load_config`].
pub fn discover_config(start_dir: &Path) -> Result<DiscoveredConfig, ConfigError> {
    let start_dir = start_dir
        .canonicalize()
        .map_err(|source| ConfigError::Read {
            path: start_dir.to_path_buf(),
            source,
        })?;

    let mut current = start_dir.as_path();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            let config = load_config(&candidate)?;
            return Ok(DiscoveredConfig {
                root: current.to_path_buf(),
                path: candidate,
                config,
            });
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => {
                return Err(ConfigError::NotFound {
                    start_dir,
                    file_name: CONFIG_FILE_NAME,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
current_version = "1.2.3"

[[files]]
file_glob = "Cargo.toml"
search_format_pattern = 'version = "{current_version}"'
replace_format_pattern = 'version = "{new_version}"'

[[files]]
file_glob = "docs/**/*.md"
"#;

    fn path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    #[test]
    fn parses_files_in_order() {
        let config = parse_config(SAMPLE, &path()).expect("valid config");

        assert_eq!(config.current_version, Version::new(1, 2, 3));
        assert_eq!(config.files.len(), 2);
        assert_eq!(config.files[0].file_glob, "Cargo.toml");
        assert_eq!(
            config.files[0].search_format_pattern,
            r#"version = "{current_version}""#
        );
        assert_eq!(config.files[1].file_glob, "docs/**/*.md");
    }

    #[test]
    fn patterns_default_to_plain_versions() {
        let config = parse_config(SAMPLE, &path()).expect("valid config");

        assert_eq!(config.files[1], FileConfig::new("docs/**/*.md"));
        assert_eq!(config.files[1].search_format_pattern, "{current_version}");
        assert_eq!(config.files[1].replace_format_pattern, "{new_version}");
    }

    #[test]
    fn missing_version_is_error() {
        let err = parse_config("[[files]]\nfile_glob = \"a\"\n", &path())
            .expect_err("missing version");

        assert!(matches!(
            err,
            ConfigError::MissingField {
                field: "current_version",
                ..
            }
        ));
    }

    #[test]
    fn invalid_version_is_error() {
        let err = parse_config(
            "current_version = \"1.2\"\n[[files]]\nfile_glob = \"a\"\n",
            &path(),
        )
        .expect_err("invalid version");

        match err {
            ConfigError::InvalidVersion { version, .. } => assert_eq!(version, "1.2"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_files_is_error() {
        let err = parse_config("current_version = \"1.0.0\"\n", &path()).expect_err("no files");

        assert!(matches!(err, ConfigError::NoFiles { .. }));
    }

    #[test]
    fn unknown_field_is_parse_error() {
        let err = parse_config(
            "current_version = \"1.0.0\"\n[[files]]\nfile_glob = \"a\"\nsearch = \"x\"\n",
            &path(),
        )
        .expect_err("unknown field");

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn discover_walks_up_to_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), SAMPLE).expect("write config");
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).expect("create nested dirs");

        let discovered = discover_config(&nested).expect("should discover config");

        let root = dir.path().canonicalize().expect("path exists");
        assert_eq!(discovered.root, root);
        assert_eq!(discovered.path, root.join(CONFIG_FILE_NAME));
        assert_eq!(discovered.config.files.len(), 2);
    }

    #[test]
    fn discover_without_config_is_not_found() {
        let dir = tempfile::tempdir().expect("create temp dir");

        let err = discover_config(dir.path()).expect_err("no config");

        assert!(matches!(err, ConfigError::NotFound { .. }));
    }
}
