use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("configuration error")]
    Config(#[from] textbump_config::ConfigError),

    #[error("failed to update files")]
    Files(#[from] textbump_files::FilesError),

    #[error("failed to determine current directory")]
    CurrentDir(#[source] std::io::Error),

    #[error("failed to resolve config path '{path}'")]
    ConfigPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::CliError;

    #[test]
    fn files_error_converts_via_from() {
        let files_err = textbump_files::FilesError::FileGlob {
            root: PathBuf::from("/project"),
            pattern: "*.txt".to_string(),
        };

        let cli_err: CliError = files_err.into();

        assert!(matches!(cli_err, CliError::Files(_)));
    }

    #[test]
    fn config_error_has_source_chain() {
        let config_err = textbump_config::ConfigError::NotFound {
            start_dir: PathBuf::from("/test"),
            file_name: ".textbump.toml",
        };
        let cli_err: CliError = config_err.into();

        let source = std::error::Error::source(&cli_err).expect("should have source");

        assert!(source.to_string().contains("/test"));
    }

    #[test]
    fn config_path_error_includes_path() {
        let err = CliError::ConfigPath {
            path: PathBuf::from("/missing/.textbump.toml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "test"),
        };

        assert!(err.to_string().contains("/missing/.textbump.toml"));
    }
}
