use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FilesError {
    #[error(transparent)]
    Format(#[from] textbump_format::FormatError),

    #[error("glob pattern '{pattern}' matched no files in '{root}'")]
    FileGlob { root: PathBuf, pattern: String },

    #[error("invalid glob pattern '{pattern}'")]
    GlobPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("glob pattern '{pattern}' must be relative to the project root")]
    AbsoluteGlob { pattern: String },

    #[error("path '{path}' is not valid UTF-8")]
    NonUtf8Path { path: PathBuf },

    #[error("text produced by '{search_pattern}' was not found in '{file}'")]
    VersionNotFound { file: PathBuf, search_pattern: String },

    #[error("file '{file}' is not inside project root '{root}'")]
    OutsideRoot { file: PathBuf, root: PathBuf },

    #[error("planned change for '{path}' does not modify the file")]
    Unchanged { path: PathBuf },

    #[error("file '{file}' is selected by more than one file group")]
    OverlappingGroups { file: PathBuf },

    #[error("failed to read '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file '{path}' no longer exists; planned change is not valid")]
    InvalidChange { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::FilesError;

    #[test]
    fn version_not_found_names_file_and_pattern() {
        let err = FilesError::VersionNotFound {
            file: PathBuf::from("src/lib.rs"),
            search_pattern: "version = {current_version}".to_string(),
        };

        let msg = err.to_string();

        assert!(msg.contains("src/lib.rs"));
        assert!(msg.contains("version = {current_version}"));
    }

    #[test]
    fn file_glob_names_pattern() {
        let err = FilesError::FileGlob {
            root: PathBuf::from("/project"),
            pattern: "*.nothing".to_string(),
        };

        assert!(err.to_string().contains("'*.nothing'"));
    }

    #[test]
    fn format_error_converts_via_from() {
        let format_err = textbump_format::FormatError::Pattern {
            template: "{".to_string(),
            reason: textbump_format::TemplateSyntaxError::Unterminated,
        };

        let err: FilesError = format_err.into();

        assert!(matches!(err, FilesError::Format(_)));
    }
}
