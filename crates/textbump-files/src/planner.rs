use std::collections::HashSet;
use std::path::{Path, PathBuf};

use glob::MatchOptions;
use textbump_config::FileConfig;
use textbump_format::{FormatContext, TextFormatter};
use tracing::{debug, warn};

use crate::change::{Newline, PlannedChange};
use crate::error::FilesError;

const GLOB_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Plans the rewrite of every file selected by `config`.
///
/// Nothing is written. The first file that fails stops planning and no
/// changes are returned.
///
/// # Errors
///
/// Returns `FilesError::FileGlob` if the glob selects no files,
/// `FilesError::VersionNotFound` if a selected file does not contain the
/// search text, `FilesError::Format` if a pattern cannot be formatted, and
/// `FilesError::OutsideRoot` if a matched file resolves outside the project
/// root, and read errors from the filesystem. Unreadable directories met
/// while walking the glob are skipped.
pub fn collect_planned_changes(
    project_root: &Path,
    config: &FileConfig,
    formatter: &TextFormatter,
) -> Result<Vec<PlannedChange>, FilesError> {
    let project_root = project_root
        .canonicalize()
        .map_err(|source| FilesError::Read {
            path: project_root.to_path_buf(),
            source,
        })?;

    let files = discover_files(&project_root, &config.file_glob)?;
    if files.is_empty() {
        return Err(FilesError::FileGlob {
            root: project_root,
            pattern: config.file_glob.clone(),
        });
    }

    files
        .into_iter()
        .map(|file| planned_change_for(file, config, formatter, &project_root))
        .collect()
}

/// Plans every file group in order and returns the changes as one list.
///
/// # Errors
///
/// Fails on the first group that fails (see [`collect_planned_changes`]), or
/// with `FilesError::OverlappingGroups` when two groups select the same file.
pub fn collect_all_planned_changes(
    project_root: &Path,
    configs: &[FileConfig],
    formatter: &TextFormatter,
) -> Result<Vec<PlannedChange>, FilesError> {
    let mut seen = HashSet::new();
    let mut changes = Vec::new();

    for config in configs {
        for change in collect_planned_changes(project_root, config, formatter)? {
            if !seen.insert(change.file().to_path_buf()) {
                return Err(FilesError::OverlappingGroups {
                    file: change.relative_file().to_path_buf(),
                });
            }
            changes.push(change);
        }
    }

    Ok(changes)
}

fn discover_files(project_root: &Path, file_glob: &str) -> Result<Vec<PathBuf>, FilesError> {
    if Path::new(file_glob).is_absolute() {
        return Err(FilesError::AbsoluteGlob {
            pattern: file_glob.to_string(),
        });
    }

    let root = project_root.to_str().ok_or_else(|| FilesError::NonUtf8Path {
        path: project_root.to_path_buf(),
    })?;
    let escaped_root = glob::Pattern::escape(root);
    let pattern_path = Path::new(&escaped_root).join(file_glob);
    let full_pattern = pattern_path
        .to_str()
        .ok_or_else(|| FilesError::NonUtf8Path {
            path: pattern_path.clone(),
        })?;

    let entries =
        glob::glob_with(full_pattern, GLOB_OPTIONS).map_err(|source| FilesError::GlobPattern {
            pattern: file_glob.to_string(),
            source,
        })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = match entry {
            Ok(path) => path,
            Err(err) => {
                warn!(
                    pattern = file_glob,
                    path = %err.path().display(),
                    error = %err.error(),
                    "skipping unreadable path"
                );
                continue;
            }
        };
        if !path.is_file() {
            continue;
        }

        let resolved = path.canonicalize().map_err(|source| FilesError::Read {
            path: path.clone(),
            source,
        })?;
        if !resolved.starts_with(project_root) {
            return Err(FilesError::OutsideRoot {
                file: resolved,
                root: project_root.to_path_buf(),
            });
        }
        files.push(resolved);
    }
    files.sort();
    files.dedup();

    debug!(pattern = file_glob, count = files.len(), "discovered files");
    Ok(files)
}

fn planned_change_for(
    file: PathBuf,
    config: &FileConfig,
    formatter: &TextFormatter,
    project_root: &Path,
) -> Result<PlannedChange, FilesError> {
    let search_text = formatter.format(&config.search_format_pattern, FormatContext::Search)?;

    let raw = std::fs::read(&file).map_err(|source| FilesError::Read {
        path: file.clone(),
        source,
    })?;
    let newline = Newline::detect(&raw);
    let file_text = decode_text(&file, raw)?;

    let replace_text = formatter.format(&config.replace_format_pattern, FormatContext::Replace)?;
    let updated_text = file_text.replace(&search_text, &replace_text);

    if updated_text == file_text {
        let relative = file.strip_prefix(project_root).unwrap_or(&file);
        return Err(FilesError::VersionNotFound {
            file: relative.to_path_buf(),
            search_pattern: config.search_format_pattern.clone(),
        });
    }

    debug!(
        file = %file.display(),
        newline = ?newline,
        "planned change"
    );

    PlannedChange::new(file, project_root, file_text, updated_text, newline)
}

/// Decodes UTF-8 and folds `\r\n` and lone `\r` into `\n`.
fn decode_text(file: &Path, raw: Vec<u8>) -> Result<String, FilesError> {
    let text = String::from_utf8(raw).map_err(|err| FilesError::Read {
        path: file.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidData, err),
    })?;

    if text.contains('\r') {
        Ok(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Ok(text)
    }
}
