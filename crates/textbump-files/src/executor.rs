use std::borrow::Cow;
use std::fs::OpenOptions;
use std::io::{BufWriter, ErrorKind, Write};

use tracing::debug;

use crate::change::PlannedChange;
use crate::error::FilesError;

/// Writes the new content of a planned change, restoring the file's original
/// line terminator.
///
/// The target is never created: if it disappeared after planning the change is
/// treated as invalid.
///
/// # Errors
///
/// Returns `FilesError::InvalidChange` if the file no longer exists and
/// `FilesError::Write` for any other I/O failure.
pub fn perform_change(change: &PlannedChange) -> Result<(), FilesError> {
    let path = change.file();
    let write_error = |source| FilesError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|source| match source.kind() {
            ErrorKind::NotFound => FilesError::InvalidChange {
                path: path.to_path_buf(),
            },
            _ => write_error(source),
        })?;

    let content = change
        .newline()
        .map_or(Cow::Borrowed(change.new_content()), |newline| {
            newline.apply(change.new_content())
        });

    let mut writer = BufWriter::new(file);
    writer
        .write_all(content.as_bytes())
        .map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    debug!(file = %change.relative_file().display(), "performed change");
    Ok(())
}

/// Performs changes in order, stopping at the first failure. Files written
/// before the failure keep their new content.
///
/// # Errors
///
/// Returns the first error from [`perform_change`].
pub fn perform_changes(changes: &[PlannedChange]) -> Result<(), FilesError> {
    changes.iter().try_for_each(perform_change)
}
