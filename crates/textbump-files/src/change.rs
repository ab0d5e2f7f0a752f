use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use similar::TextDiff;

use crate::error::FilesError;

/// Line terminator detected from the first line of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Newline {
    Lf,
    CrLf,
}

impl Newline {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
        }
    }

    /// Inspects only the terminator of the first line. A lone `\r`, a file
    /// without any terminator, and an empty file all yield `None`.
    #[must_use]
    pub fn detect(raw: &[u8]) -> Option<Self> {
        let end = raw.iter().position(|&b| b == b'\n' || b == b'\r')?;
        match (raw[end], raw.get(end + 1)) {
            (b'\r', Some(b'\n')) => Some(Self::CrLf),
            (b'\n', _) => Some(Self::Lf),
            _ => None,
        }
    }

    /// Converts `\n`-normalized text to this terminator.
    #[must_use]
    pub fn apply(self, text: &str) -> Cow<'_, str> {
        match self {
            Self::Lf => Cow::Borrowed(text),
            Self::CrLf => Cow::Owned(text.replace('\n', "\r\n")),
        }
    }
}

/// A validated, not yet applied rewrite of one file.
#[derive(Debug, Clone)]
pub struct PlannedChange {
    file: PathBuf,
    relative_file: PathBuf,
    old_content: String,
    new_content: String,
    newline: Option<Newline>,
    diff: OnceLock<String>,
}

impl PlannedChange {
    pub(crate) fn new(
        file: PathBuf,
        project_root: &Path,
        old_content: String,
        new_content: String,
        newline: Option<Newline>,
    ) -> Result<Self, FilesError> {
        let relative_file = file
            .strip_prefix(project_root)
            .map_err(|_| FilesError::OutsideRoot {
                file: file.clone(),
                root: project_root.to_path_buf(),
            })?
            .to_path_buf();

        if old_content == new_content {
            return Err(FilesError::Unchanged { path: relative_file });
        }

        Ok(Self {
            file,
            relative_file,
            old_content,
            new_content,
            newline,
            diff: OnceLock::new(),
        })
    }

    #[must_use]
    pub fn file(&self) -> &Path {
        &self.file
    }

    #[must_use]
    pub fn relative_file(&self) -> &Path {
        &self.relative_file
    }

    #[must_use]
    pub fn old_content(&self) -> &str {
        &self.old_content
    }

    #[must_use]
    pub fn new_content(&self) -> &str {
        &self.new_content
    }

    #[must_use]
    pub fn newline(&self) -> Option<Newline> {
        self.newline
    }

    /// Unified diff of old against new content, labelled with the project
    /// relative path. Rendered on first access and cached.
    #[must_use]
    pub fn change_diff(&self) -> &str {
        self.diff.get_or_init(|| {
            let label = self.relative_file.display().to_string();
            let diff = TextDiff::from_lines(&self.old_content, &self.new_content);
            diff.unified_diff().header(&label, &label).to_string()
        })
    }
}
