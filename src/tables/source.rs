//! Whole-file access to one `.tab` table.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LineError, Result, TableError};

/// Text of one table plus the path it came from, so stages can report
/// errors against the right file.
#[derive(Debug, Clone)]
pub struct SourceTable {
    path: PathBuf,
    text: String,
}

impl SourceTable {
    pub fn read(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Self { path, text }),
            Err(source) => Err(TableError::MissingFile { path, source }),
        }
    }

    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Trimmed data lines with their 1-based line numbers. Blank lines and
    /// `#` comments are dropped.
    pub fn data_lines(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.text
            .lines()
            .enumerate()
            .map(|(idx, line)| (idx + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
    }

    pub fn malformed(&self, line_no: usize, line: &str, reason: LineError) -> TableError {
        TableError::MalformedTableLine {
            file: self.path.clone(),
            line_no,
            line: line.to_string(),
            reason,
        }
    }
}
