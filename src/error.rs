//! Errors raised while loading the `.tab` tables.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TableError>;

/// Why a single line did not match its grammar.
///
/// Produced by the pure line parsers, which do not know which file they
/// are reading; `TableError::MalformedTableLine` adds that context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected {expected} fields, found {found}")]
    FieldCount { expected: &'static str, found: usize },

    #[error("missing `{0}` separator")]
    MissingSeparator(char),

    #[error("{field} `{value}` is not an integer")]
    BadInteger { field: &'static str, value: String },

    #[error("empty {0} name")]
    EmptyName(&'static str),

    #[error("unknown bif kind `{0}`")]
    UnknownKind(String),
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("{}:{line_no}: malformed line `{line}`: {reason}", .file.display())]
    MalformedTableLine {
        file: PathBuf,
        line_no: usize,
        line: String,
        reason: LineError,
    },

    #[error("cannot read table {}: {source}", .path.display())]
    MissingFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
