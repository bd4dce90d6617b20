use std::io;
use thiserror::Error;

/// Errors produced while parsing a `.dbc` file.
#[derive(Debug, Error)]
pub enum DbcParseError {
    #[error("Not a valid .dbc file: {path}")]
    InvalidExtension { path: String },
    #[error("Failed to open '{path}'. \nError: {source}")]
    OpenFile {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed while reading '{path}'. \nError: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Malformed DBC content at line {line}: {reason}")]
    Syntax { line: usize, reason: String },
}

impl DbcParseError {
    pub(crate) fn syntax(line: usize, reason: impl Into<String>) -> Self {
        DbcParseError::Syntax {
            line,
            reason: reason.into(),
        }
    }
}
