//! Error types for suffix table loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A suffix table source that could not be parsed or does not satisfy the
/// table invariants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A syntax error in `.sfx` source, with 1-based location.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        line: usize,
        column: usize,
        message: String,
    },

    /// No entry is keyed by the empty suffix, so lookups could not terminate.
    #[error("table has no fallback entry for the empty suffix")]
    MissingFallback,

    /// The same suffix appears more than once.
    #[error("suffix '{suffix}' is defined more than once")]
    DuplicateSuffix { suffix: String },

    /// A value that the table's value type does not recognize.
    #[error("unknown tag '{tag}' for suffix '{suffix}'")]
    UnknownTag { suffix: String, tag: String },

    /// Lookups run on lowercased names, so an uppercase key could never match.
    #[error("suffix '{suffix}' is not lowercase")]
    NotLowercase { suffix: String },
}

/// Errors that occur while loading the suffix tables.
#[derive(Debug, Error)]
pub enum LoadError {
    /// File I/O error when reading a table file.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The table file was read but its content is invalid.
    #[error("{path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: TableError,
    },
}
