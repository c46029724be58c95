//! Error types for fd-infer

use fd_core::CoreError;
use thiserror::Error;

/// Errors while reading or analyzing a data file
#[derive(Error, Debug)]
pub enum InferError {
    /// I001: IO error with file path context
    #[error("[I001] Failed to read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    /// I002: Malformed CSV
    #[error("[I002] CSV error in '{path}': {source}")]
    Csv { path: String, source: csv::Error },

    /// I003: File has no header line
    #[error("[I003] Data file '{path}' has no header line")]
    MissingHeader { path: String },

    /// I004: Row shorter than the header
    #[error("[I004] Row {row} of '{path}' has {found} fields, header has {expected}")]
    RaggedRow {
        path: String,
        row: usize,
        found: usize,
        expected: usize,
    },

    /// I005: Rejected by the core
    #[error("[I005] {0}")]
    Core(#[from] CoreError),
}

/// Result type alias for InferError
pub type InferResult<T> = Result<T, InferError>;
