//! Error types for fd-parse

use fd_core::CoreError;
use thiserror::Error;

/// Relation text parsing errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// Nothing but whitespace (P001)
    #[error("[P001] Relation description is empty")]
    EmptyInput,

    /// Header line is not `Name(attrs)` (P002)
    #[error("[P002] Invalid relation description '{header}': {reason}")]
    MalformedRelationHeader { header: String, reason: String },

    /// Dependency line with zero or several arrows (P003)
    #[error("[P003] Line {line}: expected exactly one arrow in functional dependency '{text}', found {found}")]
    ArrowCount {
        line: usize,
        text: String,
        found: usize,
    },

    /// Rejected by the core, e.g. unknown attributes (P004)
    #[error("[P004] {0}")]
    Core(#[from] CoreError),
}

/// Result type alias for ParseError
pub type ParseResult<T> = Result<T, ParseError>;
