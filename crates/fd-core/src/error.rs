//! Error types for fd-core

use thiserror::Error;

/// Core error type for funcdep
#[derive(Error, Debug)]
pub enum CoreError {
    /// FD001: Dependencies reference attributes outside the relation's domain
    #[error("[FD001] Relation '{relation}' has {domain_len} attributes ({domain}). FD has {count} unknown attributes ({unknown})")]
    UnknownAttributes {
        relation: String,
        domain: String,
        domain_len: usize,
        unknown: String,
        count: usize,
    },

    /// FD002: Exhaustive key search ran past its closure budget
    #[error("[FD002] Candidate key search exceeded its budget of {limit} closures over {attrs} attributes")]
    SearchBudgetExceeded { limit: usize, attrs: usize },

    /// FD003: Configuration file not found
    #[error("[FD003] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// FD004: Invalid configuration value
    #[error("[FD004] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// FD005: IO error with file path context
    #[error("[FD005] Failed to read '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// FD006: YAML parse error
    #[error("[FD006] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// FD007: Empty attribute name
    #[error("[FD007] Attribute names must not be empty")]
    EmptyAttribute,

    /// FD008: Dependency index out of range
    #[error("[FD008] Relation '{relation}' has no dependency at index {index}")]
    DependencyIndex { relation: String, index: usize },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
