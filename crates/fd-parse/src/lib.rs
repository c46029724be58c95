//! fd-parse - Text layer for funcdep
//!
//! This crate reads relation descriptions (a `Name(attrs)` header followed by
//! one functional dependency per line) into `fd_core::Relation` and renders
//! relations back to the same form.

pub mod error;
pub mod parser;

pub use error::{ParseError, ParseResult};
pub use parser::RelationParser;
