//! fd-core - Core library for funcdep
//!
//! This crate provides attribute sets, functional dependencies with
//! Armstrong's axioms, relations with attribute closures, and the candidate
//! key strategies built on them.

pub mod attr;
pub mod attr_set;
pub mod axioms;
pub mod config;
pub mod error;
pub mod func_dep;
pub mod keys;
pub mod relation;

pub use attr::Attr;
pub use attr_set::{attrs, AttrSet, DEFAULT_SEPARATOR};
pub use axioms::Derivation;
pub use config::{Config, OutputFormat};
pub use error::{CoreError, CoreResult};
pub use func_dep::FuncDep;
pub use keys::{minimal_keys, KeyReport, KeyStrategy, SearchBudget};
pub use relation::Relation;
