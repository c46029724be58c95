//! fd-infer - Data inference for funcdep
//!
//! This crate reads CSV or tab-delimited files and records a functional
//! dependency between two columns whenever the observed values of one
//! column always pair with a single value of the other.

pub mod dataset;
pub mod error;

pub use dataset::DataSet;
pub use error::{InferError, InferResult};
