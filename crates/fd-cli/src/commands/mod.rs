//! CLI command implementations

pub(crate) mod check;
pub(crate) mod closure;
pub(crate) mod common;
pub(crate) mod infer;
pub(crate) mod info;
