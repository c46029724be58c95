//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::num::NonZeroUsize;

/// funcdep - closures, candidate keys and inferred dependencies for relations
#[derive(Parser, Debug)]
#[command(name = "fd")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: funcdep.yml in the current directory, if present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Separator between attribute names
    #[arg(short = 'd', long = "delim", global = true, value_name = "SEPARATOR")]
    pub delim: Option<String>,

    /// Use single-character attribute names (no separator)
    #[arg(short = 'n', long, global = true, conflicts_with = "delim")]
    pub no_sep: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputArg>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a relation, its closures and candidate keys
    Info(InfoArgs),

    /// Compute the closure of an attribute set
    Closure(ClosureArgs),

    /// Check whether a relation implies a functional dependency
    Check(CheckArgs),

    /// Infer functional dependencies from a CSV or tab-delimited file
    Infer(InferArgs),
}

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Relation description file (default: stdin)
    pub file: Option<String>,

    /// Candidate key strategy
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Also print the closure of every dependency
    #[arg(long)]
    pub closures: bool,

    /// Give up the exhaustive key search after this many closures
    #[arg(long, value_name = "N")]
    pub max_closures: Option<NonZeroUsize>,
}

/// Arguments for the closure command
#[derive(Args, Debug)]
pub struct ClosureArgs {
    /// Relation description file (default: stdin)
    pub file: Option<String>,

    /// Attributes to close, joined with the separator
    #[arg(short, long)]
    pub attrs: String,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Relation description file (default: stdin)
    pub file: Option<String>,

    /// Dependency to check, e.g. "A,B --> C"
    #[arg(short, long = "fd", value_name = "DEPENDENCY")]
    pub func_dep: String,
}

/// Arguments for the infer command
#[derive(Args, Debug)]
pub struct InferArgs {
    /// Data file (.csv, otherwise tab-delimited)
    pub file: String,

    /// Comma-separated list of columns to exclude
    #[arg(short = 'x', long, value_name = "COLUMNS")]
    pub exclude: Option<String>,

    /// Give up the exhaustive key search after this many closures
    #[arg(long, value_name = "N")]
    pub max_closures: Option<NonZeroUsize>,
}

/// Candidate key strategies
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyArg {
    /// Direct, then augmented, then exhaustive as needed
    Auto,
    /// Left sides of dependencies whose closure is total
    Direct,
    /// Dependency closures completed with up to two attributes
    Augmented,
    /// Every minimal key, by exhaustive search
    Exhaustive,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputArg {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
