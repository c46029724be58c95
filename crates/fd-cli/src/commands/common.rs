//! Shared utilities for CLI commands

use anyhow::{Context, Result};
use fd_core::{Config, CoreError, KeyStrategy, OutputFormat, Relation, SearchBudget};
use fd_parse::RelationParser;
use serde::Serialize;
use std::fmt;
use std::io::Read;
use std::num::NonZeroUsize;
use std::path::Path;

use crate::cli::{GlobalArgs, OutputArg, StrategyArg};

/// Error type representing a non-zero process exit code.
///
/// Use `return Err(ExitCode(N).into())` instead of `std::process::exit(N)`
/// so that destructors run before the process ends.
#[derive(Debug)]
pub(crate) struct ExitCode(pub(crate) i32);

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // control flow only, nothing to show the user
        write!(f, "")
    }
}

impl std::error::Error for ExitCode {}

/// Load the config file named on the command line, or `funcdep.yml` from
/// the current directory when present, then apply command-line overrides.
pub(crate) fn load_config(global: &GlobalArgs) -> Result<Config> {
    let mut config = match &global.config {
        Some(path) => Config::load(Path::new(path))
            .with_context(|| format!("Failed to load config {}", path))?,
        None => match Config::load_from_dir(Path::new(".")) {
            Ok(config) => config,
            Err(CoreError::ConfigNotFound { .. }) => Config::default(),
            Err(e) => return Err(e).context("Failed to load funcdep.yml"),
        },
    };

    if global.no_sep {
        config.separator = String::new();
    } else if let Some(delim) = &global.delim {
        config.separator = delim.clone();
    }
    if let Some(output) = global.output {
        config.output = match output {
            OutputArg::Text => OutputFormat::Text,
            OutputArg::Json => OutputFormat::Json,
        };
    }

    if global.verbose {
        eprintln!(
            "[verbose] separator={:?} strategy={} output={}",
            config.separator, config.strategy, config.output
        );
    }
    Ok(config)
}

/// Apply a command's strategy and budget flags on top of the config.
pub(crate) fn apply_search_args(
    config: &mut Config,
    strategy: Option<StrategyArg>,
    max_closures: Option<NonZeroUsize>,
) {
    if let Some(strategy) = strategy {
        config.strategy = match strategy {
            StrategyArg::Auto => KeyStrategy::Auto,
            StrategyArg::Direct => KeyStrategy::Direct,
            StrategyArg::Augmented => KeyStrategy::Augmented,
            StrategyArg::Exhaustive => KeyStrategy::Exhaustive,
        };
    }
    if let Some(n) = max_closures {
        config.search = SearchBudget::closures(n.get());
    }
}

/// Read a whole file, or stdin when no file is given.
pub(crate) fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

/// Read and parse a relation description.
pub(crate) fn load_relation(file: Option<&str>, parser: &RelationParser) -> Result<Relation> {
    let text = read_input(file)?;
    let source = file.unwrap_or("<stdin>");
    parser
        .parse(&text)
        .with_context(|| format!("Failed to parse relation from {}", source))
}

/// Print a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
