//! Infer command implementation - dependencies observed in a data file

use anyhow::{Context, Result};
use fd_core::{KeyReport, KeyStrategy, OutputFormat, Relation};
use fd_infer::DataSet;
use fd_parse::RelationParser;
use serde::Serialize;
use std::path::Path;

use crate::cli::{GlobalArgs, InferArgs};
use crate::commands::common;
use crate::commands::info::print_keys;

#[derive(Serialize)]
struct InferReport<'a> {
    relation: &'a Relation,
    rows: usize,
    keys: &'a KeyReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    exhaustive_keys: Option<&'a KeyReport>,
}

/// Execute the infer command
pub(crate) fn execute(args: &InferArgs, global: &GlobalArgs) -> Result<()> {
    let mut config = common::load_config(global)?;
    common::apply_search_args(&mut config, None, args.max_closures);

    let mut ds = DataSet::read(Path::new(&args.file))
        .with_context(|| format!("Failed to read data file {}", args.file))?;

    if let Some(exclude) = &args.exclude {
        let names: Vec<&str> = exclude.split(',').map(str::trim).collect();
        let n = ds.exclude(names.as_slice());
        if global.verbose {
            eprintln!("[verbose] Excluded {} of {} requested columns", n, names.len());
        }
    }
    if global.verbose {
        for (i, why) in ds.skipped() {
            eprintln!("[verbose] Column {} not analyzed: {}", i + 1, why);
        }
    }

    let relation = ds.analyze().context("Dependency inference failed")?;

    // exhaustive keys are printed alongside the cheap ones, not instead
    let keys = relation.cheap_keys();
    let exhaustive = if keys.needs_exhaustive() {
        Some(KeyReport {
            strategy: KeyStrategy::Exhaustive,
            keys: relation
                .candidate_keys_bf_with(&config.search)
                .context("Candidate key search failed")?,
        })
    } else {
        None
    };

    match config.output {
        OutputFormat::Json => common::print_json(&InferReport {
            relation: &relation,
            rows: ds.row_count(),
            keys: &keys,
            exhaustive_keys: exhaustive.as_ref(),
        }),
        OutputFormat::Text => {
            // data-derived names may contain anything, so keep a visible separator
            let parser = if config.separator.is_empty() {
                RelationParser::default()
            } else {
                RelationParser::from_config(&config)
            };
            println!("{}", parser.render(&relation));
            println!("---");
            print_keys(&keys, parser.separator());
            if let Some(exhaustive) = &exhaustive {
                print_keys(exhaustive, parser.separator());
            }
            Ok(())
        }
    }
}
