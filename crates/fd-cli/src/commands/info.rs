//! Info command implementation - relation summary, closures and keys

use anyhow::{Context, Result};
use fd_core::{AttrSet, FuncDep, KeyReport, KeyStrategy, OutputFormat, Relation};
use fd_parse::RelationParser;
use serde::Serialize;

use crate::cli::{GlobalArgs, InfoArgs};
use crate::commands::common;

#[derive(Serialize)]
struct InfoReport<'a> {
    relation: &'a Relation,
    #[serde(skip_serializing_if = "Option::is_none")]
    closures: Option<Vec<FuncDep>>,
    #[serde(flatten)]
    keys: KeyReport,
}

/// Execute the info command
pub(crate) fn execute(args: &InfoArgs, global: &GlobalArgs) -> Result<()> {
    let mut config = common::load_config(global)?;
    common::apply_search_args(&mut config, args.strategy, args.max_closures);

    let parser = RelationParser::from_config(&config);
    let relation = common::load_relation(args.file.as_deref(), &parser)?;

    if global.verbose {
        eprintln!(
            "[verbose] Relation '{}': {} attributes, {} dependencies",
            relation.name(),
            relation.attrs().len(),
            relation.func_deps().len()
        );
    }

    let closures = args.closures.then(|| relation.closures());
    let keys = relation
        .find_keys(config.strategy, &config.search)
        .context("Candidate key search failed")?;

    if global.verbose && config.strategy == KeyStrategy::Auto {
        eprintln!("[verbose] Keys found by {} strategy", keys.strategy);
    }

    match config.output {
        OutputFormat::Json => common::print_json(&InfoReport {
            relation: &relation,
            closures,
            keys,
        }),
        OutputFormat::Text => {
            println!("{}", parser.render(&relation));
            if let Some(closures) = &closures {
                println!();
                println!("Closures:");
                for c in closures {
                    println!("    {}", c.render(parser.separator()));
                }
            }
            println!();
            print_keys(&keys, parser.separator());
            Ok(())
        }
    }
}

/// Print a key report in text form.
pub(crate) fn print_keys(report: &KeyReport, separator: &str) {
    println!("Candidate Keys ({}):", report.strategy);
    if report.keys.is_empty() {
        match report.strategy {
            KeyStrategy::Exhaustive => println!("    (none)"),
            _ => println!("No straightforward Candidate Keys -- Need a brute-force search!"),
        }
    }
    for key in &report.keys {
        println!("    {}", render_key(key, separator));
    }
}

fn render_key(key: &AttrSet, separator: &str) -> String {
    if key.is_empty() {
        "{}".to_string()
    } else {
        key.join(separator)
    }
}
