//! Check command implementation - does a relation imply a dependency?

use anyhow::{bail, Context, Result};
use fd_core::{AttrSet, FuncDep, OutputFormat};
use fd_parse::RelationParser;
use serde::Serialize;

use crate::cli::{CheckArgs, GlobalArgs};
use crate::commands::common::{self, ExitCode};

#[derive(Serialize)]
struct CheckReport<'a> {
    func_dep: &'a FuncDep,
    implied: bool,
    trivial: bool,
    left_closure: AttrSet,
    missing: AttrSet,
}

/// Execute the check command. Exits with status 1 when the dependency does
/// not follow from the relation.
pub(crate) fn execute(args: &CheckArgs, global: &GlobalArgs) -> Result<()> {
    let config = common::load_config(global)?;
    let parser = RelationParser::from_config(&config);
    let relation = common::load_relation(args.file.as_deref(), &parser)?;

    let fd = parser
        .parse_func_dep(&args.func_dep)
        .with_context(|| format!("Invalid dependency '{}'", args.func_dep))?;
    let unknown = fd.attrs().difference([relation.attrs()]);
    if !unknown.is_empty() {
        bail!(
            "Attributes {} are not in relation {}",
            unknown.join(parser.separator()),
            relation.name()
        );
    }

    let left_closure = relation.attribute_closure(&fd.left);
    let implied = left_closure.contains(&fd.right);
    let missing = fd.right.difference([&left_closure]);
    let sep = parser.separator();

    match config.output {
        OutputFormat::Json => common::print_json(&CheckReport {
            func_dep: &fd,
            implied,
            trivial: fd.is_trivial(),
            left_closure,
            missing,
        })?,
        OutputFormat::Text => {
            println!("({})+ = {}", fd.left.join(sep), left_closure.join(sep));
            if fd.is_trivial() {
                println!("{} holds trivially (reflexivity)", fd.render(sep));
            } else if implied {
                println!("{} is implied by {}", fd.render(sep), relation.name());
            } else {
                println!(
                    "{} is NOT implied by {}: {} not determined",
                    fd.render(sep),
                    relation.name(),
                    missing.join(sep)
                );
            }
        }
    }

    if !implied {
        return Err(ExitCode(1).into());
    }
    Ok(())
}
