//! Closure command implementation

use anyhow::{bail, Result};
use fd_core::{AttrSet, OutputFormat};
use fd_parse::RelationParser;
use serde::Serialize;

use crate::cli::{ClosureArgs, GlobalArgs};
use crate::commands::common;

#[derive(Serialize)]
struct ClosureReport {
    attrs: AttrSet,
    closure: AttrSet,
    superkey: bool,
}

/// Execute the closure command
pub(crate) fn execute(args: &ClosureArgs, global: &GlobalArgs) -> Result<()> {
    let config = common::load_config(global)?;
    let parser = RelationParser::from_config(&config);
    let relation = common::load_relation(args.file.as_deref(), &parser)?;

    let attrs = parser.parse_attrs(&args.attrs);
    let unknown = attrs.difference([relation.attrs()]);
    if !unknown.is_empty() {
        bail!(
            "Attributes {} are not in relation {}",
            unknown.join(parser.separator()),
            relation.name()
        );
    }

    let closure = relation.attribute_closure(&attrs);
    let superkey = closure.contains(relation.attrs());

    match config.output {
        OutputFormat::Json => common::print_json(&ClosureReport {
            attrs,
            closure,
            superkey,
        }),
        OutputFormat::Text => {
            let sep = parser.separator();
            println!("({})+ = {}", attrs.join(sep), closure.join(sep));
            if superkey {
                println!("{} is a superkey of {}", attrs.join(sep), relation.name());
            }
            Ok(())
        }
    }
}
