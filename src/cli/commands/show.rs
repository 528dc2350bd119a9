//! `upkeep show` command - Display one record

use miette::Result;

use crate::cli::helpers::{load_config, open_workspace, parse_record_id, resolve_format};
use crate::cli::table::TableFormatter;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::page::{Console, Row};
use crate::core::workspace::EntityKind;
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Collection the record belongs to
    pub entity: EntityKind,

    /// Record ID (e.g., AST-002, or just 2)
    pub id: String,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;
    let workspace = open_workspace(global, &config);
    let page = workspace.page(args.entity);
    let row = find_row(page, args.entity, &args.id)?;
    print_record(page, &row, global, &config)
}

/// Look up a record or fail with a "not found" diagnostic
pub(crate) fn find_row(page: &dyn Console, kind: EntityKind, id: &str) -> Result<Row> {
    let id = parse_record_id(kind, id)?;
    page.row(&id)
        .ok_or_else(|| miette::miette!("No {} found with id {}", kind, id))
}

/// Print a single record (yaml unless a format is chosen)
pub(crate) fn print_record(
    page: &dyn Console,
    row: &Row,
    global: &GlobalOpts,
    config: &Config,
) -> Result<()> {
    let format = resolve_format(global, config, OutputFormat::Yaml);
    let output = TableFormatter::new(page.schema()).render_record(row, format)?;
    print!("{}", output);
    Ok(())
}
