//! `upkeep delete` command - Remove a record

use console::style;
use miette::Result;

use crate::cli::commands::list::print_view;
use crate::cli::helpers::{load_config, open_workspace, parse_record_id};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::page::Console;
use crate::core::workspace::EntityKind;

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Collection the record belongs to
    pub entity: EntityKind,

    /// Record ID (e.g., PRT-004, or just 4)
    pub id: String,
}

pub fn run(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;
    let mut workspace = open_workspace(global, &config);
    let page = workspace.page_mut(args.entity);

    delete(page, args.entity, &args.id, global)?;
    print_view(page, global, &config, None)
}

/// Delete a record, failing if the id is not in the collection
pub(crate) fn delete(
    page: &mut dyn Console,
    kind: EntityKind,
    id: &str,
    global: &GlobalOpts,
) -> Result<()> {
    let id = parse_record_id(kind, id)?;
    if !page.delete(&id) {
        return Err(miette::miette!("No {} found with id {}", kind, id));
    }

    if !global.quiet && global.format == OutputFormat::Auto {
        println!(
            "{} Deleted {} {}",
            style("✓").green(),
            kind,
            style(id).cyan()
        );
    }
    Ok(())
}
