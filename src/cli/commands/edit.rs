//! `upkeep edit` command - Change fields of a record

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::show::{find_row, print_record};
use crate::cli::helpers::{load_config, open_workspace};
use crate::cli::prompt::FormWizard;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::form::FormInput;
use crate::core::page::{Console, Row};
use crate::core::workspace::EntityKind;

#[derive(clap::Args, Debug)]
pub struct EditArgs {
    /// Collection the record belongs to
    pub entity: EntityKind,

    /// Record ID (e.g., WO-003, or just 3)
    pub id: String,

    /// Field values to change
    #[arg(value_name = "FIELD=VALUE")]
    pub fields: Vec<String>,

    /// Prompt for each field, starting from the current values
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

pub fn run(args: EditArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;
    let mut workspace = open_workspace(global, &config);
    let page = workspace.page_mut(args.entity);
    let existing = find_row(page, args.entity, &args.id)?;

    let input = if args.interactive {
        FormWizard::new().run(page.schema(), Some(&existing))?
    } else if args.fields.is_empty() {
        return Err(miette::miette!(
            "Nothing to change. Give FIELD=VALUE pairs or use --interactive"
        ));
    } else {
        FormInput::parse(&args.fields).into_diagnostic()?
    };

    let row = edit(page, &existing, &input, global)?;
    print_record(page, &row, global, &config)
}

/// Submit an edit form for an existing record
pub(crate) fn edit(
    page: &mut dyn Console,
    existing: &Row,
    input: &FormInput,
    global: &GlobalOpts,
) -> Result<Row> {
    let row = page
        .edit(&existing.id, input)
        .into_diagnostic()?
        .ok_or_else(|| miette::miette!("No {} found with id {}", page.schema().entity, existing.id))?;

    if !global.quiet && global.format == OutputFormat::Auto {
        println!(
            "{} Updated {} {}",
            style("✓").green(),
            page.schema().entity,
            style(row.id).cyan()
        );
    }
    Ok(row)
}
