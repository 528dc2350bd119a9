//! `upkeep new` command - Create a record

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::commands::show::print_record;
use crate::cli::helpers::{load_config, open_workspace};
use crate::cli::prompt::FormWizard;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::form::FormInput;
use crate::core::page::{Console, Row};
use crate::core::workspace::EntityKind;

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Collection to add to
    pub entity: EntityKind,

    /// Field values; omitted fields take their form default
    #[arg(value_name = "FIELD=VALUE")]
    pub fields: Vec<String>,

    /// Prompt for each field
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

pub fn run(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;
    let mut workspace = open_workspace(global, &config);
    let page = workspace.page_mut(args.entity);

    let input = if args.interactive {
        FormWizard::new().run(page.schema(), None)?
    } else {
        FormInput::parse(&args.fields).into_diagnostic()?
    };

    let row = create(page, &input, global)?;
    print_record(page, &row, global, &config)
}

/// Submit a create form and report the new id
pub(crate) fn create(page: &mut dyn Console, input: &FormInput, global: &GlobalOpts) -> Result<Row> {
    let row = page.create(input).into_diagnostic()?;
    if !global.quiet && global.format == OutputFormat::Auto {
        println!(
            "{} Created {} {}",
            style("✓").green(),
            page.schema().entity,
            style(row.id).cyan()
        );
    }
    Ok(row)
}
