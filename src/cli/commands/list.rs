//! `upkeep list` command - Derived view of one collection

use console::style;
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{load_config, open_workspace, resolve_format, split_assignment};
use crate::cli::table::{TableConfig, TableFormatter};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::page::Console;
use crate::core::workspace::EntityKind;
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Collection to list (asset, part, supplier, user, task, work-order)
    pub entity: EntityKind,

    /// Search text (case-insensitive, matches the searchable fields)
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Filter on a field; repeat to AND several filters
    #[arg(long = "filter", short = 'F', value_name = "FIELD=VALUE")]
    pub filters: Vec<String>,

    /// Sort by a column; naming the same column again flips the direction
    #[arg(long = "sort", short = 'S', value_name = "FIELD")]
    pub sort: Vec<String>,

    /// Limit number of results
    #[arg(long, short = 'n')]
    pub limit: Option<usize>,

    /// Show count only
    #[arg(long)]
    pub count: bool,
}

pub fn run(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;
    let mut workspace = open_workspace(global, &config);
    let page = workspace.page_mut(args.entity);

    if let Some(search) = &args.search {
        page.set_search(search);
    }
    for filter in &args.filters {
        let (field, value) = split_assignment(filter)?;
        page.set_filter(field, Some(value)).into_diagnostic()?;
    }
    for column in &args.sort {
        let directive = page.activate_sort(column).into_diagnostic()?;
        tracing::debug!("Sort is now {}", directive);
    }

    if args.count {
        println!("{}", page.rows().len());
        return Ok(());
    }

    print_view(page, global, &config, args.limit)
}

/// Print the current derived view of a page
pub(crate) fn print_view(
    page: &dyn Console,
    global: &GlobalOpts,
    config: &Config,
    limit: Option<usize>,
) -> Result<()> {
    let schema = page.schema();
    let mut rows = page.rows();
    if let Some(limit) = limit.or(config.page_size) {
        rows.truncate(limit);
    }

    let format = resolve_format(global, config, OutputFormat::Tsv);
    if rows.is_empty() && format == OutputFormat::Tsv {
        if !global.quiet {
            println!("No {}s found.", schema.entity);
        }
        return Ok(());
    }

    let table_config = if global.quiet {
        TableConfig::for_pipe()
    } else {
        TableConfig::default()
    };
    let output = TableFormatter::new(schema)
        .with_sort(page.sort_directive())
        .with_config(table_config)
        .render(&rows, format)?;
    print!("{}", output);
    Ok(())
}

/// One-line description of a page's search, filter and sort inputs
pub(crate) fn describe_state(page: &dyn Console) -> Option<String> {
    let mut parts = Vec::new();
    if !page.search().is_empty() {
        parts.push(format!("search {}", style(format!("'{}'", page.search())).yellow()));
    }
    for (field, value) in page.filters().active() {
        parts.push(format!("{}={}", field.name, style(value).yellow()));
    }
    if let Some(sort) = page.sort_directive() {
        parts.push(format!("sort {} {}", sort.field.name, sort.direction.arrow()));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join("  "))
    }
}
