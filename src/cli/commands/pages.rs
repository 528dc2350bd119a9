//! `upkeep pages` command - Navigation over the record collections

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::{load_config, open_workspace, resolve_format};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::workspace::Workspace;
use crate::core::Config;

/// One navigation entry
#[derive(Debug, Serialize)]
struct PageSummary {
    entity: &'static str,
    title: &'static str,
    prefix: &'static str,
    records: usize,
}

pub fn run(global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;
    let workspace = open_workspace(global, &config);
    print_pages(&workspace, global, &config, false)
}

/// Print the collections with their record counts
///
/// With `mark_active`, the selected page is flagged (used by the shell).
pub(crate) fn print_pages(
    workspace: &Workspace,
    global: &GlobalOpts,
    config: &Config,
    mark_active: bool,
) -> Result<()> {
    let summaries: Vec<PageSummary> = workspace
        .kinds()
        .iter()
        .map(|kind| {
            let schema = kind.schema();
            PageSummary {
                entity: schema.entity,
                title: schema.title,
                prefix: schema.prefix.as_str(),
                records: workspace.page(*kind).len(),
            }
        })
        .collect();

    match resolve_format(global, config, OutputFormat::Tsv) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summaries).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&summaries).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Id => {
            for summary in &summaries {
                println!("{}", summary.entity);
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            for summary in &summaries {
                writer.serialize(summary).into_diagnostic()?;
            }
            writer.flush().into_diagnostic()?;
        }
        OutputFormat::Md => {
            let mut builder = Builder::default();
            builder.push_record(["Entity", "Title", "Prefix", "Records"]);
            for summary in &summaries {
                builder.push_record([
                    summary.entity.to_string(),
                    summary.title.to_string(),
                    summary.prefix.to_string(),
                    summary.records.to_string(),
                ]);
            }
            println!("{}", builder.build().with(Style::markdown()));
        }
        OutputFormat::Auto | OutputFormat::Tsv => {
            println!(
                "  {:<12} {:<24} {:<7} {}",
                style("ENTITY").bold(),
                style("TITLE").bold(),
                style("PREFIX").bold(),
                style("RECORDS").bold()
            );
            println!("{}", "-".repeat(54));
            for (kind, summary) in workspace.kinds().iter().zip(&summaries) {
                let marker = if mark_active && *kind == workspace.active() {
                    style("▸").cyan().to_string()
                } else {
                    " ".to_string()
                };
                println!(
                    "{} {:<12} {:<24} {:<7} {:>7}",
                    marker,
                    style(summary.entity).cyan(),
                    summary.title,
                    summary.prefix,
                    summary.records
                );
            }
        }
    }
    Ok(())
}
