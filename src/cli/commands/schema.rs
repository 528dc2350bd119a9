//! `upkeep schema` command - Field introspection for a collection
//!
//! Lists every field with its kind, what it takes part in (search, filter,
//! sort, form), its options and its form default.

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;

use crate::cli::helpers::{load_config, resolve_format};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::schema::{FieldDefault, RecordSchema};
use crate::core::workspace::EntityKind;
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct SchemaArgs {
    /// Collection to describe
    pub entity: EntityKind,
}

/// Serializable view of one field definition
#[derive(Debug, Serialize)]
struct FieldSummary {
    name: &'static str,
    label: &'static str,
    kind: String,
    searchable: bool,
    filterable: bool,
    sortable: bool,
    editable: bool,
    #[serde(skip_serializing_if = "no_options")]
    options: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    default: Option<String>,
}

fn no_options(options: &&[&str]) -> bool {
    options.is_empty()
}

pub fn run(args: SchemaArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;
    print_schema(args.entity.schema(), global, &config)
}

pub(crate) fn print_schema(
    schema: &'static RecordSchema,
    global: &GlobalOpts,
    config: &Config,
) -> Result<()> {
    let fields: Vec<FieldSummary> = schema
        .fields
        .iter()
        .map(|f| FieldSummary {
            name: f.name,
            label: f.label,
            kind: f.kind.to_string(),
            searchable: f.searchable,
            filterable: f.filterable,
            sortable: f.sortable,
            editable: f.form,
            options: f.options,
            default: match f.default {
                FieldDefault::None => None,
                FieldDefault::Value(v) => Some(v.to_string()),
                FieldDefault::Today => Some("today".to_string()),
            },
        })
        .collect();

    match resolve_format(global, config, OutputFormat::Tsv) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&fields).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&fields).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Id => {
            for field in &fields {
                println!("{}", field.name);
            }
        }
        _ => {
            println!(
                "{} ({}, prefix {})\n",
                style(schema.title).bold(),
                schema.entity,
                schema.prefix
            );
            println!(
                "{:<18} {:<10} {:<12} {}",
                style("FIELD").bold(),
                style("KIND").bold(),
                style("FLAGS").bold(),
                style("OPTIONS / DEFAULT").bold()
            );
            println!("{}", "-".repeat(70));
            for field in &fields {
                let mut flags = String::new();
                flags.push(if field.searchable { 's' } else { '-' });
                flags.push(if field.filterable { 'f' } else { '-' });
                flags.push(if field.sortable { 'o' } else { '-' });
                flags.push(if field.editable { 'e' } else { '-' });

                let mut extra = field.options.join(", ");
                if let Some(default) = &field.default {
                    if !extra.is_empty() {
                        extra.push_str("  ");
                    }
                    extra.push_str(&format!("(default: {})", default));
                }
                println!(
                    "{:<18} {:<10} {:<12} {}",
                    style(field.name).cyan(),
                    field.kind,
                    flags,
                    extra
                );
            }
            if !global.quiet {
                println!(
                    "\n{}",
                    style("Flags: s=searchable f=filterable o=sort column e=editable").dim()
                );
            }
        }
    }
    Ok(())
}
