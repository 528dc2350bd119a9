//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    completions::CompletionsArgs,
    config::ConfigCommands,
    delete::DeleteArgs,
    edit::EditArgs,
    list::ListArgs,
    new::NewArgs,
    schema::SchemaArgs,
    shell::ShellArgs,
    show::ShowArgs,
};

#[derive(Parser)]
#[command(name = "upkeep")]
#[command(author, version, about = "Upkeep Console")]
#[command(long_about = "Browse, search, filter, sort and edit maintenance-operations records: assets, parts, suppliers, users, preventive maintenance tasks and work orders.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Start with empty collections instead of the sample records
    #[arg(long, global = true)]
    pub empty: bool,

    /// Configuration file to layer over the global one
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the record collections
    Pages,

    /// List records with search, filters and sorting
    List(ListArgs),

    /// Show one record
    Show(ShowArgs),

    /// Create a record
    New(NewArgs),

    /// Edit a record
    Edit(EditArgs),

    /// Delete a record
    Delete(DeleteArgs),

    /// Describe the fields of a collection
    Schema(SchemaArgs),

    /// Interactive session over one workspace
    Shell(ShellArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (yaml for show, tsv for list)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <OutputFormat as ValueEnum>::from_str(s, true)
    }
}
