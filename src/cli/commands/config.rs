//! `upkeep config` command - Inspect the layered configuration

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::cli::helpers::load_config;
use crate::cli::GlobalOpts;
use crate::core::Config;

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective configuration values
    Show(ShowArgs),

    /// Show the path of the global configuration file
    Path,

    /// List all available configuration keys
    Keys,
}

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Show only this key's value
    pub key: Option<String>,
}

/// Valid configuration keys
const VALID_KEYS: &[(&str, &str)] = &[
    (
        "default_format",
        "Default output format (yaml, json, tsv, csv, md, id)",
    ),
    ("seed", "Start with the sample records (true/false)"),
    ("page_size", "Default row limit for list output"),
];

/// Run a config subcommand
pub fn run(cmd: ConfigCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ConfigCommands::Show(args) => run_show(args, global),
        ConfigCommands::Path => run_path(),
        ConfigCommands::Keys => run_keys(),
    }
}

fn run_show(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global)?;

    if let Some(key) = &args.key {
        if !VALID_KEYS.iter().any(|(k, _)| k == key) {
            return Err(miette::miette!(
                "Unknown configuration key '{}'. Run 'upkeep config keys' to list them",
                key
            ));
        }
        return match config_value(&config, key) {
            Some(v) => {
                println!("{}", v);
                Ok(())
            }
            None => Err(miette::miette!("Key '{}' is not set", key)),
        };
    }

    println!("{}", style("Effective Configuration").bold().underlined());
    println!();
    for (key, _) in VALID_KEYS {
        print_config_value(key, config_value(&config, key).as_deref());
    }

    println!();
    println!("{}", style("Config Sources (in priority order):").dim());
    println!("  1. Environment variables (UPKEEP_FORMAT, UPKEEP_SEED)");
    match &global.config {
        Some(path) => println!("  2. --config {}", path.display()),
        None => println!("  2. --config <FILE> (not given)"),
    }
    println!("  3. Global config (~/.config/upkeep/config.yaml)");

    Ok(())
}

fn run_path() -> Result<()> {
    let path = Config::global_config_path()
        .ok_or_else(|| miette::miette!("Could not determine global config directory"))?;
    println!("{}", path.display());
    if path.exists() {
        eprintln!("{}", style("(exists)").green());
    } else {
        eprintln!("{}", style("(not created)").dim());
    }
    Ok(())
}

fn run_keys() -> Result<()> {
    println!("{}", style("Available configuration keys:").bold());
    println!();
    for (key, description) in VALID_KEYS {
        println!("  {:<16} {}", style(key).cyan(), style(description).dim());
    }
    Ok(())
}

fn config_value(config: &Config, key: &str) -> Option<String> {
    match key {
        "default_format" => config.default_format.clone(),
        "seed" => config.seed.map(|s| s.to_string()),
        "page_size" => config.page_size.map(|n| n.to_string()),
        _ => None,
    }
}

fn print_config_value(key: &str, value: Option<&str>) {
    if let Some(v) = value {
        println!("  {}: {}", style(key).cyan(), style(v).yellow());
    } else {
        println!("  {}: {}", style(key).cyan(), style("(not set)").dim());
    }
}
