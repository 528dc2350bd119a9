//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use miette::{IntoDiagnostic, Result};

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::identity::RecordId;
use crate::core::workspace::{EntityKind, Workspace};
use crate::core::Config;

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Load the layered configuration, honouring `--config`
pub fn load_config(global: &GlobalOpts) -> Result<Config> {
    Config::load(global.config.as_deref()).into_diagnostic()
}

/// Fresh workspace for one command run
pub fn open_workspace(global: &GlobalOpts, config: &Config) -> Workspace {
    let seed = !global.empty && config.seed();
    tracing::debug!("Opening workspace (seeded: {})", seed);
    Workspace::new(seed)
}

/// Resolve `--format auto` against the configured default, then `fallback`
pub fn resolve_format(global: &GlobalOpts, config: &Config, fallback: OutputFormat) -> OutputFormat {
    if global.format != OutputFormat::Auto {
        return global.format;
    }
    config
        .default_format
        .as_deref()
        .and_then(|f| f.parse::<OutputFormat>().ok())
        .filter(|f| *f != OutputFormat::Auto)
        .unwrap_or(fallback)
}

/// Parse a record id and check it belongs to `kind`
///
/// Bare ordinals (`3`) are accepted and given the collection's prefix.
pub fn parse_record_id(kind: EntityKind, input: &str) -> Result<RecordId> {
    let input = input.trim();
    if let Ok(ordinal) = input.parse::<u32>() {
        return Ok(RecordId::new(kind.prefix(), ordinal));
    }

    let id: RecordId = input.parse().into_diagnostic()?;
    if id.prefix() != kind.prefix() {
        return Err(miette::miette!(
            "{} is not a {} id (expected {}-NNN)",
            id,
            kind,
            kind.prefix()
        ));
    }
    Ok(id)
}

/// Split a `field=value` argument
pub fn split_assignment(arg: &str) -> Result<(&str, &str)> {
    arg.split_once('=')
        .map(|(f, v)| (f.trim(), v))
        .filter(|(f, _)| !f.is_empty())
        .ok_or_else(|| miette::miette!("Expected field=value, got '{}'", arg))
}

/// "1 record" / "3 records"
pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
    }

    #[test]
    fn test_parse_record_id() {
        assert_eq!(parse_record_id(EntityKind::Asset, "AST-002").unwrap().to_string(), "AST-002");
        assert_eq!(parse_record_id(EntityKind::Asset, "ast-2").unwrap().to_string(), "AST-002");
        assert_eq!(parse_record_id(EntityKind::WorkOrder, "4").unwrap().to_string(), "WO-004");
        assert!(parse_record_id(EntityKind::Asset, "WO-001").is_err());
        assert!(parse_record_id(EntityKind::Asset, "nonsense").is_err());
    }

    #[test]
    fn test_resolve_format() {
        let mut global = GlobalOpts::default();
        let mut config = Config::default();
        assert_eq!(resolve_format(&global, &config, OutputFormat::Tsv), OutputFormat::Tsv);

        config.default_format = Some("json".to_string());
        assert_eq!(resolve_format(&global, &config, OutputFormat::Tsv), OutputFormat::Json);

        global.format = OutputFormat::Csv;
        assert_eq!(resolve_format(&global, &config, OutputFormat::Tsv), OutputFormat::Csv);
    }

    #[test]
    fn test_split_assignment() {
        assert_eq!(split_assignment("status=Open").unwrap(), ("status", "Open"));
        assert_eq!(split_assignment("status=").unwrap(), ("status", ""));
        assert!(split_assignment("status").is_err());
        assert!(split_assignment("=Open").is_err());
    }

    #[test]
    fn test_plural() {
        assert_eq!(plural(1, "asset"), "1 asset");
        assert_eq!(plural(3, "asset"), "3 assets");
    }
}
