//! Table formatting utilities for CLI list and show commands
//!
//! Every collection renders through the same [`TableFormatter`]; the
//! columns come from the record schema, so no command carries its own
//! formatting code.

use chrono::NaiveDate;
use console::style;
use miette::{IntoDiagnostic, Result};
use tabled::{builder::Builder, settings::Style};

use crate::cli::helpers::truncate_str;
use crate::cli::OutputFormat;
use crate::core::page::Row;
use crate::core::query::SortDirective;
use crate::core::schema::{FieldDef, FieldKind, RecordSchema};
use crate::core::value::FieldValue;

/// Configuration for table output
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Show summary line after table (e.g., "5 asset(s) found.")
    pub show_summary: bool,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { show_summary: true }
    }
}

impl TableConfig {
    /// Create config optimized for piping (no summary)
    pub fn for_pipe() -> Self {
        Self {
            show_summary: false,
        }
    }
}

/// A typed cell value with semantic meaning for formatting
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Record ID (cyan)
    Id(String),
    /// Plain text, truncated to the column width
    Text(String),
    /// Closed-enumeration label with color coding
    Category(String),
    /// Whole number, right aligned
    Number(i64),
    /// Money amount with two decimals
    Money(f64),
    /// Score with one decimal
    Rating(f64),
    Date(NaiveDate),
    /// Empty/placeholder
    Empty,
}

impl CellValue {
    /// Build a cell from a field definition and its value
    pub fn of(field: &FieldDef, value: Option<&FieldValue>) -> Self {
        match (field.kind, value) {
            (_, None) => CellValue::Empty,
            (FieldKind::Text, Some(v)) if field.name == "id" => CellValue::Id(v.to_string()),
            (FieldKind::Category, Some(v)) => CellValue::Category(v.to_string()),
            (FieldKind::Number, Some(FieldValue::Integer(n))) => CellValue::Number(*n),
            (FieldKind::Currency, Some(FieldValue::Decimal(d))) => CellValue::Money(*d),
            (FieldKind::Rating, Some(FieldValue::Decimal(d))) => CellValue::Rating(*d),
            (FieldKind::Date, Some(FieldValue::Date(d))) => CellValue::Date(*d),
            (_, Some(v)) => CellValue::Text(v.to_string()),
        }
    }

    /// Format for TSV output (with colors if terminal)
    pub fn format_tsv(&self, width: usize) -> String {
        match self {
            CellValue::Id(id) => format!("{:<width$}", style(id).cyan(), width = width),
            CellValue::Text(s) => {
                let truncated = truncate_str(s, width.saturating_sub(2));
                format!("{:<width$}", truncated, width = width)
            }
            CellValue::Category(s) => {
                format!("{:<width$}", category_style(s), width = width)
            }
            CellValue::Number(n) => format!("{:>width$}", n, width = width),
            CellValue::Money(_) | CellValue::Rating(_) => {
                format!("{:>width$}", self.raw(), width = width)
            }
            CellValue::Date(_) => format!("{:<width$}", self.raw(), width = width),
            CellValue::Empty => format!("{:<width$}", "-", width = width),
        }
    }

    /// Get raw string value (no colors)
    pub fn raw(&self) -> String {
        match self {
            CellValue::Id(s) | CellValue::Text(s) | CellValue::Category(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Money(d) => format!("${:.2}", d),
            CellValue::Rating(d) => format!("{:.1}", d),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Value for machine-readable output (no currency symbol)
    pub fn plain(&self) -> String {
        match self {
            CellValue::Money(d) => format!("{:.2}", d),
            _ => self.raw(),
        }
    }

    /// Format for Markdown output (escaped pipes)
    pub fn format_md(&self) -> String {
        match self {
            CellValue::Empty => "-".to_string(),
            _ => self.raw().replace('|', "\\|"),
        }
    }

    /// Get the display width of this cell's content (for dynamic column sizing)
    pub fn display_width(&self) -> usize {
        match self {
            CellValue::Empty => 1,
            _ => self.raw().chars().count(),
        }
    }
}

/// Color a category label by what it says about the record
fn category_style(label: &str) -> console::StyledObject<&str> {
    match label {
        "Operational" | "Completed" | "Admin" => style(label).green(),
        "Under Maintenance" | "In Progress" | "On Hold" | "Medium" | "Manager" => {
            style(label).yellow()
        }
        "Out of Service" | "Overdue" | "High" => style(label).red().bold(),
        "Low" | "Viewer" => style(label).dim(),
        _ => style(label),
    }
}

/// Upper bound for a column's width
fn max_width(field: &FieldDef) -> usize {
    match field.kind {
        FieldKind::Text if field.name == "id" => 10,
        FieldKind::Text => 36,
        FieldKind::Category => 22,
        FieldKind::Number | FieldKind::Rating => 10,
        FieldKind::Currency => 12,
        FieldKind::Date => 14,
    }
}

/// Table formatter that renders rows of one collection in various formats
pub struct TableFormatter {
    schema: &'static RecordSchema,
    sort: Option<SortDirective>,
    config: TableConfig,
}

impl TableFormatter {
    pub fn new(schema: &'static RecordSchema) -> Self {
        Self {
            schema,
            sort: None,
            config: TableConfig::default(),
        }
    }

    /// Mark the sorted column in the header
    pub fn with_sort(mut self, sort: Option<SortDirective>) -> Self {
        self.sort = sort;
        self
    }

    /// Configure the formatter with custom settings
    pub fn with_config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    fn cells<'r>(&self, row: &'r Row) -> impl Iterator<Item = CellValue> + 'r {
        let schema = self.schema;
        schema
            .fields
            .iter()
            .map(move |f| CellValue::of(f, row.get(f.name)))
    }

    fn header(&self, field: &FieldDef) -> String {
        match self.sort {
            Some(sort) if sort.is_on(field) => {
                format!("{} {}", field.label.to_uppercase(), sort.direction.arrow())
            }
            _ => field.label.to_uppercase(),
        }
    }

    /// Render rows in the specified format
    pub fn render(&self, rows: &[Row], format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Auto | OutputFormat::Tsv => Ok(self.render_tsv(rows)),
            OutputFormat::Csv => self.render_csv(rows),
            OutputFormat::Md => Ok(self.render_md(rows)),
            OutputFormat::Id => Ok(rows.iter().map(|r| format!("{}\n", r.id)).collect()),
            OutputFormat::Json => {
                let values: Vec<_> = rows.iter().map(|r| &r.json).collect();
                let json = serde_json::to_string_pretty(&values).into_diagnostic()?;
                Ok(format!("{}\n", json))
            }
            OutputFormat::Yaml => {
                let values: Vec<_> = rows.iter().map(|r| &r.json).collect();
                serde_yml::to_string(&values).into_diagnostic()
            }
        }
    }

    /// Calculate dynamic column widths based on actual content
    fn calculate_widths(&self, rows: &[Row]) -> Vec<usize> {
        self.schema
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                let header_len = self.header(field).chars().count();
                let max_content = rows
                    .iter()
                    .filter_map(|r| self.cells(r).nth(i))
                    .map(|c| c.display_width())
                    .max()
                    .unwrap_or(0);
                header_len
                    .max(max_content.saturating_add(2))
                    .min(max_width(field).max(header_len))
            })
            .collect()
    }

    fn render_tsv(&self, rows: &[Row]) -> String {
        let widths = self.calculate_widths(rows);
        let mut out = String::new();

        let header: Vec<String> = self
            .schema
            .fields
            .iter()
            .zip(&widths)
            .map(|(f, w)| format!("{:<width$}", style(self.header(f)).bold(), width = *w))
            .collect();
        out.push_str(header.join(" ").trim_end());
        out.push('\n');

        let total_width: usize = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(total_width));
        out.push('\n');

        for row in rows {
            let parts: Vec<String> = self
                .cells(row)
                .zip(&widths)
                .map(|(c, w)| c.format_tsv(*w))
                .collect();
            out.push_str(parts.join(" ").trim_end());
            out.push('\n');
        }

        if self.config.show_summary {
            out.push('\n');
            out.push_str(&format!(
                "{} {}(s) found.\n",
                style(rows.len()).cyan(),
                self.schema.entity
            ));
        }
        out
    }

    fn render_csv(&self, rows: &[Row]) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(self.schema.fields.iter().map(|f| f.name))
            .into_diagnostic()?;
        for row in rows {
            let values: Vec<String> = self.cells(row).map(|c| c.plain()).collect();
            writer.write_record(&values).into_diagnostic()?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| miette::miette!("{}", e.error()))?;
        String::from_utf8(bytes).into_diagnostic()
    }

    fn render_md(&self, rows: &[Row]) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.schema.fields.iter().map(|f| f.label));
        for row in rows {
            builder.push_record(self.cells(row).map(|c| c.format_md()));
        }
        format!("{}\n", builder.build().with(Style::markdown()))
    }

    /// Render a single record as field/value pairs
    pub fn render_record(&self, row: &Row, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Auto | OutputFormat::Yaml => {
                serde_yml::to_string(&row.json).into_diagnostic()
            }
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&row.json).into_diagnostic()?;
                Ok(format!("{}\n", json))
            }
            OutputFormat::Id => Ok(format!("{}\n", row.id)),
            OutputFormat::Csv => self.render_csv(std::slice::from_ref(row)),
            OutputFormat::Md => {
                let mut builder = Builder::default();
                builder.push_record(["Field", "Value"]);
                for (field, cell) in self.schema.fields.iter().zip(self.cells(row)) {
                    builder.push_record([field.label.to_string(), cell.format_md()]);
                }
                Ok(format!("{}\n", builder.build().with(Style::markdown())))
            }
            OutputFormat::Tsv => {
                let label_width = self
                    .schema
                    .fields
                    .iter()
                    .map(|f| f.label.len())
                    .max()
                    .unwrap_or(0);
                let mut out = String::new();
                for (field, cell) in self.schema.fields.iter().zip(self.cells(row)) {
                    let value = match cell {
                        CellValue::Id(_) | CellValue::Category(_) | CellValue::Empty => {
                            cell.format_tsv(0)
                        }
                        _ => cell.raw(),
                    };
                    out.push_str(&format!(
                        "{:<width$}  {}\n",
                        style(field.label).bold(),
                        value,
                        width = label_width
                    ));
                }
                Ok(out)
            }
        }
    }
}
