//! Schema-driven interactive form prompts
//!
//! Walks the form fields of a record schema and asks for each value.
//! Answers are returned as raw [`FormInput`] and go through the same form
//! adapter as `field=value` arguments.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::core::form::{initial_value, FormInput};
use crate::core::page::Row;
use crate::core::schema::{FieldDef, FieldKind, RecordSchema};

/// Interactive prompts for a create or edit form
pub struct FormWizard {
    theme: ColorfulTheme,
}

impl Default for FormWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl FormWizard {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Prompt for every form field
    ///
    /// With `existing`, each prompt starts at the record's current value.
    pub fn run(&self, schema: &RecordSchema, existing: Option<&Row>) -> Result<FormInput> {
        eprintln!();
        match existing {
            Some(row) => eprintln!(
                "{} Editing {}",
                style("◆").cyan(),
                style(row.id).bold()
            ),
            None => eprintln!(
                "{} New {}",
                style("◆").cyan(),
                style(schema.entity).bold()
            ),
        }
        eprintln!("{}", style("─".repeat(50)).dim());

        let mut input = FormInput::new();
        for field in schema.form_fields() {
            let current = existing
                .and_then(|row| row.get(field.name))
                .map(|v| v.to_string())
                .or_else(|| initial_value(field));
            let value = self.prompt_field(field, current)?;
            input.set(field.name, value);
        }
        Ok(input)
    }

    fn prompt_field(&self, field: &FieldDef, current: Option<String>) -> Result<String> {
        let prompt = match field.kind {
            FieldKind::Date => format!("{} (YYYY-MM-DD)", field.label),
            _ => field.label.to_string(),
        };

        if field.kind == FieldKind::Category {
            let default_idx = current
                .as_deref()
                .and_then(|c| field.options.iter().position(|o| *o == c))
                .unwrap_or(0);
            let selection = Select::with_theme(&self.theme)
                .with_prompt(&prompt)
                .items(field.options)
                .default(default_idx)
                .interact()
                .into_diagnostic()?;
            return Ok(field.options[selection].to_string());
        }

        let input = Input::<String>::with_theme(&self.theme).with_prompt(&prompt);
        let input = match current {
            Some(value) => input.default(value),
            None => input,
        };
        input.interact_text().into_diagnostic()
    }
}
