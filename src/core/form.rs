//! Form adapter - turn raw `field=value` input into typed payloads
//!
//! The adapter is the only place user-entered text is checked. It requires
//! every form field to be present and non-empty, coerces each value by its
//! field kind, and hands back either a payload the mutation API can apply
//! or a [`FormError`] explaining why nothing was submitted.

use chrono::{Local, NaiveDate};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::entity::Record;
use crate::core::schema::{FieldDef, FieldDefault, FieldKind, RecordSchema};

/// Reasons a form submission is refused
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid number for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Invalid date for {field}: '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("Invalid value '{value}' for {field}. Use one of: {options}")]
    InvalidOption {
        field: &'static str,
        value: String,
        options: String,
    },

    #[error("Unknown field '{field}' for {entity}")]
    UnknownField { entity: &'static str, field: String },

    #[error("Field '{field}' cannot be set")]
    ReadOnlyField { field: &'static str },

    #[error("Expected field=value, got '{token}'")]
    Malformed { token: String },

    #[error("Could not build {entity}: {reason}")]
    Rejected { entity: &'static str, reason: String },
}

/// Raw form input, in the order it was entered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pairs: Vec<(String, String)>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `field=value` tokens; the value may itself contain `=`
    pub fn parse<I, S>(tokens: I) -> Result<Self, FormError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut input = Self::new();
        for token in tokens {
            let token = token.as_ref();
            let Some((field, value)) = token.split_once('=') else {
                return Err(FormError::Malformed {
                    token: token.to_string(),
                });
            };
            if field.trim().is_empty() {
                return Err(FormError::Malformed {
                    token: token.to_string(),
                });
            }
            input.set(field.trim(), value);
        }
        Ok(input)
    }

    /// Set a field, replacing any earlier value for the same name
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let field = field.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(f, _)| *f == field) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((field, value)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(f, _)| f == field)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(f, v)| (f.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormInput {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut input = Self::new();
        for (field, value) in iter {
            input.set(field, value);
        }
        input
    }
}

/// Value a blank form starts with for `field`
pub fn initial_value(field: &FieldDef) -> Option<String> {
    initial_value_on(field, Local::now().date_naive())
}

fn initial_value_on(field: &FieldDef, today: NaiveDate) -> Option<String> {
    match field.default {
        FieldDefault::None => None,
        FieldDefault::Value(v) => Some(v.to_string()),
        FieldDefault::Today => Some(today.format("%Y-%m-%d").to_string()),
    }
}

/// Build a create payload from form input
///
/// Fields left out start from their form default (today's date, the
/// initial status) exactly as a freshly opened form would.
pub fn create_payload<E: Record>(input: &FormInput) -> Result<E::Draft, FormError> {
    create_payload_on::<E>(input, Local::now().date_naive())
}

fn create_payload_on<E: Record>(input: &FormInput, today: NaiveDate) -> Result<E::Draft, FormError> {
    let schema = E::schema();
    let given = resolve_input(schema, input)?;

    let mut object = Map::new();
    for field in schema.form_fields() {
        let raw = given
            .iter()
            .find(|(f, _)| f.name == field.name)
            .map(|(_, v)| v.to_string())
            .or_else(|| initial_value_on(field, today));
        let raw = raw.unwrap_or_default();
        object.insert(field.name.to_string(), coerce(field, &raw)?);
    }

    serde_json::from_value(Value::Object(object)).map_err(|e| FormError::Rejected {
        entity: schema.entity,
        reason: e.to_string(),
    })
}

/// Apply form input on top of an existing record
///
/// Only the given fields change; the id is carried over untouched.
pub fn update_record<E: Record>(existing: &E, input: &FormInput) -> Result<E, FormError> {
    let schema = E::schema();
    let given = resolve_input(schema, input)?;

    let rejected = |e: serde_json::Error| FormError::Rejected {
        entity: schema.entity,
        reason: e.to_string(),
    };

    let mut value = serde_json::to_value(existing).map_err(rejected)?;
    let Value::Object(object) = &mut value else {
        return Err(FormError::Rejected {
            entity: schema.entity,
            reason: "record is not an object".to_string(),
        });
    };
    for (field, raw) in given {
        object.insert(field.name.to_string(), coerce(field, raw)?);
    }

    serde_json::from_value(value).map_err(rejected)
}

/// Match every input name to an editable form field
fn resolve_input<'a>(
    schema: &'static RecordSchema,
    input: &'a FormInput,
) -> Result<Vec<(&'static FieldDef, &'a str)>, FormError> {
    input
        .iter()
        .map(|(name, value)| {
            let field = schema.field(name).ok_or_else(|| FormError::UnknownField {
                entity: schema.entity,
                field: name.to_string(),
            })?;
            if !field.form {
                return Err(FormError::ReadOnlyField { field: field.name });
            }
            Ok((field, value))
        })
        .collect()
}

/// Presence check and kind-directed coercion of one raw value
fn coerce(field: &'static FieldDef, raw: &str) -> Result<Value, FormError> {
    if raw.is_empty() {
        return Err(FormError::MissingField { field: field.name });
    }

    match field.kind {
        FieldKind::Text => Ok(Value::String(raw.to_string())),
        FieldKind::Number => raw
            .trim()
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| FormError::InvalidNumber {
                field: field.name,
                value: raw.to_string(),
            }),
        FieldKind::Currency | FieldKind::Rating => raw
            .trim()
            .parse::<f64>()
            .ok()
            .and_then(serde_json::Number::from_f64)
            .map(Value::Number)
            .ok_or_else(|| FormError::InvalidNumber {
                field: field.name,
                value: raw.to_string(),
            }),
        FieldKind::Date => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
            .map(|d| Value::String(d.format("%Y-%m-%d").to_string()))
            .map_err(|_| FormError::InvalidDate {
                field: field.name,
                value: raw.to_string(),
            }),
        FieldKind::Category => field
            .option(raw)
            .map(|v| Value::String(v.to_string()))
            .ok_or_else(|| FormError::InvalidOption {
                field: field.name,
                value: raw.to_string(),
                options: field.options.join(", "),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::asset::{AssetStatus, AssetType};
    use crate::entities::part::PartCategory;
    use crate::entities::user::Role;
    use crate::entities::{ymd, Asset, Part, User};

    fn input(pairs: &[(&str, &str)]) -> FormInput {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_parse_pairs() {
        let input = FormInput::parse(["name=Boiler", "location=Roof = north"]).unwrap();
        assert_eq!(input.get("name"), Some("Boiler"));
        assert_eq!(input.get("location"), Some("Roof = north"));
    }

    #[test]
    fn test_parse_rejects_token_without_equals() {
        let err = FormInput::parse(["name"]).unwrap_err();
        assert_eq!(err, FormError::Malformed { token: "name".to_string() });
    }

    #[test]
    fn test_create_coerces_by_kind() {
        let draft = create_payload::<Part>(&input(&[
            ("name", "Gasket"),
            ("category", "mechanical"),
            ("quantity", "12"),
            ("unit", "pcs"),
            ("location", "Shelf E1"),
            ("minimumStock", "4"),
            ("price", "3.25"),
        ]))
        .unwrap();
        assert_eq!(draft.category, PartCategory::Mechanical);
        assert_eq!(draft.quantity, 12);
        assert_eq!(draft.price, 3.25);
    }

    #[test]
    fn test_create_applies_form_defaults() {
        let today = ymd(2024, 2, 29);
        let draft = create_payload_on::<Asset>(
            &input(&[("name", "Boiler"), ("type", "Facility"), ("location", "Basement")]),
            today,
        )
        .unwrap();
        assert_eq!(draft.asset_type, AssetType::Facility);
        assert_eq!(draft.status, AssetStatus::Operational);
        assert_eq!(draft.last_maintenance, today);
        assert_eq!(draft.next_maintenance, today);
    }

    #[test]
    fn test_create_requires_every_field() {
        let err = create_payload::<Asset>(&input(&[("name", "Boiler"), ("type", "Facility")]))
            .unwrap_err();
        assert_eq!(err, FormError::MissingField { field: "location" });

        let err = create_payload::<Asset>(&input(&[
            ("name", ""),
            ("type", "Facility"),
            ("location", "Basement"),
        ]))
        .unwrap_err();
        assert_eq!(err, FormError::MissingField { field: "name" });
    }

    #[test]
    fn test_create_rejects_bad_values() {
        let base = [
            ("name", "Gasket"),
            ("category", "Mechanical"),
            ("quantity", "12"),
            ("unit", "pcs"),
            ("location", "Shelf E1"),
            ("minimumStock", "4"),
            ("price", "3.25"),
        ];

        let mut bad = input(&base);
        bad.set("quantity", "twelve");
        assert!(matches!(
            create_payload::<Part>(&bad),
            Err(FormError::InvalidNumber { field: "quantity", .. })
        ));

        let mut bad = input(&base);
        bad.set("category", "Plastics");
        assert!(matches!(
            create_payload::<Part>(&bad),
            Err(FormError::InvalidOption { field: "category", .. })
        ));

        let mut bad = input(&base);
        bad.set("colour", "red");
        assert!(matches!(
            create_payload::<Part>(&bad),
            Err(FormError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_create_rejects_bad_date() {
        let err = create_payload::<Asset>(&input(&[
            ("name", "Boiler"),
            ("type", "Facility"),
            ("location", "Basement"),
            ("lastMaintenance", "15/05/2023"),
        ]))
        .unwrap_err();
        assert!(matches!(err, FormError::InvalidDate { field: "lastMaintenance", .. }));
    }

    #[test]
    fn test_read_only_fields_are_refused() {
        let user = &User::seed()[0];
        let err = update_record(user, &input(&[("lastLogin", "never")])).unwrap_err();
        assert_eq!(err, FormError::ReadOnlyField { field: "lastLogin" });

        let err = update_record(user, &input(&[("id", "USR-009")])).unwrap_err();
        assert_eq!(err, FormError::ReadOnlyField { field: "id" });
    }

    #[test]
    fn test_update_overlays_given_fields() {
        let user = &User::seed()[1];
        let updated = update_record(user, &input(&[("role", "manager")])).unwrap();
        assert_eq!(updated.id, user.id);
        assert_eq!(updated.role, Role::Manager);
        assert_eq!(updated.name, user.name);
        assert_eq!(updated.last_login, user.last_login);
    }

    #[test]
    fn test_update_rejects_empty_value() {
        let asset = &Asset::seed()[0];
        let err = update_record(asset, &input(&[("name", "")])).unwrap_err();
        assert_eq!(err, FormError::MissingField { field: "name" });
    }
}
