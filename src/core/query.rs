//! Query engine - search, filter and sort a collection into a derived view
//!
//! [`derive_view`] is a pure function of its inputs. The pipeline always
//! runs in the same order: free-text search, then the AND of every set
//! filter slot, then an optional stable single-key sort.

use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

use crate::core::entity::Record;
use crate::core::schema::{FieldDef, FieldKind, RecordSchema};
use crate::core::value::{comparator, Comparator, FieldValue};

/// Errors from resolving user-supplied field names and values
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    #[error("Unknown field '{field}' for {entity}")]
    UnknownField { entity: &'static str, field: String },

    #[error("Field '{field}' of {entity} cannot be filtered (filterable: {allowed})")]
    NotFilterable {
        entity: &'static str,
        field: String,
        allowed: String,
    },

    #[error("Invalid value '{value}' for {field}. Use one of: {options}")]
    InvalidOption {
        field: &'static str,
        value: String,
        options: String,
    },
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn toggled(self) -> Self {
        match self {
            Direction::Ascending => Direction::Descending,
            Direction::Descending => Direction::Ascending,
        }
    }

    /// Arrow shown next to the sorted column header
    pub fn arrow(self) -> &'static str {
        match self {
            Direction::Ascending => "↑",
            Direction::Descending => "↓",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ascending => write!(f, "asc"),
            Direction::Descending => write!(f, "desc"),
        }
    }
}

/// Sort key and direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortDirective {
    pub field: &'static FieldDef,
    pub direction: Direction,
}

impl SortDirective {
    pub fn ascending(field: &'static FieldDef) -> Self {
        Self {
            field,
            direction: Direction::Ascending,
        }
    }

    /// Whether this directive sorts by `field`
    pub fn is_on(&self, field: &FieldDef) -> bool {
        self.field.name == field.name
    }
}

impl fmt::Display for SortDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field.name, self.direction)
    }
}

/// One optional equality slot per filterable field
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    schema: &'static RecordSchema,
    slots: Vec<(&'static FieldDef, Option<String>)>,
}

impl FilterState {
    /// All slots unset
    pub fn new(schema: &'static RecordSchema) -> Self {
        Self {
            schema,
            slots: schema.filterable_fields().map(|f| (f, None)).collect(),
        }
    }

    /// Set or clear a slot
    ///
    /// Category values are resolved case-insensitively to their canonical
    /// label, so the engine's exact comparison sees the stored spelling.
    pub fn set(&mut self, field: &str, value: Option<&str>) -> Result<(), QueryError> {
        let def = resolve_field(self.schema, field)?;
        let schema = self.schema;
        let Some(slot) = self.slots.iter_mut().find(|(f, _)| f.name == def.name) else {
            return Err(QueryError::NotFilterable {
                entity: schema.entity,
                field: def.name.to_string(),
                allowed: schema
                    .filterable_fields()
                    .map(|f| f.name)
                    .collect::<Vec<_>>()
                    .join(", "),
            });
        };

        slot.1 = match value.map(str::trim).filter(|v| !v.is_empty()) {
            None => None,
            Some(v) if def.kind == FieldKind::Category => {
                let canonical = def.option(v).ok_or_else(|| QueryError::InvalidOption {
                    field: def.name,
                    value: v.to_string(),
                    options: def.options.join(", "),
                })?;
                Some(canonical.to_string())
            }
            Some(v) => Some(v.to_string()),
        };
        Ok(())
    }

    /// Current value of a slot
    pub fn get(&self, field: &str) -> Option<&str> {
        self.slots
            .iter()
            .find(|(f, _)| f.matches(field))
            .and_then(|(_, v)| v.as_deref())
    }

    /// Slots that currently constrain the view
    pub fn active(&self) -> impl Iterator<Item = (&'static FieldDef, &str)> + '_ {
        self.slots
            .iter()
            .filter_map(|(f, v)| v.as_deref().map(|v| (*f, v)))
    }

    /// Every slot, set or not, in schema order
    pub fn slots(&self) -> impl Iterator<Item = (&'static FieldDef, Option<&str>)> + '_ {
        self.slots.iter().map(|(f, v)| (*f, v.as_deref()))
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.1 = None;
        }
    }
}

/// Look up a field by user-supplied name
pub fn resolve_field(
    schema: &'static RecordSchema,
    name: &str,
) -> Result<&'static FieldDef, QueryError> {
    schema.field(name).ok_or_else(|| QueryError::UnknownField {
        entity: schema.entity,
        field: name.to_string(),
    })
}

/// Inputs to one view computation
#[derive(Debug, Clone, Copy)]
pub struct Query<'a> {
    pub search: &'a str,
    pub filters: &'a FilterState,
    pub sort: Option<SortDirective>,
}

/// Compute the derived view of `records` for `query`
///
/// The input slice is never reordered.
pub fn derive_view<E: Record>(records: &[E], query: &Query<'_>) -> Vec<E> {
    let schema = E::schema();
    let term = query.search.to_lowercase();
    let filters: Vec<_> = query.filters.active().collect();

    let mut view: Vec<E> = records
        .iter()
        .filter(|r| term.is_empty() || matches_search(*r, schema, &term))
        .filter(|r| {
            filters.iter().all(|(field, value)| {
                r.field(field.name)
                    .is_some_and(|v| matches!(v, FieldValue::Text(ref s) if s == value))
            })
        })
        .cloned()
        .collect();

    if let Some(directive) = query.sort {
        sort_records(&mut view, directive);
    }
    view
}

fn matches_search<E: Record>(record: &E, schema: &RecordSchema, term: &str) -> bool {
    schema.searchable_fields().any(|f| {
        record
            .field(f.name)
            .is_some_and(|v| v.search_text().contains(term))
    })
}

/// Stable sort by one field
///
/// Descending flips the comparator's sign, so records with equal keys keep
/// their relative order in both directions.
fn sort_records<E: Record>(records: &mut Vec<E>, directive: SortDirective) {
    let cmp = comparator(directive.field.kind);
    let mut keyed: Vec<(Option<FieldValue>, E)> = records
        .drain(..)
        .map(|r| (r.field(directive.field.name), r))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| {
        let ord = compare_keys(cmp, a.as_ref(), b.as_ref());
        match directive.direction {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    });

    records.extend(keyed.into_iter().map(|(_, r)| r));
}

/// Order two sort keys, placing missing values after present ones
///
/// Every schema field projects a value today; ranking `None` keeps the
/// order total if one ever does not.
fn compare_keys(
    cmp: Comparator,
    a: Option<&FieldValue>,
    b: Option<&FieldValue>,
) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
