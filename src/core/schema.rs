//! Static record schemas
//!
//! A [`RecordSchema`] describes one entity variant: its fields, the kind of
//! each field, and which fields take part in search, filtering, sorting and
//! the create/edit form. The query engine and the form adapter are driven
//! entirely by these values, so a new entity only needs a schema and a
//! [`Record`](crate::core::Record) impl.

use crate::core::identity::EntityPrefix;

/// The kind of a field, which selects its parser and comparator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Free text, compared lexicographically
    Text,
    /// Whole number (quantities, stock levels)
    Number,
    /// Money amount with two decimal places
    Currency,
    /// Closed enumeration (status, priority, role, ...)
    Category,
    /// Calendar date (`YYYY-MM-DD`)
    Date,
    /// Decimal score such as a supplier rating
    Rating,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldKind::Text => write!(f, "text"),
            FieldKind::Number => write!(f, "number"),
            FieldKind::Currency => write!(f, "currency"),
            FieldKind::Category => write!(f, "category"),
            FieldKind::Date => write!(f, "date"),
            FieldKind::Rating => write!(f, "rating"),
        }
    }
}

/// Value a form starts out with before the user touches a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefault {
    None,
    Value(&'static str),
    Today,
}

/// One field of a record schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    /// Serialized key (camelCase, as records are serialized)
    pub name: &'static str,
    /// Column header
    pub label: &'static str,
    pub kind: FieldKind,
    /// Allowed values for [`FieldKind::Category`] fields
    pub options: &'static [&'static str],
    /// Participates in free-text search
    pub searchable: bool,
    /// Has a filter slot
    pub filterable: bool,
    /// Offered as a sortable column
    pub sortable: bool,
    /// Present on the create/edit form
    pub form: bool,
    pub default: FieldDefault,
}

impl FieldDef {
    const fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            options: &[],
            searchable: false,
            filterable: false,
            sortable: false,
            form: true,
            default: FieldDefault::None,
        }
    }

    pub const fn text(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub const fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number)
    }

    pub const fn currency(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Currency)
    }

    pub const fn date(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date)
    }

    pub const fn rating(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Rating)
    }

    pub const fn category(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    ) -> Self {
        let mut def = Self::new(name, label, FieldKind::Category);
        def.options = options;
        def
    }

    /// The record id: searchable, sortable, never on the form
    pub const fn id() -> Self {
        let mut def = Self::new("id", "ID", FieldKind::Text);
        def.searchable = true;
        def.sortable = true;
        def.form = false;
        def
    }

    pub const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub const fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Shown but not editable (maintained by the system)
    pub const fn read_only(mut self) -> Self {
        self.form = false;
        self
    }

    pub const fn default_value(mut self, value: &'static str) -> Self {
        self.default = FieldDefault::Value(value);
        self
    }

    pub const fn default_today(mut self) -> Self {
        self.default = FieldDefault::Today;
        self
    }

    /// Whether `name` refers to this field
    ///
    /// Case, `_` and `-` are ignored so `last_maintenance`,
    /// `last-maintenance` and `lastMaintenance` all resolve.
    pub fn matches(&self, name: &str) -> bool {
        normalize(self.name) == normalize(name)
    }

    /// Resolve user input to one of this field's options (case-insensitive)
    pub fn option(&self, value: &str) -> Option<&'static str> {
        self.options
            .iter()
            .copied()
            .find(|opt| opt.eq_ignore_ascii_case(value.trim()))
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Static description of one entity variant
#[derive(Debug, PartialEq)]
pub struct RecordSchema {
    /// Singular name used on the command line (`asset`)
    pub entity: &'static str,
    /// Page title (`Assets`)
    pub title: &'static str,
    pub prefix: EntityPrefix,
    /// All fields in column order, `id` first
    pub fields: &'static [FieldDef],
}

impl RecordSchema {
    /// Look up a field by name
    pub fn field(&self, name: &str) -> Option<&'static FieldDef> {
        self.fields.iter().find(|f| f.matches(name))
    }

    /// Index of a field in column order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.matches(name))
    }

    pub fn searchable_fields(&self) -> impl Iterator<Item = &'static FieldDef> {
        self.fields.iter().filter(|f| f.searchable)
    }

    pub fn filterable_fields(&self) -> impl Iterator<Item = &'static FieldDef> {
        self.fields.iter().filter(|f| f.filterable)
    }

    pub fn sortable_fields(&self) -> impl Iterator<Item = &'static FieldDef> {
        self.fields.iter().filter(|f| f.sortable)
    }

    pub fn form_fields(&self) -> impl Iterator<Item = &'static FieldDef> {
        self.fields.iter().filter(|f| f.form)
    }
}
