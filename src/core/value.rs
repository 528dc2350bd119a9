//! Typed field values and the per-kind comparator table

use chrono::NaiveDate;
use std::cmp::Ordering;
use std::fmt;

use crate::core::schema::FieldKind;

/// A single field value read out of a record
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text and category values
    Text(String),
    Integer(i64),
    /// Currency amounts and ratings
    Decimal(f64),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        FieldValue::Text(s.into())
    }

    /// Text used for free-text search matching
    pub fn search_text(&self) -> String {
        self.to_string().to_lowercase()
    }

    /// Render with the presentation rules of a field kind
    pub fn display_as(&self, kind: FieldKind) -> String {
        match (kind, self) {
            (FieldKind::Currency, FieldValue::Decimal(v)) => format!("${:.2}", v),
            (FieldKind::Rating, FieldValue::Decimal(v)) => format!("{:.1}", v),
            _ => self.to_string(),
        }
    }

    /// JSON representation matching the record's serde form
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Integer(n) => serde_json::Value::from(*n),
            FieldValue::Decimal(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Date(d) => serde_json::Value::String(d.format("%Y-%m-%d").to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{}", s),
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Decimal(v) => write!(f, "{}", v),
            FieldValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Integer(n)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Integer(n.into())
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Decimal(v)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

/// Three-way comparison for one field kind
pub type Comparator = fn(&FieldValue, &FieldValue) -> Ordering;

/// Select the comparator for a field kind
///
/// Values of a variant the kind does not expect compare as equal, which
/// leaves them in their original relative order under a stable sort.
pub fn comparator(kind: FieldKind) -> Comparator {
    match kind {
        FieldKind::Text | FieldKind::Category => compare_text,
        FieldKind::Number => compare_integer,
        FieldKind::Currency | FieldKind::Rating => compare_decimal,
        FieldKind::Date => compare_date,
    }
}

/// Lexicographic on the raw value; case is significant
fn compare_text(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

fn compare_integer(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

fn compare_decimal(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Decimal(a), FieldValue::Decimal(b)) => a.total_cmp(b),
        _ => Ordering::Equal,
    }
}

fn compare_date(a: &FieldValue, b: &FieldValue) -> Ordering {
    match (a, b) {
        (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> FieldValue {
        FieldValue::Date(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_text_comparator_is_case_sensitive() {
        let cmp = comparator(FieldKind::Text);
        assert_eq!(cmp(&"Belt".into(), &"Bearing".into()), Ordering::Greater);
        // Uppercase sorts before lowercase on the raw value
        assert_eq!(cmp(&"Zebra".into(), &"apple".into()), Ordering::Less);
    }

    #[test]
    fn test_number_comparator_is_numeric() {
        let cmp = comparator(FieldKind::Number);
        assert_eq!(cmp(&FieldValue::from(9i64), &FieldValue::from(10i64)), Ordering::Less);
    }

    #[test]
    fn test_decimal_comparator() {
        let cmp = comparator(FieldKind::Currency);
        assert_eq!(cmp(&5.5.into(), &15.99.into()), Ordering::Less);
        let cmp = comparator(FieldKind::Rating);
        assert_eq!(cmp(&4.9.into(), &4.5.into()), Ordering::Greater);
    }

    #[test]
    fn test_date_comparator() {
        let cmp = comparator(FieldKind::Date);
        assert_eq!(cmp(&date(2023, 3, 10), &date(2023, 5, 15)), Ordering::Less);
        assert_eq!(cmp(&date(2023, 3, 10), &date(2023, 3, 10)), Ordering::Equal);
    }

    #[test]
    fn test_mismatched_variants_compare_equal() {
        let cmp = comparator(FieldKind::Date);
        assert_eq!(cmp(&"2023-01-01".into(), &date(2023, 1, 1)), Ordering::Equal);
    }

    #[test]
    fn test_display_as_kind() {
        assert_eq!(FieldValue::from(5.5).display_as(FieldKind::Currency), "$5.50");
        assert_eq!(FieldValue::from(4.0).display_as(FieldKind::Rating), "4.0");
        assert_eq!(date(2023, 6, 1).display_as(FieldKind::Date), "2023-06-01");
    }

    #[test]
    fn test_search_text_lowercases() {
        assert_eq!(FieldValue::from("Forklift 1").search_text(), "forklift 1");
    }
}
