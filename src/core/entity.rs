//! Record trait - common interface for all entity types

use serde::{de::DeserializeOwned, Serialize};

use crate::core::identity::{EntityPrefix, RecordId};
use crate::core::schema::RecordSchema;
use crate::core::value::FieldValue;

/// Common trait for all console records
pub trait Record: Clone + std::fmt::Debug + Serialize + DeserializeOwned + 'static {
    /// The record type prefix (e.g., AST, WO)
    const PREFIX: EntityPrefix;

    /// The create payload: every field except `id`
    type Draft: Clone + std::fmt::Debug + DeserializeOwned;

    /// Static schema for this record type
    fn schema() -> &'static RecordSchema;

    /// Get the record's id
    fn id(&self) -> RecordId;

    /// Get the record's headline (name or title)
    fn title(&self) -> &str;

    /// Build a stored record from an id and a create payload
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    /// Read a field by its schema name
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// The fixed sample records a collection starts with
    fn seed() -> Vec<Self>;
}

/// Define a closed enumeration whose serialized and displayed form is
/// its human label (`"Under Maintenance"`).
///
/// Generates `Display`, case-insensitive `FromStr`, `ALL` and `OPTIONS`.
macro_rules! closed_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Every label in declaration order
            pub const OPTIONS: &'static [&'static str] = &[$($label),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.trim().eq_ignore_ascii_case($label) {
                        return Ok($name::$variant);
                    }
                )+
                Err(format!(
                    "Invalid {}: {}. Use one of: {}",
                    stringify!($name),
                    s,
                    Self::OPTIONS.join(", ")
                ))
            }
        }
    };
}

pub(crate) use closed_enum;
