//! Record identity: type prefix plus a zero-padded ordinal (`AST-001`)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Record type prefixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityPrefix {
    /// Asset (equipment, vehicle, facility)
    Ast,
    /// Spare part / inventory item
    Prt,
    /// Supplier
    Sup,
    /// Console user
    Usr,
    /// Preventive maintenance task
    Pm,
    /// Work order
    Wo,
}

impl EntityPrefix {
    /// Get the string representation of the prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityPrefix::Ast => "AST",
            EntityPrefix::Prt => "PRT",
            EntityPrefix::Sup => "SUP",
            EntityPrefix::Usr => "USR",
            EntityPrefix::Pm => "PM",
            EntityPrefix::Wo => "WO",
        }
    }

    /// Get all valid prefixes
    pub fn all() -> &'static [EntityPrefix] {
        &[
            EntityPrefix::Ast,
            EntityPrefix::Prt,
            EntityPrefix::Sup,
            EntityPrefix::Usr,
            EntityPrefix::Pm,
            EntityPrefix::Wo,
        ]
    }
}

impl fmt::Display for EntityPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityPrefix {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "AST" => Ok(EntityPrefix::Ast),
            "PRT" => Ok(EntityPrefix::Prt),
            "SUP" => Ok(EntityPrefix::Sup),
            "USR" => Ok(EntityPrefix::Usr),
            "PM" => Ok(EntityPrefix::Pm),
            "WO" => Ok(EntityPrefix::Wo),
            _ => Err(IdParseError::InvalidPrefix(s.to_string())),
        }
    }
}

/// A record identifier combining a type prefix and an ordinal
///
/// Displays as `<PREFIX>-<NNN>`, the ordinal zero-padded to three digits.
/// Ordinals past 999 print all of their digits (`AST-1000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId {
    prefix: EntityPrefix,
    ordinal: u32,
}

impl RecordId {
    /// Create a RecordId from a prefix and ordinal
    pub fn new(prefix: EntityPrefix, ordinal: u32) -> Self {
        Self { prefix, ordinal }
    }

    /// Get the record prefix
    pub fn prefix(&self) -> EntityPrefix {
        self.prefix
    }

    /// Get the ordinal component
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// Parse a RecordId from a string
    pub fn parse(s: &str) -> Result<Self, IdParseError> {
        s.parse()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:03}", self.prefix, self.ordinal)
    }
}

impl FromStr for RecordId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix_str, ordinal_str) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| IdParseError::MissingDelimiter(s.to_string()))?;

        let prefix = prefix_str.parse()?;
        if ordinal_str.is_empty() || !ordinal_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(IdParseError::InvalidOrdinal(ordinal_str.to_string()));
        }
        let ordinal = ordinal_str
            .parse()
            .map_err(|_| IdParseError::InvalidOrdinal(ordinal_str.to_string()))?;

        Ok(Self { prefix, ordinal })
    }
}

impl Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing record IDs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdParseError {
    #[error("invalid record prefix: '{0}' (valid: AST, PRT, SUP, USR, PM, WO)")]
    InvalidPrefix(String),

    #[error("missing '-' delimiter in record ID: '{0}'")]
    MissingDelimiter(String),

    #[error("invalid ordinal '{0}': expected digits")]
    InvalidOrdinal(String),
}
