//! Upkeep Console
//!
//! An in-memory maintenance-operations console: six record collections
//! (assets, parts, suppliers, users, preventive maintenance tasks and work
//! orders), each browsable through search, filters and a sortable column,
//! and editable through schema-driven forms.

pub mod cli;
pub mod core;
pub mod entities;
