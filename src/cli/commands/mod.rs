//! CLI command implementations

pub mod completions;
pub mod config;
pub mod delete;
pub mod edit;
pub mod list;
pub mod new;
pub mod pages;
pub mod schema;
pub mod shell;
pub mod show;
