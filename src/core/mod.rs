//! Core module - records, views and mutations

pub mod config;
pub mod entity;
pub mod form;
pub mod identity;
pub mod mutation;
pub mod page;
pub mod query;
pub mod schema;
pub mod sort;
pub mod store;
pub mod value;
pub mod workspace;

pub use config::{Config, ConfigError};
pub use entity::Record;
pub use form::{FormError, FormInput};
pub use identity::{EntityPrefix, IdParseError, RecordId};
pub use mutation::MutationApi;
pub use page::{Console, Page, Row};
pub use query::{derive_view, Direction, FilterState, Query, QueryError, SortDirective};
pub use schema::{FieldDef, FieldKind, RecordSchema};
pub use sort::SortState;
pub use store::Collection;
pub use value::FieldValue;
pub use workspace::{EntityKind, Workspace};
