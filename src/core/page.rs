//! Pages - a collection with its search, filter and sort state
//!
//! A [`Page`] is the single writer of its collection. Its derived view is
//! recomputed from the current inputs every time it is asked for.
//! [`Console`] erases the record type so callers can drive any page by
//! entity kind.

use serde_json::Value;

use crate::core::entity::Record;
use crate::core::form::{self, FormError, FormInput};
use crate::core::identity::RecordId;
use crate::core::mutation::MutationApi;
use crate::core::query::{self, FilterState, Query, QueryError, SortDirective};
use crate::core::schema::RecordSchema;
use crate::core::sort::SortState;
use crate::core::store::Collection;
use crate::core::value::FieldValue;

/// One record flattened for display
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub id: RecordId,
    pub title: String,
    schema: &'static RecordSchema,
    /// One cell per schema field, in column order
    pub cells: Vec<Option<FieldValue>>,
    /// The record in its serialized form
    pub json: Value,
}

impl Row {
    fn of<E: Record>(record: &E) -> Self {
        let schema = E::schema();
        Self {
            id: record.id(),
            title: record.title().to_string(),
            schema,
            cells: schema.fields.iter().map(|f| record.field(f.name)).collect(),
            json: serde_json::to_value(record).unwrap_or_default(),
        }
    }

    /// Cell for a field name
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.schema
            .position(field)
            .and_then(|i| self.cells.get(i))
            .and_then(Option::as_ref)
    }

    /// Cell rendered with its field's presentation rules
    pub fn display(&self, field: &str) -> String {
        match (self.schema.field(field), self.get(field)) {
            (Some(def), Some(value)) => value.display_as(def.kind),
            _ => String::new(),
        }
    }
}

/// Record-type-erased page operations
pub trait Console {
    fn schema(&self) -> &'static RecordSchema;

    /// Number of records in the collection (not the view)
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn search(&self) -> &str;
    fn set_search(&mut self, term: &str);

    fn filters(&self) -> &FilterState;
    fn set_filter(&mut self, field: &str, value: Option<&str>) -> Result<(), QueryError>;

    /// Toggle sorting on a column and return the resulting directive
    fn activate_sort(&mut self, field: &str) -> Result<SortDirective, QueryError>;
    fn sort_directive(&self) -> Option<SortDirective>;
    fn clear_sort(&mut self);

    /// Clear search, filters and sort
    fn reset(&mut self);

    /// The derived view as rows
    fn rows(&self) -> Vec<Row>;

    /// A record from the collection, whether or not it is in the view
    fn row(&self, id: &RecordId) -> Option<Row>;

    fn create(&mut self, input: &FormInput) -> Result<Row, FormError>;

    /// Edit a record; `Ok(None)` if no record has that id
    fn edit(&mut self, id: &RecordId, input: &FormInput) -> Result<Option<Row>, FormError>;

    /// Delete a record; `false` if no record has that id
    fn delete(&mut self, id: &RecordId) -> bool;
}

/// A browsable collection of one entity type
#[derive(Debug, Clone)]
pub struct Page<E: Record> {
    collection: Collection<E>,
    search: String,
    filters: FilterState,
    sort: SortState,
}

impl<E: Record> Page<E> {
    pub fn new(collection: Collection<E>) -> Self {
        Self {
            collection,
            search: String::new(),
            filters: FilterState::new(E::schema()),
            sort: SortState::Unsorted,
        }
    }

    pub fn collection(&self) -> &Collection<E> {
        &self.collection
    }

    /// Current derived view
    pub fn view(&self) -> Vec<E> {
        query::derive_view(
            self.collection.records(),
            &Query {
                search: &self.search,
                filters: &self.filters,
                sort: self.sort.directive(),
            },
        )
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn submit_create(&mut self, draft: E::Draft) -> E {
        self.collection.submit_create(draft)
    }

    pub fn submit_update(&mut self, record: E) -> bool {
        self.collection.submit_update(record)
    }

    pub fn submit_delete(&mut self, id: &RecordId) -> bool {
        self.collection.submit_delete(id)
    }
}

impl<E: Record> Console for Page<E> {
    fn schema(&self) -> &'static RecordSchema {
        E::schema()
    }

    fn len(&self) -> usize {
        self.collection.len()
    }

    fn search(&self) -> &str {
        &self.search
    }

    fn set_search(&mut self, term: &str) {
        self.search = term.to_string();
    }

    fn filters(&self) -> &FilterState {
        &self.filters
    }

    fn set_filter(&mut self, field: &str, value: Option<&str>) -> Result<(), QueryError> {
        self.filters.set(field, value)
    }

    fn activate_sort(&mut self, field: &str) -> Result<SortDirective, QueryError> {
        let def = query::resolve_field(E::schema(), field)?;
        self.sort = self.sort.activate(def);
        Ok(self
            .sort
            .directive()
            .unwrap_or_else(|| SortDirective::ascending(def)))
    }

    fn sort_directive(&self) -> Option<SortDirective> {
        self.sort.directive()
    }

    fn clear_sort(&mut self) {
        self.sort = SortState::Unsorted;
    }

    fn reset(&mut self) {
        self.search.clear();
        self.filters.clear();
        self.sort = SortState::Unsorted;
    }

    fn rows(&self) -> Vec<Row> {
        self.view().iter().map(Row::of).collect()
    }

    fn row(&self, id: &RecordId) -> Option<Row> {
        self.collection.get(id).map(Row::of)
    }

    fn create(&mut self, input: &FormInput) -> Result<Row, FormError> {
        let draft = form::create_payload::<E>(input)?;
        Ok(Row::of(&self.submit_create(draft)))
    }

    fn edit(&mut self, id: &RecordId, input: &FormInput) -> Result<Option<Row>, FormError> {
        let Some(existing) = self.collection.get(id) else {
            return Ok(None);
        };
        let updated = form::update_record(existing, input)?;
        let row = Row::of(&updated);
        Ok(self.submit_update(updated).then_some(row))
    }

    fn delete(&mut self, id: &RecordId) -> bool {
        self.submit_delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::EntityPrefix;
    use crate::core::query::Direction;
    use crate::entities::{Asset, Supplier};

    fn ids(rows: &[Row]) -> Vec<String> {
        rows.iter().map(|r| r.id.to_string()).collect()
    }

    fn assets() -> Page<Asset> {
        Page::new(Collection::seeded())
    }

    #[test]
    fn test_view_follows_inputs() {
        let mut page = assets();
        page.set_search("AST-00");
        assert_eq!(page.rows().len(), 5);

        page.set_filter("status", Some("Operational")).unwrap();
        assert_eq!(ids(&page.rows()), ["AST-001", "AST-003", "AST-004"]);

        let directive = page.activate_sort("lastMaintenance").unwrap();
        assert_eq!(directive.direction, Direction::Ascending);
        assert_eq!(ids(&page.rows()), ["AST-004", "AST-003", "AST-001"]);

        let directive = page.activate_sort("lastMaintenance").unwrap();
        assert_eq!(directive.direction, Direction::Descending);
        assert_eq!(ids(&page.rows()), ["AST-001", "AST-003", "AST-004"]);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut page = assets();
        page.set_search("forklift");
        page.set_filter("type", Some("Vehicle")).unwrap();
        page.activate_sort("name").unwrap();
        page.reset();
        assert_eq!(page.search(), "");
        assert!(page.filters().is_empty());
        assert_eq!(page.sort_directive(), None);
        assert_eq!(page.rows().len(), 5);
    }

    #[test]
    fn test_view_recomputed_after_mutation() {
        let mut page = assets();
        page.set_filter("status", Some("Out of Service")).unwrap();
        assert_eq!(ids(&page.rows()), ["AST-005"]);

        let id = RecordId::new(EntityPrefix::Ast, 5);
        let input: FormInput = [("status", "Operational")].into_iter().collect();
        let row = page.edit(&id, &input).unwrap().unwrap();
        assert_eq!(row.display("status"), "Operational");
        assert!(page.rows().is_empty());
    }

    #[test]
    fn test_edit_missing_record() {
        let mut page = assets();
        let id = RecordId::new(EntityPrefix::Ast, 77);
        let input: FormInput = [("name", "Ghost")].into_iter().collect();
        assert_eq!(page.edit(&id, &input), Ok(None));
    }

    #[test]
    fn test_failed_create_leaves_collection_alone() {
        let mut page = assets();
        let input: FormInput = [("name", "Boiler")].into_iter().collect();
        assert!(page.create(&input).is_err());
        assert_eq!(page.len(), 5);
    }

    #[test]
    fn test_row_cells_use_kind_display() {
        let page: Page<Supplier> = Page::new(Collection::seeded());
        let rows = page.rows();
        assert_eq!(rows[0].display("rating"), "4.5");
        assert_eq!(rows[0].display("contactPerson"), "John Doe");
        assert_eq!(rows[0].json["contactPerson"], "John Doe");
    }

    #[test]
    fn test_page_is_object_safe() {
        let mut page = assets();
        let console: &mut dyn Console = &mut page;
        assert!(console.delete(&RecordId::new(EntityPrefix::Ast, 1)));
        assert_eq!(console.len(), 4);
    }
}
