//! In-memory collection store
//!
//! A [`Collection`] owns the ordered records of one entity type. Every
//! mutation builds a new `Vec` and swaps it in, so an [`Arc`] snapshot taken
//! before a mutation keeps seeing the old records.

use std::sync::Arc;

use tracing::debug;

use crate::core::entity::Record;
use crate::core::identity::RecordId;

/// Ordered, in-memory records of one entity type
#[derive(Debug, Clone)]
pub struct Collection<E: Record> {
    records: Arc<Vec<E>>,
}

impl<E: Record> Default for Collection<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Record> Collection<E> {
    /// Empty collection
    pub fn new() -> Self {
        Self {
            records: Arc::new(Vec::new()),
        }
    }

    pub fn from_records(records: Vec<E>) -> Self {
        Self {
            records: Arc::new(records),
        }
    }

    /// Collection holding the entity's sample records
    pub fn seeded() -> Self {
        Self::from_records(E::seed())
    }

    /// Records in insertion order
    pub fn records(&self) -> &[E] {
        &self.records
    }

    /// Shared handle to the current records
    pub fn snapshot(&self) -> Arc<Vec<E>> {
        Arc::clone(&self.records)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// First record with the given id
    pub fn get(&self, id: &RecordId) -> Option<&E> {
        self.records.iter().find(|r| r.id() == *id)
    }

    /// Id the next create will assign
    ///
    /// The ordinal is derived from the current length, not from a counter.
    /// After a delete this can repeat an id that is still in use.
    pub fn next_id(&self) -> RecordId {
        let ordinal = u32::try_from(self.records.len()).unwrap_or(u32::MAX - 1) + 1;
        RecordId::new(E::PREFIX, ordinal)
    }

    /// Append a new record built from `draft` and return it
    pub fn create(&mut self, draft: E::Draft) -> E {
        let id = self.next_id();
        if self.get(&id).is_some() {
            debug!("Created id {} is already held by another record", id);
        }
        let record = E::from_draft(id, draft);

        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.extend(self.records.iter().cloned());
        next.push(record.clone());
        self.records = Arc::new(next);

        debug!("Created {}", id);
        record
    }

    /// Replace every record with the same id, keeping their positions
    ///
    /// Returns `false` (and changes nothing) if no record has that id.
    pub fn update(&mut self, record: E) -> bool {
        let id = record.id();
        if self.get(&id).is_none() {
            debug!("Update ignored, no record {}", id);
            return false;
        }

        let next: Vec<E> = self
            .records
            .iter()
            .map(|r| if r.id() == id { record.clone() } else { r.clone() })
            .collect();
        self.records = Arc::new(next);

        debug!("Updated {}", id);
        true
    }

    /// Remove every record with the given id
    ///
    /// Returns `false` (and changes nothing) if no record has that id.
    pub fn delete(&mut self, id: &RecordId) -> bool {
        if self.get(id).is_none() {
            debug!("Delete ignored, no record {}", id);
            return false;
        }

        let next: Vec<E> = self
            .records
            .iter()
            .filter(|r| r.id() != *id)
            .cloned()
            .collect();
        self.records = Arc::new(next);

        debug!("Deleted {}", id);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::EntityPrefix;
    use crate::entities::asset::{AssetDraft, AssetStatus, AssetType};
    use crate::entities::{ymd, Asset};
    use std::collections::HashSet;

    fn draft(name: &str) -> AssetDraft {
        AssetDraft {
            name: name.to_string(),
            asset_type: AssetType::Facility,
            status: AssetStatus::Operational,
            location: "Dock".to_string(),
            last_maintenance: ymd(2024, 1, 1),
            next_maintenance: ymd(2024, 7, 1),
        }
    }

    fn ids(collection: &Collection<Asset>) -> Vec<String> {
        collection.records().iter().map(|a| a.id.to_string()).collect()
    }

    #[test]
    fn test_create_appends_with_length_derived_id() {
        let mut assets = Collection::<Asset>::seeded();
        let created = assets.create(draft("Boiler"));
        assert_eq!(created.id.to_string(), "AST-006");
        assert_eq!(assets.len(), 6);
        assert_eq!(assets.records().last().unwrap().name, "Boiler");
    }

    #[test]
    fn test_ids_unique_under_steady_growth() {
        let mut assets = Collection::<Asset>::new();
        for n in 0..25 {
            assets.create(draft(&format!("Asset {}", n)));
        }
        let unique: HashSet<_> = assets.records().iter().map(|a| a.id).collect();
        assert_eq!(unique.len(), 25);
        assert_eq!(assets.records()[24].id.to_string(), "AST-025");
    }

    #[test]
    fn test_create_after_delete_can_collide() {
        let mut assets = Collection::<Asset>::seeded();
        assert!(assets.delete(&RecordId::new(EntityPrefix::Ast, 2)));
        let created = assets.create(draft("Boiler"));

        // Four records remain, so the new one is minted as AST-005 again
        assert_eq!(created.id.to_string(), "AST-005");
        let dupes = assets
            .records()
            .iter()
            .filter(|a| a.id.to_string() == "AST-005")
            .count();
        assert_eq!(dupes, 2);
    }

    #[test]
    fn test_update_after_collision_replaces_every_match() {
        let mut assets = Collection::<Asset>::seeded();
        assets.delete(&RecordId::new(EntityPrefix::Ast, 2));
        let mut boiler = assets.create(draft("Boiler"));
        boiler.name = "Boiler v2".to_string();
        assert!(assets.update(boiler));

        let names: Vec<_> = assets
            .records()
            .iter()
            .map(|a| format!("{}={}", a.id, a.name))
            .collect();
        assert_eq!(
            names,
            [
                "AST-001=Conveyor Belt A",
                "AST-003=CNC Machine",
                "AST-004=HVAC System",
                "AST-005=Boiler v2",
                "AST-005=Boiler v2",
            ]
        );
    }

    #[test]
    fn test_update_replaces_in_place() {
        let mut assets = Collection::<Asset>::seeded();
        let mut forklift = assets.records()[1].clone();
        forklift.status = AssetStatus::Operational;
        assert!(assets.update(forklift));
        assert_eq!(assets.records()[1].status, AssetStatus::Operational);
        assert_eq!(ids(&assets), ["AST-001", "AST-002", "AST-003", "AST-004", "AST-005"]);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut assets = Collection::<Asset>::seeded();
        let before = assets.snapshot();
        let mut ghost = assets.records()[0].clone();
        ghost.id = RecordId::new(EntityPrefix::Ast, 99);
        assert!(!assets.update(ghost));
        assert!(Arc::ptr_eq(&before, &assets.snapshot()));
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let mut assets = Collection::<Asset>::seeded();
        assert!(!assets.delete(&RecordId::new(EntityPrefix::Ast, 42)));
        assert_eq!(assets.len(), 5);
    }

    #[test]
    fn test_snapshot_is_not_mutated() {
        let mut assets = Collection::<Asset>::seeded();
        let before = assets.snapshot();
        assets.delete(&RecordId::new(EntityPrefix::Ast, 1));
        assets.create(draft("Boiler"));
        assert_eq!(before.len(), 5);
        assert_eq!(before[0].id.to_string(), "AST-001");
        assert_eq!(assets.len(), 5);
    }
}
