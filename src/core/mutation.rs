//! Mutation API - apply validated form payloads to a collection
//!
//! Payloads arriving here have already been through the form adapter and
//! are not checked again. Each call is a single step on the store.

use crate::core::entity::Record;
use crate::core::identity::RecordId;
use crate::core::store::Collection;

/// Create, update and delete entry points for one entity type
pub trait MutationApi<E: Record> {
    /// Store a new record and return it with its assigned id
    fn submit_create(&mut self, draft: E::Draft) -> E;

    /// Replace the record with the same id; `false` if none matched
    fn submit_update(&mut self, record: E) -> bool;

    /// Remove the record with this id; `false` if none matched
    fn submit_delete(&mut self, id: &RecordId) -> bool;
}

impl<E: Record> MutationApi<E> for Collection<E> {
    fn submit_create(&mut self, draft: E::Draft) -> E {
        self.create(draft)
    }

    fn submit_update(&mut self, record: E) -> bool {
        self.update(record)
    }

    fn submit_delete(&mut self, id: &RecordId) -> bool {
        self.delete(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::identity::EntityPrefix;
    use crate::entities::work_order::{Priority, WorkOrderDraft, WorkOrderStatus};
    use crate::entities::{ymd, WorkOrder};

    fn submit<M: MutationApi<WorkOrder>>(api: &mut M) -> WorkOrder {
        api.submit_create(WorkOrderDraft {
            title: "Replace drive chain".to_string(),
            status: WorkOrderStatus::Open,
            priority: Priority::High,
            assigned_to: "Jane Smith".to_string(),
            due_date: ymd(2023, 7, 1),
        })
    }

    #[test]
    fn test_submit_round_trip() {
        let mut orders = Collection::<WorkOrder>::seeded();
        let mut created = submit(&mut orders);
        assert_eq!(created.id.to_string(), "WO-006");

        created.status = WorkOrderStatus::Completed;
        assert!(orders.submit_update(created.clone()));
        assert_eq!(orders.get(&created.id).unwrap().status, WorkOrderStatus::Completed);

        assert!(orders.submit_delete(&created.id));
        assert_eq!(orders.len(), 5);
        assert!(!orders.submit_delete(&RecordId::new(EntityPrefix::Wo, 6)));
    }
}
