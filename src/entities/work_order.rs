//! Work order entity type - Corrective and ad-hoc maintenance jobs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::{closed_enum, Record};
use crate::core::identity::{EntityPrefix, RecordId};
use crate::core::schema::{FieldDef, RecordSchema};
use crate::core::value::FieldValue;
use crate::entities::ymd;

closed_enum! {
    /// Work order lifecycle state
    pub enum WorkOrderStatus {
        Open => "Open",
        InProgress => "In Progress",
        OnHold => "On Hold",
        Completed => "Completed",
    }
}

closed_enum! {
    pub enum Priority {
        Low => "Low",
        Medium => "Medium",
        High => "High",
    }
}

/// A work order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrder {
    pub id: RecordId,
    pub title: String,
    pub status: WorkOrderStatus,
    pub priority: Priority,
    pub assigned_to: String,
    pub due_date: NaiveDate,
}

/// Work order create payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkOrderDraft {
    pub title: String,
    pub status: WorkOrderStatus,
    pub priority: Priority,
    pub assigned_to: String,
    pub due_date: NaiveDate,
}

static FIELDS: &[FieldDef] = &[
    FieldDef::id(),
    FieldDef::text("title", "Title").searchable().sortable(),
    FieldDef::category("status", "Status", WorkOrderStatus::OPTIONS)
        .filterable()
        .default_value("Open"),
    FieldDef::category("priority", "Priority", Priority::OPTIONS)
        .filterable()
        .default_value("Medium"),
    FieldDef::text("assignedTo", "Assigned To"),
    FieldDef::date("dueDate", "Due Date").sortable().default_today(),
];

static SCHEMA: RecordSchema = RecordSchema {
    entity: "work-order",
    title: "Work Orders",
    prefix: EntityPrefix::Wo,
    fields: FIELDS,
};

impl Record for WorkOrder {
    const PREFIX: EntityPrefix = EntityPrefix::Wo;
    type Draft = WorkOrderDraft;

    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn from_draft(id: RecordId, draft: WorkOrderDraft) -> Self {
        Self {
            id,
            title: draft.title,
            status: draft.status,
            priority: draft.priority,
            assigned_to: draft.assigned_to,
            due_date: draft.due_date,
        }
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.to_string().into()),
            "title" => Some(self.title.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "priority" => Some(self.priority.as_str().into()),
            "assignedTo" => Some(self.assigned_to.as_str().into()),
            "dueDate" => Some(self.due_date.into()),
            _ => None,
        }
    }

    fn seed() -> Vec<Self> {
        let order = |n: u32,
                     title: &str,
                     status: WorkOrderStatus,
                     priority: Priority,
                     assigned_to: &str,
                     due_date: NaiveDate| WorkOrder {
            id: RecordId::new(EntityPrefix::Wo, n),
            title: title.to_string(),
            status,
            priority,
            assigned_to: assigned_to.to_string(),
            due_date,
        };

        use Priority::*;
        use WorkOrderStatus::*;
        vec![
            order(1, "Repair conveyor belt", Open, High, "John Doe", ymd(2023, 6, 15)),
            order(2, "Replace air filter", InProgress, Medium, "Jane Smith", ymd(2023, 6, 20)),
            order(3, "Lubricate machinery", Completed, Low, "Bob Johnson", ymd(2023, 6, 10)),
            order(4, "Inspect electrical systems", OnHold, High, "Alice Brown", ymd(2023, 6, 25)),
            order(5, "Calibrate sensors", Open, Medium, "Charlie Wilson", ymd(2023, 6, 18)),
        ]
    }
}
