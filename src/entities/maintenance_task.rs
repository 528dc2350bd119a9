//! Maintenance task entity type - Recurring preventive maintenance

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::{closed_enum, Record};
use crate::core::identity::{EntityPrefix, RecordId};
use crate::core::schema::{FieldDef, RecordSchema};
use crate::core::value::FieldValue;
use crate::entities::ymd;

closed_enum! {
    /// How often a task recurs
    pub enum Frequency {
        Daily => "Daily",
        Weekly => "Weekly",
        Monthly => "Monthly",
        Quarterly => "Quarterly",
        BiAnnually => "Bi-annually",
        Annually => "Annually",
    }
}

closed_enum! {
    /// Task progress
    pub enum TaskStatus {
        Scheduled => "Scheduled",
        InProgress => "In Progress",
        Completed => "Completed",
        Overdue => "Overdue",
    }
}

/// A preventive maintenance task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTask {
    pub id: RecordId,
    /// Name of the asset the task applies to
    pub asset_name: String,
    pub task_description: String,
    pub frequency: Frequency,
    pub last_performed: NaiveDate,
    pub next_due: NaiveDate,
    pub assigned_to: String,
    pub status: TaskStatus,
}

/// Maintenance task create payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceTaskDraft {
    pub asset_name: String,
    pub task_description: String,
    pub frequency: Frequency,
    pub last_performed: NaiveDate,
    pub next_due: NaiveDate,
    pub assigned_to: String,
    pub status: TaskStatus,
}

static FIELDS: &[FieldDef] = &[
    FieldDef::id(),
    FieldDef::text("assetName", "Asset").searchable().sortable(),
    FieldDef::text("taskDescription", "Task").searchable(),
    FieldDef::category("frequency", "Frequency", Frequency::OPTIONS),
    FieldDef::date("lastPerformed", "Last Performed").default_today(),
    FieldDef::date("nextDue", "Next Due").sortable().default_today(),
    FieldDef::text("assignedTo", "Assigned To"),
    FieldDef::category("status", "Status", TaskStatus::OPTIONS)
        .filterable()
        .default_value("Scheduled"),
];

static SCHEMA: RecordSchema = RecordSchema {
    entity: "task",
    title: "Preventive Maintenance",
    prefix: EntityPrefix::Pm,
    fields: FIELDS,
};

impl Record for MaintenanceTask {
    const PREFIX: EntityPrefix = EntityPrefix::Pm;
    type Draft = MaintenanceTaskDraft;

    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.task_description
    }

    fn from_draft(id: RecordId, draft: MaintenanceTaskDraft) -> Self {
        Self {
            id,
            asset_name: draft.asset_name,
            task_description: draft.task_description,
            frequency: draft.frequency,
            last_performed: draft.last_performed,
            next_due: draft.next_due,
            assigned_to: draft.assigned_to,
            status: draft.status,
        }
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.to_string().into()),
            "assetName" => Some(self.asset_name.as_str().into()),
            "taskDescription" => Some(self.task_description.as_str().into()),
            "frequency" => Some(self.frequency.as_str().into()),
            "lastPerformed" => Some(self.last_performed.into()),
            "nextDue" => Some(self.next_due.into()),
            "assignedTo" => Some(self.assigned_to.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            _ => None,
        }
    }

    fn seed() -> Vec<Self> {
        let task = |n: u32,
                    asset_name: &str,
                    task_description: &str,
                    frequency: Frequency,
                    last_performed: NaiveDate,
                    next_due: NaiveDate,
                    assigned_to: &str,
                    status: TaskStatus| MaintenanceTask {
            id: RecordId::new(EntityPrefix::Pm, n),
            asset_name: asset_name.to_string(),
            task_description: task_description.to_string(),
            frequency,
            last_performed,
            next_due,
            assigned_to: assigned_to.to_string(),
            status,
        };

        vec![
            task(
                1,
                "Conveyor Belt A",
                "Lubricate bearings and check belt tension",
                Frequency::Monthly,
                ymd(2023, 5, 15),
                ymd(2023, 6, 15),
                "John Doe",
                TaskStatus::Scheduled,
            ),
            task(
                2,
                "HVAC System",
                "Replace air filters and clean coils",
                Frequency::Quarterly,
                ymd(2023, 3, 1),
                ymd(2023, 6, 1),
                "Jane Smith",
                TaskStatus::Overdue,
            ),
            task(
                3,
                "CNC Machine",
                "Calibrate and perform precision tests",
                Frequency::BiAnnually,
                ymd(2023, 1, 10),
                ymd(2023, 7, 10),
                "Bob Johnson",
                TaskStatus::Scheduled,
            ),
            task(
                4,
                "Forklift 1",
                "Check hydraulic system and tire pressure",
                Frequency::Weekly,
                ymd(2023, 6, 5),
                ymd(2023, 6, 12),
                "Alice Brown",
                TaskStatus::InProgress,
            ),
            task(
                5,
                "Electrical Panel",
                "Thermal imaging and connection tightness check",
                Frequency::Annually,
                ymd(2022, 12, 1),
                ymd(2023, 12, 1),
                "Charlie Wilson",
                TaskStatus::Scheduled,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_seed() {
        let tasks = MaintenanceTask::seed();
        assert_eq!(tasks.len(), 5);
        assert_eq!(tasks[0].id.to_string(), "PM-001");
        assert_eq!(tasks[2].frequency, Frequency::BiAnnually);
        assert_eq!(tasks[4].last_performed, ymd(2022, 12, 1));
    }

    #[test]
    fn test_frequency_label() {
        assert_eq!(Frequency::BiAnnually.to_string(), "Bi-annually");
        assert_eq!("bi-annually".parse::<Frequency>().unwrap(), Frequency::BiAnnually);
    }

    #[test]
    fn test_task_search_covers_description() {
        let searchable: Vec<_> = MaintenanceTask::schema()
            .searchable_fields()
            .map(|f| f.name)
            .collect();
        assert_eq!(searchable, vec!["id", "assetName", "taskDescription"]);
    }

    #[test]
    fn test_task_fields_cover_schema() {
        let task = &MaintenanceTask::seed()[0];
        for field in MaintenanceTask::schema().fields {
            assert!(task.field(field.name).is_some(), "missing {}", field.name);
        }
    }
}
