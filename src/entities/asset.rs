//! Asset entity type - Equipment, vehicles and facilities under maintenance

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::entity::{closed_enum, Record};
use crate::core::identity::{EntityPrefix, RecordId};
use crate::core::schema::{FieldDef, RecordSchema};
use crate::core::value::FieldValue;
use crate::entities::ymd;

closed_enum! {
    /// Asset classification
    pub enum AssetType {
        Conveyor => "Conveyor",
        Vehicle => "Vehicle",
        Manufacturing => "Manufacturing",
        Facility => "Facility",
    }
}

closed_enum! {
    /// Operating status of an asset
    pub enum AssetStatus {
        Operational => "Operational",
        UnderMaintenance => "Under Maintenance",
        OutOfService => "Out of Service",
    }
}

/// A maintained asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub status: AssetStatus,
    pub location: String,
    pub last_maintenance: NaiveDate,
    pub next_maintenance: NaiveDate,
}

/// Asset create payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDraft {
    pub name: String,
    #[serde(rename = "type")]
    pub asset_type: AssetType,
    pub status: AssetStatus,
    pub location: String,
    pub last_maintenance: NaiveDate,
    pub next_maintenance: NaiveDate,
}

static FIELDS: &[FieldDef] = &[
    FieldDef::id(),
    FieldDef::text("name", "Name").searchable().sortable(),
    FieldDef::category("type", "Type", AssetType::OPTIONS).filterable(),
    FieldDef::category("status", "Status", AssetStatus::OPTIONS)
        .filterable()
        .default_value("Operational"),
    FieldDef::text("location", "Location"),
    FieldDef::date("lastMaintenance", "Last Maintenance")
        .sortable()
        .default_today(),
    FieldDef::date("nextMaintenance", "Next Maintenance")
        .sortable()
        .default_today(),
];

static SCHEMA: RecordSchema = RecordSchema {
    entity: "asset",
    title: "Assets",
    prefix: EntityPrefix::Ast,
    fields: FIELDS,
};

impl Record for Asset {
    const PREFIX: EntityPrefix = EntityPrefix::Ast;
    type Draft = AssetDraft;

    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn from_draft(id: RecordId, draft: AssetDraft) -> Self {
        Self {
            id,
            name: draft.name,
            asset_type: draft.asset_type,
            status: draft.status,
            location: draft.location,
            last_maintenance: draft.last_maintenance,
            next_maintenance: draft.next_maintenance,
        }
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.to_string().into()),
            "name" => Some(self.name.as_str().into()),
            "type" => Some(self.asset_type.as_str().into()),
            "status" => Some(self.status.as_str().into()),
            "location" => Some(self.location.as_str().into()),
            "lastMaintenance" => Some(self.last_maintenance.into()),
            "nextMaintenance" => Some(self.next_maintenance.into()),
            _ => None,
        }
    }

    fn seed() -> Vec<Self> {
        let asset = |n: u32,
                     name: &str,
                     asset_type: AssetType,
                     status: AssetStatus,
                     location: &str,
                     last: NaiveDate,
                     next: NaiveDate| Asset {
            id: RecordId::new(EntityPrefix::Ast, n),
            name: name.to_string(),
            asset_type,
            status,
            location: location.to_string(),
            last_maintenance: last,
            next_maintenance: next,
        };

        vec![
            asset(
                1,
                "Conveyor Belt A",
                AssetType::Conveyor,
                AssetStatus::Operational,
                "Warehouse 1",
                ymd(2023, 5, 15),
                ymd(2023, 8, 15),
            ),
            asset(
                2,
                "Forklift 1",
                AssetType::Vehicle,
                AssetStatus::UnderMaintenance,
                "Warehouse 2",
                ymd(2023, 6, 1),
                ymd(2023, 9, 1),
            ),
            asset(
                3,
                "CNC Machine",
                AssetType::Manufacturing,
                AssetStatus::Operational,
                "Production Floor",
                ymd(2023, 4, 20),
                ymd(2023, 7, 20),
            ),
            asset(
                4,
                "HVAC System",
                AssetType::Facility,
                AssetStatus::Operational,
                "Building A",
                ymd(2023, 3, 10),
                ymd(2023, 9, 10),
            ),
            asset(
                5,
                "Packaging Machine",
                AssetType::Manufacturing,
                AssetStatus::OutOfService,
                "Packaging Area",
                ymd(2023, 6, 5),
                ymd(2023, 7, 5),
            ),
        ]
    }
}
