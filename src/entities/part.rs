//! Part entity type - Spare parts and consumables held in inventory

use serde::{Deserialize, Serialize};

use crate::core::entity::{closed_enum, Record};
use crate::core::identity::{EntityPrefix, RecordId};
use crate::core::schema::{FieldDef, RecordSchema};
use crate::core::value::FieldValue;

closed_enum! {
    /// Inventory category
    pub enum PartCategory {
        Mechanical => "Mechanical",
        Electrical => "Electrical",
        Fluids => "Fluids",
    }
}

/// A stocked spare part
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    pub id: RecordId,
    pub name: String,
    pub category: PartCategory,
    pub quantity: i64,
    /// Unit of measure (pcs, liters, ...)
    pub unit: String,
    pub location: String,
    pub minimum_stock: i64,
    /// Unit price
    pub price: f64,
}

/// Part create payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartDraft {
    pub name: String,
    pub category: PartCategory,
    pub quantity: i64,
    pub unit: String,
    pub location: String,
    pub minimum_stock: i64,
    pub price: f64,
}

impl Part {
    /// Stock at or below the reorder threshold
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.minimum_stock
    }
}

static FIELDS: &[FieldDef] = &[
    FieldDef::id(),
    FieldDef::text("name", "Name").searchable().sortable(),
    FieldDef::category("category", "Category", PartCategory::OPTIONS).filterable(),
    FieldDef::number("quantity", "Quantity").sortable(),
    FieldDef::text("unit", "Unit"),
    FieldDef::text("location", "Location"),
    FieldDef::number("minimumStock", "Minimum Stock"),
    FieldDef::currency("price", "Price").sortable(),
];

static SCHEMA: RecordSchema = RecordSchema {
    entity: "part",
    title: "Parts & Inventory",
    prefix: EntityPrefix::Prt,
    fields: FIELDS,
};

impl Record for Part {
    const PREFIX: EntityPrefix = EntityPrefix::Prt;
    type Draft = PartDraft;

    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn from_draft(id: RecordId, draft: PartDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            quantity: draft.quantity,
            unit: draft.unit,
            location: draft.location,
            minimum_stock: draft.minimum_stock,
            price: draft.price,
        }
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.to_string().into()),
            "name" => Some(self.name.as_str().into()),
            "category" => Some(self.category.as_str().into()),
            "quantity" => Some(self.quantity.into()),
            "unit" => Some(self.unit.as_str().into()),
            "location" => Some(self.location.as_str().into()),
            "minimumStock" => Some(self.minimum_stock.into()),
            "price" => Some(self.price.into()),
            _ => None,
        }
    }

    fn seed() -> Vec<Self> {
        let part = |n: u32,
                    name: &str,
                    category: PartCategory,
                    quantity: i64,
                    unit: &str,
                    location: &str,
                    minimum_stock: i64,
                    price: f64| Part {
            id: RecordId::new(EntityPrefix::Prt, n),
            name: name.to_string(),
            category,
            quantity,
            unit: unit.to_string(),
            location: location.to_string(),
            minimum_stock,
            price,
        };

        vec![
            part(1, "Bearing", PartCategory::Mechanical, 50, "pcs", "Shelf A1", 20, 15.99),
            part(2, "Electric Motor", PartCategory::Electrical, 10, "pcs", "Shelf B2", 5, 199.99),
            part(3, "Hydraulic Oil", PartCategory::Fluids, 200, "liters", "Tank 1", 100, 5.50),
            part(4, "Belt", PartCategory::Mechanical, 30, "pcs", "Shelf C3", 15, 25.00),
            part(5, "Circuit Breaker", PartCategory::Electrical, 25, "pcs", "Shelf D4", 10, 45.75),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_part_seed() {
        let parts = Part::seed();
        assert_eq!(parts.len(), 5);
        assert_eq!(parts[2].name, "Hydraulic Oil");
        assert_eq!(parts[2].unit, "liters");
        assert_eq!(parts[4].price, 45.75);
    }

    #[test]
    fn test_part_low_stock() {
        let mut part = Part::seed().remove(0);
        assert!(!part.is_low_stock());
        part.quantity = 20;
        assert!(part.is_low_stock());
    }

    #[test]
    fn test_part_serializes_camel_case() {
        let json = serde_json::to_value(&Part::seed()[0]).unwrap();
        assert_eq!(json["minimumStock"], 20);
        assert_eq!(json["category"], "Mechanical");
    }

    #[test]
    fn test_part_fields_cover_schema() {
        let part = &Part::seed()[0];
        for field in Part::schema().fields {
            assert!(part.field(field.name).is_some(), "missing {}", field.name);
        }
    }
}
