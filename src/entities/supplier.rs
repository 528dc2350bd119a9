//! Supplier entity type - Vendors of parts, tools and services

use serde::{Deserialize, Serialize};

use crate::core::entity::{closed_enum, Record};
use crate::core::identity::{EntityPrefix, RecordId};
use crate::core::schema::{FieldDef, RecordSchema};
use crate::core::value::FieldValue;

closed_enum! {
    /// What a supplier provides
    pub enum SupplierCategory {
        MechanicalParts => "Mechanical Parts",
        ElectricalComponents => "Electrical Components",
        HydraulicSystems => "Hydraulic Systems",
        ToolsAndEquipment => "Tools and Equipment",
        SafetyEquipment => "Safety Equipment",
    }
}

/// An approved supplier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    pub id: RecordId,
    pub name: String,
    pub category: SupplierCategory,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Score out of 5
    pub rating: f64,
}

/// Supplier create payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierDraft {
    pub name: String,
    pub category: SupplierCategory,
    pub contact_person: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub rating: f64,
}

static FIELDS: &[FieldDef] = &[
    FieldDef::id(),
    FieldDef::text("name", "Name").searchable().sortable(),
    FieldDef::category("category", "Category", SupplierCategory::OPTIONS).filterable(),
    FieldDef::text("contactPerson", "Contact Person").searchable(),
    FieldDef::text("email", "Email"),
    FieldDef::text("phone", "Phone"),
    FieldDef::text("address", "Address"),
    FieldDef::rating("rating", "Rating").sortable(),
];

static SCHEMA: RecordSchema = RecordSchema {
    entity: "supplier",
    title: "Suppliers",
    prefix: EntityPrefix::Sup,
    fields: FIELDS,
};

impl Record for Supplier {
    const PREFIX: EntityPrefix = EntityPrefix::Sup;
    type Draft = SupplierDraft;

    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn from_draft(id: RecordId, draft: SupplierDraft) -> Self {
        Self {
            id,
            name: draft.name,
            category: draft.category,
            contact_person: draft.contact_person,
            email: draft.email,
            phone: draft.phone,
            address: draft.address,
            rating: draft.rating,
        }
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.to_string().into()),
            "name" => Some(self.name.as_str().into()),
            "category" => Some(self.category.as_str().into()),
            "contactPerson" => Some(self.contact_person.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "phone" => Some(self.phone.as_str().into()),
            "address" => Some(self.address.as_str().into()),
            "rating" => Some(self.rating.into()),
            _ => None,
        }
    }

    fn seed() -> Vec<Self> {
        let supplier = |n: u32,
                        name: &str,
                        category: SupplierCategory,
                        contact_person: &str,
                        email: &str,
                        phone: &str,
                        address: &str,
                        rating: f64| Supplier {
            id: RecordId::new(EntityPrefix::Sup, n),
            name: name.to_string(),
            category,
            contact_person: contact_person.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            address: address.to_string(),
            rating,
        };

        vec![
            supplier(
                1,
                "ABC Manufacturing",
                SupplierCategory::MechanicalParts,
                "John Doe",
                "john@abcmfg.com",
                "123-456-7890",
                "123 Main St, Anytown, USA",
                4.5,
            ),
            supplier(
                2,
                "XYZ Electronics",
                SupplierCategory::ElectricalComponents,
                "Jane Smith",
                "jane@xyzelectronics.com",
                "987-654-3210",
                "456 Oak Ave, Somewhere, USA",
                4.2,
            ),
            supplier(
                3,
                "FluidTech Solutions",
                SupplierCategory::HydraulicSystems,
                "Bob Johnson",
                "bob@fluidtech.com",
                "456-789-0123",
                "789 Pine Rd, Nowhere, USA",
                3.8,
            ),
            supplier(
                4,
                "Global Tools Inc.",
                SupplierCategory::ToolsAndEquipment,
                "Alice Brown",
                "alice@globaltools.com",
                "321-654-0987",
                "159 Elm St, Everywhere, USA",
                4.7,
            ),
            supplier(
                5,
                "SafetyFirst Gear",
                SupplierCategory::SafetyEquipment,
                "Charlie Wilson",
                "charlie@safetyfirst.com",
                "741-852-9630",
                "357 Cedar Ln, Anywhere, USA",
                4.9,
            ),
        ]
    }
}
