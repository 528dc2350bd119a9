//! User entity type - People with access to the console

use serde::{Deserialize, Serialize};

use crate::core::entity::{closed_enum, Record};
use crate::core::identity::{EntityPrefix, RecordId};
use crate::core::schema::{FieldDef, RecordSchema};
use crate::core::value::FieldValue;

/// `lastLogin` value for users who have never signed in
pub const NEVER_LOGGED_IN: &str = "N/A";

closed_enum! {
    /// Access role
    pub enum Role {
        Admin => "Admin",
        Manager => "Manager",
        Technician => "Technician",
        Viewer => "Viewer",
    }
}

/// A console user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
    /// `YYYY-MM-DD HH:MM`, or `N/A`
    pub last_login: String,
}

/// User create payload
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub department: String,
}

static FIELDS: &[FieldDef] = &[
    FieldDef::id(),
    FieldDef::text("name", "Name").searchable().sortable(),
    FieldDef::text("email", "Email").searchable(),
    FieldDef::category("role", "Role", Role::OPTIONS).filterable(),
    FieldDef::text("department", "Department"),
    FieldDef::text("lastLogin", "Last Login").read_only(),
];

static SCHEMA: RecordSchema = RecordSchema {
    entity: "user",
    title: "Users",
    prefix: EntityPrefix::Usr,
    fields: FIELDS,
};

impl Record for User {
    const PREFIX: EntityPrefix = EntityPrefix::Usr;
    type Draft = UserDraft;

    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn title(&self) -> &str {
        &self.name
    }

    fn from_draft(id: RecordId, draft: UserDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            role: draft.role,
            department: draft.department,
            last_login: NEVER_LOGGED_IN.to_string(),
        }
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        match name {
            "id" => Some(self.id.to_string().into()),
            "name" => Some(self.name.as_str().into()),
            "email" => Some(self.email.as_str().into()),
            "role" => Some(self.role.as_str().into()),
            "department" => Some(self.department.as_str().into()),
            "lastLogin" => Some(self.last_login.as_str().into()),
            _ => None,
        }
    }

    fn seed() -> Vec<Self> {
        let user = |n: u32, name: &str, email: &str, role: Role, department: &str, login: &str| User {
            id: RecordId::new(EntityPrefix::Usr, n),
            name: name.to_string(),
            email: email.to_string(),
            role,
            department: department.to_string(),
            last_login: login.to_string(),
        };

        vec![
            user(1, "John Doe", "john@example.com", Role::Admin, "Maintenance", "2023-06-15 09:30"),
            user(2, "Jane Smith", "jane@example.com", Role::Technician, "Operations", "2023-06-14 14:45"),
            user(3, "Bob Johnson", "bob@example.com", Role::Manager, "Engineering", "2023-06-15 11:20"),
            user(4, "Alice Brown", "alice@example.com", Role::Technician, "Maintenance", "2023-06-13 16:00"),
            user(5, "Charlie Wilson", "charlie@example.com", Role::Viewer, "Finance", "2023-06-15 08:15"),
        ]
    }
}
