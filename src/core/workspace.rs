//! Workspace - the six record pages and which one is selected

use std::fmt;
use std::str::FromStr;

use crate::core::entity::Record;
use crate::core::identity::EntityPrefix;
use crate::core::page::{Console, Page};
use crate::core::schema::RecordSchema;
use crate::core::store::Collection;
use crate::entities::{Asset, MaintenanceTask, Part, Supplier, User, WorkOrder};

/// The record collections, in navigation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Asset,
    Part,
    Supplier,
    User,
    Task,
    WorkOrder,
}

impl EntityKind {
    pub const ALL: &'static [EntityKind] = &[
        EntityKind::Asset,
        EntityKind::Part,
        EntityKind::Supplier,
        EntityKind::User,
        EntityKind::Task,
        EntityKind::WorkOrder,
    ];

    pub fn schema(self) -> &'static RecordSchema {
        match self {
            EntityKind::Asset => Asset::schema(),
            EntityKind::Part => Part::schema(),
            EntityKind::Supplier => Supplier::schema(),
            EntityKind::User => User::schema(),
            EntityKind::Task => MaintenanceTask::schema(),
            EntityKind::WorkOrder => WorkOrder::schema(),
        }
    }

    /// Name used on the command line
    pub fn as_str(self) -> &'static str {
        self.schema().entity
    }

    pub fn prefix(self) -> EntityPrefix {
        self.schema().prefix
    }

    pub fn from_prefix(prefix: EntityPrefix) -> Self {
        match prefix {
            EntityPrefix::Ast => EntityKind::Asset,
            EntityPrefix::Prt => EntityKind::Part,
            EntityPrefix::Sup => EntityKind::Supplier,
            EntityPrefix::Usr => EntityKind::User,
            EntityPrefix::Pm => EntityKind::Task,
            EntityPrefix::Wo => EntityKind::WorkOrder,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_' && !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "asset" | "assets" | "ast" => Ok(EntityKind::Asset),
            "part" | "parts" | "prt" | "inventory" => Ok(EntityKind::Part),
            "supplier" | "suppliers" | "sup" => Ok(EntityKind::Supplier),
            "user" | "users" | "usr" => Ok(EntityKind::User),
            "task" | "tasks" | "pm" | "maintenance" | "preventivemaintenance" => {
                Ok(EntityKind::Task)
            }
            "workorder" | "workorders" | "wo" => Ok(EntityKind::WorkOrder),
            _ => Err(format!(
                "Unknown collection: {}. Use one of: {}",
                s,
                EntityKind::ALL
                    .iter()
                    .map(|k| k.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )),
        }
    }
}

/// All six pages plus the navigation selection
#[derive(Debug, Clone)]
pub struct Workspace {
    assets: Page<Asset>,
    parts: Page<Part>,
    suppliers: Page<Supplier>,
    users: Page<User>,
    tasks: Page<MaintenanceTask>,
    work_orders: Page<WorkOrder>,
    active: EntityKind,
}

impl Default for Workspace {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Workspace {
    /// Every page starts with its sample records
    pub fn seeded() -> Self {
        Self {
            assets: Page::new(Collection::seeded()),
            parts: Page::new(Collection::seeded()),
            suppliers: Page::new(Collection::seeded()),
            users: Page::new(Collection::seeded()),
            tasks: Page::new(Collection::seeded()),
            work_orders: Page::new(Collection::seeded()),
            active: EntityKind::Asset,
        }
    }

    /// Every page starts empty
    pub fn empty() -> Self {
        Self {
            assets: Page::new(Collection::new()),
            parts: Page::new(Collection::new()),
            suppliers: Page::new(Collection::new()),
            users: Page::new(Collection::new()),
            tasks: Page::new(Collection::new()),
            work_orders: Page::new(Collection::new()),
            active: EntityKind::Asset,
        }
    }

    pub fn new(seed: bool) -> Self {
        if seed {
            Self::seeded()
        } else {
            Self::empty()
        }
    }

    /// Navigation entries
    pub fn kinds(&self) -> &'static [EntityKind] {
        EntityKind::ALL
    }

    pub fn page(&self, kind: EntityKind) -> &dyn Console {
        match kind {
            EntityKind::Asset => &self.assets,
            EntityKind::Part => &self.parts,
            EntityKind::Supplier => &self.suppliers,
            EntityKind::User => &self.users,
            EntityKind::Task => &self.tasks,
            EntityKind::WorkOrder => &self.work_orders,
        }
    }

    pub fn page_mut(&mut self, kind: EntityKind) -> &mut dyn Console {
        match kind {
            EntityKind::Asset => &mut self.assets,
            EntityKind::Part => &mut self.parts,
            EntityKind::Supplier => &mut self.suppliers,
            EntityKind::User => &mut self.users,
            EntityKind::Task => &mut self.tasks,
            EntityKind::WorkOrder => &mut self.work_orders,
        }
    }

    /// The selected page
    pub fn active(&self) -> EntityKind {
        self.active
    }

    pub fn select(&mut self, kind: EntityKind) {
        self.active = kind;
    }

    pub fn current(&self) -> &dyn Console {
        self.page(self.active)
    }

    pub fn current_mut(&mut self) -> &mut dyn Console {
        self.page_mut(self.active)
    }

    pub fn assets(&self) -> &Page<Asset> {
        &self.assets
    }
}
