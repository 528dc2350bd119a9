//! Entity type definitions
//!
//! The console manages six record types, each with its own id prefix:
//!
//! - [`Asset`] (`AST`) - Equipment, vehicles and facilities
//! - [`Part`] (`PRT`) - Spare parts and consumables in inventory
//! - [`Supplier`] (`SUP`) - Vendors with contact details and a rating
//! - [`User`] (`USR`) - People with access and their role
//! - [`MaintenanceTask`] (`PM`) - Recurring preventive maintenance
//! - [`WorkOrder`] (`WO`) - Corrective and ad-hoc jobs

use chrono::NaiveDate;

pub mod asset;
pub mod maintenance_task;
pub mod part;
pub mod supplier;
pub mod user;
pub mod work_order;

pub use asset::Asset;
pub use maintenance_task::MaintenanceTask;
pub use part::Part;
pub use supplier::Supplier;
pub use user::User;
pub use work_order::WorkOrder;

/// Calendar date for seed data
pub(crate) fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
