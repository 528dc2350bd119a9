//! Column sort toggling
//!
//! Activating a column sorts by it ascending. Activating the sorted column
//! again flips the direction. Activation never returns to unsorted; use
//! [`SortState::Unsorted`] directly to reset.

use crate::core::query::{Direction, SortDirective};
use crate::core::schema::FieldDef;

/// Current sort of a page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortState {
    #[default]
    Unsorted,
    Sorted(SortDirective),
}

impl SortState {
    /// Next state after the user activates `field`
    pub fn activate(self, field: &'static FieldDef) -> SortState {
        match self {
            SortState::Sorted(current) if current.is_on(field) => SortState::Sorted(SortDirective {
                field,
                direction: current.direction.toggled(),
            }),
            _ => SortState::Sorted(SortDirective::ascending(field)),
        }
    }

    pub fn directive(&self) -> Option<SortDirective> {
        match self {
            SortState::Unsorted => None,
            SortState::Sorted(directive) => Some(*directive),
        }
    }

    /// Direction for `field` if it is the sorted column
    pub fn direction_of(&self, field: &FieldDef) -> Option<Direction> {
        self.directive()
            .filter(|d| d.is_on(field))
            .map(|d| d.direction)
    }
}
