//! Admissible-label records for an unresolved placement gap
//!
//! A neighborhood describes one hole the solver could not fill: for each of
//! the four sides, the set of labels the neighboring tile would accept
//! there. Several labels in one slot represent unresolved ambiguity
//! upstream. Neighborhoods are read-only inputs; slot order is preserved as
//! supplied so candidate generation stays reproducible.

use crate::tile::edges::{EDGE_COUNT, Label};

/// Admissible neighbor labels for each side of one unresolved hole
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Neighborhood {
    slots: [Vec<Label>; EDGE_COUNT],
}

impl Neighborhood {
    /// Create a neighborhood from per-slot admissible label lists
    pub const fn new(slots: [Vec<Label>; EDGE_COUNT]) -> Self {
        Self { slots }
    }

    /// Admissible labels for one slot, in supplied order
    pub fn slot(&self, index: usize) -> &[Label] {
        self.slots.get(index).map_or(&[], Vec::as_slice)
    }

    /// All four slots, in cyclic order
    pub const fn slots(&self) -> &[Vec<Label>; EDGE_COUNT] {
        &self.slots
    }

    /// Index of the first slot with no admissible labels, if any
    pub fn first_empty_slot(&self) -> Option<usize> {
        self.slots.iter().position(Vec::is_empty)
    }

    /// Number of candidate tiles this neighborhood expands to
    ///
    /// Product of the per-slot set sizes; zero when any slot is empty.
    pub fn candidate_count(&self) -> usize {
        self.slots.iter().map(Vec::len).product()
    }
}
