//! Tile values and unresolved neighborhoods
//!
//! This module contains the data carried through a suggestion computation:
//! - Edge labels, the four-edge tile value, and its canonical signature
//! - Neighborhood records describing an unresolved placement gap

/// Edge labels, tile values, and canonical signatures
pub mod edges;
/// Admissible-label records for an unresolved placement gap
pub mod neighborhood;

pub use edges::{Label, Signature, Tile};
pub use neighborhood::Neighborhood;
