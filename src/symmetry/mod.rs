//! Geometric transforms applicable to a four-edge tile
//!
//! This module contains symmetry-related functionality including:
//! - The transform value type and its edge permutations
//! - Enumeration of the full sixteen-element transform set

/// Enumeration of the full transform set
pub mod group;
/// Transform value type and tile edge permutations
pub mod transform;

pub use transform::{Rotation, Transform};
