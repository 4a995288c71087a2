//! Edge labels, tile values, and canonical signatures
//!
//! A label identifies an edge's semantic type; its sign encodes orientation,
//! so a label and its negation are the same physical edge type seen from
//! opposite sides. Label `0` is reserved for "a fresh edge type must be
//! created here" and is produced only by wildcard candidate expansion.

use std::fmt;

/// Signed edge type identifier; sign encodes orientation
pub type Label = i32;

/// Number of edges on a tile, in fixed cyclic order
pub const EDGE_COUNT: usize = 4;

/// A tile definition: four edge labels in fixed cyclic order
///
/// Plain value with no identity beyond its edge sequence. Two tiles are the
/// same configuration exactly when their sequences are equal element-wise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    /// Edge labels in cyclic slot order
    pub labels: [Label; EDGE_COUNT],
}

impl Tile {
    /// Create a tile from its edge sequence
    pub const fn new(labels: [Label; EDGE_COUNT]) -> Self {
        Self { labels }
    }

    /// Canonical key for this edge sequence
    ///
    /// Equal signatures correspond to element-wise equal tiles and nothing
    /// else; vote accumulation relies on this.
    pub fn signature(&self) -> Signature {
        let [e0, e1, e2, e3] = self.labels;
        Signature(format!("{e0},{e1},{e2},{e3}"))
    }

    /// Number of orientation-reversed (negative) edges
    pub fn flipped_edge_count(&self) -> u32 {
        self.labels.iter().filter(|&&label| label < 0).count() as u32
    }

    /// Number of edges requiring a fresh edge type (label zero)
    pub fn new_edge_count(&self) -> u32 {
        self.labels.iter().filter(|&&label| label == 0).count() as u32
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [e0, e1, e2, e3] = self.labels;
        write!(f, "[{e0},{e1},{e2},{e3}]")
    }
}

/// Canonical string key derived from a tile's edge sequence
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature(String);

impl Signature {
    /// View the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
