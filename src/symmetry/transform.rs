//! Transform value type and tile edge permutations
//!
//! A transform combines an optional flip across each axis with a quarter-turn
//! rotation. Application order is fixed: flip across X, then flip across Y,
//! then rotate. Flips negate the labels of the edges they carry across the
//! axis, since a relocated edge is seen from its opposite side.

use crate::tile::edges::{Label, Tile};
use std::fmt;

/// Quarter-turn rotation applied after any flips
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    /// No rotation
    #[default]
    Deg0,
    /// One cyclic step
    Deg90,
    /// Two cyclic steps
    Deg180,
    /// Three cyclic steps
    Deg270,
}

impl Rotation {
    /// All rotations in increasing step order
    pub const ALL: [Self; 4] = [Self::Deg0, Self::Deg90, Self::Deg180, Self::Deg270];

    /// Number of cyclic shift steps this rotation applies
    pub const fn steps(self) -> usize {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    /// Rotation for a step count in `[0, 4)`, or `None` out of range
    pub const fn from_steps(steps: usize) -> Option<Self> {
        match steps {
            0 => Some(Self::Deg0),
            1 => Some(Self::Deg90),
            2 => Some(Self::Deg180),
            3 => Some(Self::Deg270),
            _ => None,
        }
    }

    /// Rotation that undoes this one
    pub const fn inverse(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg0,
            Self::Deg90 => Self::Deg270,
            Self::Deg180 => Self::Deg180,
            Self::Deg270 => Self::Deg90,
        }
    }
}

/// One geometric transform of a four-edge tile
///
/// The three switches are treated as independent, so the full set has
/// sixteen elements even though some combinations coincide geometrically
/// (see [`crate::symmetry::group`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Transform {
    /// Flip across the X axis, applied first
    pub flip_x: bool,
    /// Flip across the Y axis, applied second
    pub flip_y: bool,
    /// Rotation, applied last
    pub rotation: Rotation,
}

const fn flip_across_x([e0, e1, e2, e3]: [Label; 4]) -> [Label; 4] {
    [e2, -e1, e0, -e3]
}

const fn flip_across_y([e0, e1, e2, e3]: [Label; 4]) -> [Label; 4] {
    [-e0, e3, -e2, e1]
}

const fn rotate([e0, e1, e2, e3]: [Label; 4], steps: usize) -> [Label; 4] {
    // new[i] = old[(i + steps) % 4], labels unchanged
    match steps % 4 {
        1 => [e1, e2, e3, e0],
        2 => [e2, e3, e0, e1],
        3 => [e3, e0, e1, e2],
        _ => [e0, e1, e2, e3],
    }
}

impl Transform {
    /// The transform that leaves every tile unchanged
    pub const IDENTITY: Self = Self {
        flip_x: false,
        flip_y: false,
        rotation: Rotation::Deg0,
    };

    /// Check whether this is the identity transform
    pub const fn is_identity(self) -> bool {
        !self.flip_x && !self.flip_y && matches!(self.rotation, Rotation::Deg0)
    }

    /// Apply this transform to a tile
    ///
    /// Composition order is significant and fixed: flip across X if set,
    /// then flip across Y if set, then rotate.
    pub const fn apply(self, tile: Tile) -> Tile {
        let mut labels = tile.labels;
        if self.flip_x {
            labels = flip_across_x(labels);
        }
        if self.flip_y {
            labels = flip_across_y(labels);
        }
        labels = rotate(labels, self.rotation.steps());
        Tile::new(labels)
    }

    /// Apply the inverse of this transform to a tile
    ///
    /// Undoes [`Self::apply`]: rotate back first, then flip across Y,
    /// then flip across X. Both flips are their own inverses.
    pub const fn apply_inverse(self, tile: Tile) -> Tile {
        let mut labels = rotate(tile.labels, self.rotation.inverse().steps());
        if self.flip_y {
            labels = flip_across_y(labels);
        }
        if self.flip_x {
            labels = flip_across_x(labels);
        }
        Tile::new(labels)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(flip_x: {}, flip_y: {}, rotation: {})",
            self.flip_x,
            self.flip_y,
            self.rotation.steps()
        )
    }
}
