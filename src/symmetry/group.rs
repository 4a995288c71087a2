//! Enumeration of the full transform set
//!
//! The set is the cartesian product of the two flip switches and the four
//! rotations: sixteen elements, twice the size of the dihedral symmetry
//! group of the square. The redundancy is intentional. Each switch triple
//! is applied and counted independently during vote consolidation, so
//! collapsing coinciding transforms would change vote weights and with
//! them which tile wins a tie. Do not canonicalize.

use crate::symmetry::transform::{Rotation, Transform};

/// Number of transforms in the full set
pub const TRANSFORM_COUNT: usize = 16;

/// Enumerate all sixteen transforms by direct triple iteration
///
/// Order is fixed: flip X outermost, then flip Y, then rotation steps.
/// [`Transform::index`] follows the same order.
pub fn all_transforms() -> Vec<Transform> {
    let mut transforms = Vec::with_capacity(TRANSFORM_COUNT);
    for flip_x in [false, true] {
        for flip_y in [false, true] {
            for rotation in Rotation::ALL {
                transforms.push(Transform {
                    flip_x,
                    flip_y,
                    rotation,
                });
            }
        }
    }
    transforms
}

/// Enumerate all sixteen transforms by nested expansion
///
/// Starts from the identity and expands one switch at a time. Must produce
/// the exact sequence of [`all_transforms`]; the agreement of both
/// derivations is a tested invariant.
pub fn all_transforms_by_expansion() -> Vec<Transform> {
    let mut transforms = vec![Transform::IDENTITY];
    transforms = transforms
        .into_iter()
        .flat_map(|t| [t, Transform { flip_x: true, ..t }])
        .collect();
    transforms = transforms
        .into_iter()
        .flat_map(|t| [t, Transform { flip_y: true, ..t }])
        .collect();
    transforms
        .into_iter()
        .flat_map(|t| Rotation::ALL.map(|rotation| Transform { rotation, ..t }))
        .collect()
}

impl Transform {
    /// Position of this transform in the [`all_transforms`] sequence
    pub const fn index(self) -> usize {
        let flips = (self.flip_x as usize) * 2 + self.flip_y as usize;
        flips * 4 + self.rotation.steps()
    }

    /// Transform at the given [`all_transforms`] position, or `None` out of range
    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= TRANSFORM_COUNT {
            return None;
        }
        let rotation = match Rotation::from_steps(index % 4) {
            Some(rotation) => rotation,
            None => return None,
        };
        Some(Self {
            flip_x: index / 8 == 1,
            flip_y: (index / 4) % 2 == 1,
            rotation,
        })
    }
}
