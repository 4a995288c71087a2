//! Per-signature per-transform vote accumulation
//!
//! Every candidate is pushed through all sixteen transforms; each
//! (candidate, transform) pair contributes one vote to the signature of
//! the transformed tile, keyed by the specific transform that produced it.
//! All sixteen switch triples are counted independently even where two of
//! them coincide geometrically; the redundancy weights the tally and must
//! not be collapsed.
//!
//! The table preserves insertion order. Candidate expansion and transform
//! enumeration are both deterministic, so iteration order, and with it
//! the tie-break in selection, is reproducible across runs.

use crate::symmetry::group::{TRANSFORM_COUNT, all_transforms};
use crate::symmetry::transform::Transform;
use crate::tile::{Signature, Tile};
use std::collections::HashMap;

/// Vote tally for one tile signature
///
/// Holds the representative tile (the first tile to produce the
/// signature; all others are value-identical), one count per transform
/// with explicit zero defaulting, and a separately maintained running
/// total. Keeping the total independent of the per-transform counts lets
/// selection cross-check the two and fail loudly on disagreement.
#[derive(Clone, Debug)]
pub struct VoteEntry {
    tile: Tile,
    counts: [u32; TRANSFORM_COUNT],
    total: u32,
}

impl VoteEntry {
    const fn new(tile: Tile) -> Self {
        Self {
            tile,
            counts: [0; TRANSFORM_COUNT],
            total: 0,
        }
    }

    fn add(&mut self, transform: Transform, count: u32) {
        if let Some(slot) = self.counts.get_mut(transform.index()) {
            *slot += count;
        }
        self.total += count;
    }

    /// Representative tile for this signature
    pub const fn tile(&self) -> Tile {
        self.tile
    }

    /// Canonical key of the representative tile
    pub fn signature(&self) -> Signature {
        self.tile.signature()
    }

    /// Votes contributed through one specific transform
    pub fn count_for(&self, transform: Transform) -> u32 {
        self.counts.get(transform.index()).copied().unwrap_or(0)
    }

    /// Votes contributed without any transform
    pub fn untransformed_votes(&self) -> u32 {
        self.count_for(Transform::IDENTITY)
    }

    /// Total recorded during accumulation
    ///
    /// Maintained independently of the per-transform counts; see
    /// [`crate::voting::score::Score::of`] for the consistency check.
    pub const fn total_votes(&self) -> u32 {
        self.total
    }

    /// Non-zero per-transform counts in enumeration order
    pub fn transform_counts(&self) -> impl Iterator<Item = (Transform, u32)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .filter_map(|(index, &count)| Transform::from_index(index).map(|t| (t, count)))
    }
}

/// Insertion-ordered mapping from tile signature to vote tally
///
/// Two-level keyed structure: signature to entry, entry holding transform
/// to count. Entries live in a vector in first-seen order; a hash index
/// maps signatures to vector slots. Iteration follows insertion order by
/// construction rather than relying on a hash map's incidental order.
#[derive(Clone, Debug, Default)]
pub struct VoteTable {
    index: HashMap<Signature, usize>,
    entries: Vec<VoteEntry>,
}

impl VoteTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one vote for a tile through a specific transform
    pub fn add_vote(&mut self, tile: Tile, transform: Transform) {
        self.add_votes(tile, transform, 1);
    }

    /// Record a batch of votes for a tile through a specific transform
    pub fn add_votes(&mut self, tile: Tile, transform: Transform, count: u32) {
        let slot = match self.index.get(&tile.signature()) {
            Some(&slot) => slot,
            None => {
                let slot = self.entries.len();
                self.index.insert(tile.signature(), slot);
                self.entries.push(VoteEntry::new(tile));
                slot
            }
        };
        if let Some(entry) = self.entries.get_mut(slot) {
            entry.add(transform, count);
        }
    }

    /// Look up the tally for a signature
    pub fn get(&self, signature: &Signature) -> Option<&VoteEntry> {
        self.index
            .get(signature)
            .and_then(|&slot| self.entries.get(slot))
    }

    /// Check whether a signature has any recorded votes
    pub fn contains(&self, signature: &Signature) -> bool {
        self.index.contains_key(signature)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, VoteEntry> {
        self.entries.iter()
    }

    /// Number of distinct signatures
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of recorded totals over all signatures
    ///
    /// For a table built by [`consolidate`] this equals
    /// `candidates × 16`.
    pub fn total_votes(&self) -> u64 {
        self.entries
            .iter()
            .map(|entry| u64::from(entry.total))
            .sum()
    }
}

impl<'a> IntoIterator for &'a VoteTable {
    type Item = &'a VoteEntry;
    type IntoIter = std::slice::Iter<'a, VoteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Accumulate votes for every (candidate, transform) pair
///
/// O(candidates × 16); no shortcut skips duplicate transforms. An empty
/// candidate sequence yields an empty table, which callers must treat as
/// "nothing to suggest".
pub fn consolidate(candidates: &[Tile]) -> VoteTable {
    let transforms = all_transforms();
    let mut votes = VoteTable::new();

    for &candidate in candidates {
        for &transform in &transforms {
            votes.add_vote(transform.apply(candidate), transform);
        }
    }

    votes
}
