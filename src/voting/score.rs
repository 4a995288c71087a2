//! Deterministic lexicographic scoring of vote entries
//!
//! A score is derived data: recomputed from the vote entry and its
//! representative tile on every selection, never persisted as the ranking
//! source of truth.

use crate::io::error::{Result, SuggestionError};
use crate::voting::consolidate::VoteEntry;

/// Three-part tie-break tuple ranking one candidate signature
///
/// `new_edge_count` leads the comparison: a tile that forces the creation
/// of a fresh edge type ranks below any tile that reuses existing edges,
/// whatever its vote counts. For strictly generated candidates it is
/// always zero and the remaining criteria decide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Score {
    /// Edges requiring a fresh edge type (label zero); fewer is better
    pub new_edge_count: u32,
    /// Votes summed over all transforms; more is better
    pub total_votes: u32,
    /// Orientation-reversed edges in the representative tile; fewer is better
    pub flipped_edge_count: u32,
    /// Votes contributed by the identity transform; more is better
    pub untransformed_votes: u32,
}

impl Score {
    /// Recompute the score of a vote entry
    ///
    /// The total is re-derived by summing the per-transform counts and
    /// cross-checked against the entry's independently maintained total.
    ///
    /// # Errors
    ///
    /// Returns [`SuggestionError::VoteCountMismatch`] when the recomputed
    /// sum disagrees with the recorded total; this signals a consolidation
    /// bug or a corrupt dump and must not be swallowed.
    pub fn of(entry: &VoteEntry) -> Result<Self> {
        let tile = entry.tile();

        let mut total_votes = 0;
        let mut untransformed_votes = 0;
        for (transform, count) in entry.transform_counts() {
            total_votes += count;
            if transform.is_identity() {
                untransformed_votes = count;
            }
        }

        if total_votes != entry.total_votes() {
            return Err(SuggestionError::VoteCountMismatch {
                signature: entry.signature().as_str().to_owned(),
                recorded: entry.total_votes(),
                recomputed: total_votes,
            });
        }

        Ok(Self {
            new_edge_count: tile.new_edge_count(),
            total_votes,
            flipped_edge_count: tile.flipped_edge_count(),
            untransformed_votes,
        })
    }

    /// Strict lexicographic "better than" comparison
    ///
    /// Each criterion breaks ties only when every previous one is exactly
    /// equal: fewer new edges, then more total votes, then fewer flipped
    /// edges, then more untransformed votes. Fully equal scores compare
    /// false both ways; selection keeps the first-seen entry.
    pub const fn is_better_than(self, other: Self) -> bool {
        if self.new_edge_count != other.new_edge_count {
            return self.new_edge_count < other.new_edge_count;
        }
        if self.total_votes != other.total_votes {
            return self.total_votes > other.total_votes;
        }
        if self.flipped_edge_count != other.flipped_edge_count {
            return self.flipped_edge_count < other.flipped_edge_count;
        }
        if self.untransformed_votes != other.untransformed_votes {
            return self.untransformed_votes > other.untransformed_votes;
        }
        false
    }
}
