//! Best and second-best selection over a vote table
//!
//! A single scan tracks the current best and runner-up. A new entry that
//! beats the best demotes it to second place; an entry that only beats the
//! runner-up replaces the runner-up. Equal-ranked entries keep the first
//! seen, which the table's insertion order makes deterministic.

use crate::io::error::Result;
use crate::tile::Tile;
use crate::voting::consolidate::VoteTable;
use crate::voting::score::Score;

/// One ranked suggestion: a tile and its recomputed score
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Suggestion {
    /// The suggested tile definition
    pub tile: Tile,
    /// Score the tile ranked with
    pub score: Score,
}

/// Outcome of a selection scan
///
/// Both fields absent means the vote table was empty: the hole was
/// trivially solvable and no suggestion is needed. That is a distinguished
/// result, not an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Highest-ranked suggestion
    pub best: Option<Suggestion>,
    /// Runner-up suggestion
    pub second_best: Option<Suggestion>,
    /// Entries skipped because the caller already knows their tiles
    pub skipped: usize,
}

/// Scan a vote table for the best and second-best signatures
///
/// `known_tiles` lists tile definitions not eligible for election (they
/// already exist in the caller's dictionary); matching entries are skipped
/// and counted. A consolidation over genuinely unsolvable neighborhoods
/// should never produce one, so a non-zero skip count is worth surfacing
/// to the user.
///
/// # Errors
///
/// Returns [`crate::io::error::SuggestionError::VoteCountMismatch`] when
/// any entry's recorded total disagrees with its per-transform counts.
pub fn find_best(votes: &VoteTable, known_tiles: &[Tile]) -> Result<Selection> {
    let mut selection = Selection::default();

    for entry in votes {
        if known_tiles.contains(&entry.tile()) {
            selection.skipped += 1;
            continue;
        }

        let candidate = Suggestion {
            tile: entry.tile(),
            score: Score::of(entry)?,
        };

        match selection.best {
            Some(best) if !candidate.score.is_better_than(best.score) => {
                let beats_second = selection
                    .second_best
                    .is_none_or(|second| candidate.score.is_better_than(second.score));
                if beats_second {
                    selection.second_best = Some(candidate);
                }
            }
            _ => {
                selection.second_best = selection.best;
                selection.best = Some(candidate);
            }
        }
    }

    Ok(selection)
}
