//! Candidate tile expansion from neighborhood label sets
//!
//! Each neighborhood expands to the cartesian product of its four
//! admissible-label sets, one label per slot. A candidate's edges are the
//! negation of the chosen neighbor labels: a neighbor's label seen from
//! the new tile's side is orientation-reversed. Candidates from all
//! neighborhoods are pooled into one flat sequence; the originating
//! neighborhood is not retained.

use crate::io::error::{Result, SuggestionError};
use crate::tile::{Label, Neighborhood, Tile};

/// Expand neighborhoods into candidate tiles
///
/// Expansion order is fixed so identical input yields identical output:
/// neighborhoods in input order, slot 0 outermost to slot 3 innermost.
/// A neighborhood with per-slot set sizes (k0, k1, k2, k3) contributes
/// k0·k1·k2·k3 candidates.
///
/// # Errors
///
/// Returns [`SuggestionError::EmptyLabelSet`] when any slot has no
/// admissible labels; a missing constraint must not be silently guessed.
pub fn generate(neighborhoods: &[Neighborhood]) -> Result<Vec<Tile>> {
    for (index, neighborhood) in neighborhoods.iter().enumerate() {
        if let Some(slot) = neighborhood.first_empty_slot() {
            return Err(SuggestionError::EmptyLabelSet {
                neighborhood: index,
                slot,
            });
        }
    }
    Ok(expand(neighborhoods, false))
}

/// Expand neighborhoods, substituting the wildcard label for empty slots
///
/// An empty slot is treated as the single admissible label `0`, meaning
/// "a fresh edge type goes here". Scoring ranks such candidates below any
/// candidate that reuses existing edges, so the wildcard only wins when
/// nothing else fits. This is the tolerant path used when checking solver
/// dumps; library callers normally want the strict [`generate`].
pub fn generate_with_wildcards(neighborhoods: &[Neighborhood]) -> Vec<Tile> {
    expand(neighborhoods, true)
}

fn expand(neighborhoods: &[Neighborhood], wildcards: bool) -> Vec<Tile> {
    let capacity = neighborhoods.iter().map(Neighborhood::candidate_count).sum();
    let mut candidates = Vec::with_capacity(capacity);

    const WILDCARD: [Label; 1] = [0];
    let slot_or_wildcard = |neighborhood: &Neighborhood, index: usize| -> Vec<Label> {
        let labels = neighborhood.slot(index);
        if labels.is_empty() && wildcards {
            WILDCARD.to_vec()
        } else {
            labels.to_vec()
        }
    };

    for neighborhood in neighborhoods {
        let slot0 = slot_or_wildcard(neighborhood, 0);
        let slot1 = slot_or_wildcard(neighborhood, 1);
        let slot2 = slot_or_wildcard(neighborhood, 2);
        let slot3 = slot_or_wildcard(neighborhood, 3);

        for &label0 in &slot0 {
            for &label1 in &slot1 {
                for &label2 in &slot2 {
                    for &label3 in &slot3 {
                        candidates.push(Tile::new([-label0, -label1, -label2, -label3]));
                    }
                }
            }
        }
    }

    candidates
}
