//! Alternative local suggestion strategies
//!
//! The voting engine is the default; the others are cheaper baselines that
//! pick a tile from the same unresolved neighborhoods without tallying
//! votes. All randomness flows through an explicitly passed generator so
//! runs are reproducible by construction, never by convention.

use crate::io::error::Result;
use crate::tile::{Label, Neighborhood, Tile};
use crate::voting::candidates;
use crate::voting::consolidate::consolidate;
use crate::voting::selection::find_best;
use rand::Rng;

/// How to pick a replacement tile for unresolved neighborhoods
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Full vote consolidation and lexicographic ranking
    #[default]
    Voting,
    /// Uniformly random signed labels, ignoring the neighborhoods
    Random,
    /// Random neighborhood, random admissible label per slot
    GuidedRandom,
    /// First neighborhood, first admissible label per slot
    GreedyNaive,
}

/// A suggested tile and, when the strategy ranks, a runner-up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuggestedPair {
    /// The suggested tile definition
    pub tile: Tile,
    /// Runner-up, produced only by the voting strategy
    pub alternative: Option<Tile>,
}

impl SuggestedPair {
    const fn single(tile: Tile) -> Self {
        Self {
            tile,
            alternative: None,
        }
    }
}

/// Number of distinct edge types referenced by the neighborhoods
///
/// Derived as the largest label magnitude present; the random strategy
/// draws labels from this range.
pub fn edge_type_count(neighborhoods: &[Neighborhood]) -> Label {
    neighborhoods
        .iter()
        .flat_map(|neighborhood| neighborhood.slots())
        .flatten()
        .map(|label| label.abs())
        .max()
        .unwrap_or(0)
}

/// Suggest a replacement tile using the given strategy
///
/// Empty slots are treated as the wildcard label `0` (a fresh edge type),
/// matching the tolerant path used when checking solver dumps; callers
/// wanting strict empty-slot rejection should drive the engine through
/// [`candidates::generate`] directly. Returns `Ok(None)` when there is
/// nothing to suggest from: no neighborhoods, or no referenced edge types
/// for the random strategy.
///
/// # Errors
///
/// Returns [`crate::io::error::SuggestionError::VoteCountMismatch`] if the
/// voting strategy's consolidation produced an inconsistent tally.
pub fn suggest(
    strategy: Strategy,
    neighborhoods: &[Neighborhood],
    rng: &mut impl Rng,
) -> Result<Option<SuggestedPair>> {
    if neighborhoods.is_empty() {
        return Ok(None);
    }

    match strategy {
        Strategy::Voting => suggest_voting(neighborhoods),
        Strategy::Random => Ok(suggest_random(neighborhoods, rng)),
        Strategy::GuidedRandom => {
            let pick = rng.random_range(0..neighborhoods.len());
            Ok(neighborhoods
                .get(pick)
                .map(|neighborhood| guided_tile(neighborhood, rng)))
        }
        Strategy::GreedyNaive => Ok(neighborhoods.first().map(greedy_tile)),
    }
}

fn suggest_voting(neighborhoods: &[Neighborhood]) -> Result<Option<SuggestedPair>> {
    let candidates = candidates::generate_with_wildcards(neighborhoods);
    if candidates.is_empty() {
        return Ok(None);
    }
    let votes = consolidate(&candidates);
    let selection = find_best(&votes, &[])?;
    Ok(selection.best.map(|best| SuggestedPair {
        tile: best.tile,
        alternative: selection.second_best.map(|second| second.tile),
    }))
}

fn suggest_random(neighborhoods: &[Neighborhood], rng: &mut impl Rng) -> Option<SuggestedPair> {
    let edge_types = edge_type_count(neighborhoods);
    if edge_types == 0 {
        return None;
    }

    let mut labels = [0; 4];
    for label in &mut labels {
        let sign = if rng.random::<bool>() { 1 } else { -1 };
        *label = sign * (1 + rng.random_range(0..edge_types));
    }

    Some(SuggestedPair::single(Tile::new(labels)))
}

fn guided_tile(neighborhood: &Neighborhood, rng: &mut impl Rng) -> SuggestedPair {
    let mut labels = [0; 4];
    for (slot, label) in labels.iter_mut().enumerate() {
        let admissible = neighborhood.slot(slot);
        let picked = if admissible.is_empty() {
            None
        } else {
            admissible.get(rng.random_range(0..admissible.len()))
        };
        *label = negate_neighbor(picked);
    }
    SuggestedPair::single(Tile::new(labels))
}

fn greedy_tile(neighborhood: &Neighborhood) -> SuggestedPair {
    let mut labels = [0; 4];
    for (slot, label) in labels.iter_mut().enumerate() {
        *label = negate_neighbor(neighborhood.slot(slot).first());
    }
    SuggestedPair::single(Tile::new(labels))
}

// Only labels of opposite sign are compatible across an edge; a missing
// label falls back to the wildcard.
fn negate_neighbor(label: Option<&Label>) -> Label {
    label.copied().map_or(0, |neighbor| -neighbor)
}
