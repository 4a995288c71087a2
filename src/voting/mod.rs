//! Voting engine for ranking candidate replacement tiles
//!
//! Data flows strictly downward: neighborhood label sets expand to
//! candidate tiles, every candidate is pushed through all sixteen
//! transforms into a consolidated vote table, and a single scoring scan
//! picks the best and second-best signatures.

/// Candidate tile expansion from neighborhood label sets
pub mod candidates;
/// Per-signature per-transform vote accumulation
pub mod consolidate;
/// Deterministic lexicographic scoring of vote entries
pub mod score;
/// Best and second-best selection over a vote table
pub mod selection;
/// Alternative local suggestion strategies
pub mod strategy;

pub use consolidate::{VoteEntry, VoteTable};
pub use score::Score;
pub use selection::{Selection, Suggestion};
