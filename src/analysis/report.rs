//! Experiment report aggregates and check-run summaries
//!
//! The batch harness that drives the external solver records, per
//! strategy, how many tiles each iteration had to generate before a
//! solution was found (`-1` marks a failed iteration). This module
//! computes the aggregate statistics consumed from that artifact and
//! the summary the checker binary writes for its own runs.

use crate::tile::edges::{EDGE_COUNT, Label};
use serde::{Deserialize, Serialize};

/// Raw per-iteration results for one suggestion strategy
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentReport {
    /// Tiles generated per iteration; `-1` marks a failed iteration
    pub generated_tiles_per_iteration: Vec<i64>,
    /// Whether the scenario was solvable without any suggestion
    #[serde(default)]
    pub trivial: bool,
}

impl ExperimentReport {
    /// Number of iterations that reached a solution
    pub fn success_count(&self) -> usize {
        self.generated_tiles_per_iteration
            .iter()
            .filter(|&&n| n >= 0)
            .count()
    }

    /// Fraction of iterations that reached a solution
    pub fn success_rate(&self) -> f64 {
        if self.generated_tiles_per_iteration.is_empty() {
            return 0.0;
        }
        self.success_count() as f64 / self.generated_tiles_per_iteration.len() as f64
    }

    /// Mean tiles generated over successful iterations
    pub fn mean_generated_tiles(&self) -> Option<f64> {
        let successes: Vec<i64> = self
            .generated_tiles_per_iteration
            .iter()
            .copied()
            .filter(|&n| n >= 0)
            .collect();
        if successes.is_empty() {
            return None;
        }
        let sum: i64 = successes.iter().sum();
        Some(sum as f64 / successes.len() as f64)
    }

    /// Standard deviation of tiles generated over successful iterations
    pub fn stddev_generated_tiles(&self) -> Option<f64> {
        let mean = self.mean_generated_tiles()?;
        let mut sum_sq = 0.0;
        let mut count = 0usize;
        for &n in &self.generated_tiles_per_iteration {
            if n < 0 {
                continue;
            }
            sum_sq += (n as f64) * (n as f64);
            count += 1;
        }
        let variance = sum_sq / count as f64 - mean * mean;
        Some(variance.max(0.0).sqrt())
    }

    /// Aggregate view with the wire format's `-1` sentinel for "no sample"
    pub fn summary(&self) -> ExperimentSummary {
        ExperimentSummary {
            success_count: self.success_count(),
            success_rate: self.success_rate(),
            mean_generated_tiles: self.mean_generated_tiles().unwrap_or(-1.0),
            stddev_generated_tiles: self.stddev_generated_tiles().unwrap_or(-1.0),
            trivial: self.trivial,
        }
    }
}

/// Aggregate statistics for one strategy's experiment
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperimentSummary {
    /// Iterations that reached a solution
    pub success_count: usize,
    /// Fraction of iterations that reached a solution
    pub success_rate: f64,
    /// Mean tiles generated over successes, `-1` when there were none
    pub mean_generated_tiles: f64,
    /// Stddev of tiles generated over successes, `-1` when there were none
    pub stddev_generated_tiles: f64,
    /// Whether the scenario needed no suggestion at all
    pub trivial: bool,
}

/// Verification outcome for one suggestion dump
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckOutcome {
    /// Dump file the outcome refers to
    pub path: String,
    /// Unresolved neighborhoods recorded in the dump
    pub neighborhood_count: usize,
    /// Candidate tiles the neighborhoods expanded to
    pub candidate_count: usize,
    /// Distinct signatures in the recomputed vote table
    pub signature_count: usize,
    /// Sum of all recomputed votes
    pub total_votes: u64,
    /// Best tile from the recomputed ranking, absent for a trivial dump
    pub best_tile: Option<[Label; EDGE_COUNT]>,
    /// Runner-up from the recomputed ranking
    pub alternative_tile: Option<[Label; EDGE_COUNT]>,
    /// Recomputed winner equals the tile recorded by the solver
    pub matches_recorded: bool,
    /// Re-imported vote records reproduce the recomputed ranking
    pub roundtrip_consistent: bool,
}

impl CheckOutcome {
    /// Whether every verification in this outcome passed
    pub const fn passed(&self) -> bool {
        self.matches_recorded && self.roundtrip_consistent
    }
}

/// Summary of a whole check run
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    /// Dumps checked
    pub checked: usize,
    /// Dumps whose verifications all passed
    pub passed: usize,
    /// Per-dump outcomes
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    /// Aggregate per-dump outcomes into a run summary
    pub fn from_outcomes(outcomes: Vec<CheckOutcome>) -> Self {
        let checked = outcomes.len();
        let passed = outcomes.iter().filter(|outcome| outcome.passed()).count();
        Self {
            checked,
            passed,
            outcomes,
        }
    }
}
