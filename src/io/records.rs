//! Wire shapes for neighborhood lists, vote dumps, and suggestion dumps
//!
//! The solver exchanges JSON artifacts with this engine: a list of
//! unresolved neighborhoods (four label arrays per entry), a vote dump
//! (one record per signature with per-transform counts), and the combined
//! suggestion dump it writes for offline verification. Import enforces
//! the dump consistency invariants; a violated invariant means the data
//! is corrupt and the whole computation is refused.

use crate::io::error::{Result, SuggestionError, malformed_record};
use crate::symmetry::transform::{Rotation, Transform};
use crate::tile::edges::{EDGE_COUNT, Label, Tile};
use crate::tile::neighborhood::Neighborhood;
use crate::voting::consolidate::VoteTable;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Wire form of one transform
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformRecord {
    /// Flip across the X axis
    pub flip_x: bool,
    /// Flip across the Y axis
    pub flip_y: bool,
    /// Rotation steps in `[0, 4)`
    pub rotation: u8,
}

impl From<Transform> for TransformRecord {
    fn from(transform: Transform) -> Self {
        Self {
            flip_x: transform.flip_x,
            flip_y: transform.flip_y,
            rotation: transform.rotation.steps() as u8,
        }
    }
}

impl TryFrom<TransformRecord> for Transform {
    type Error = SuggestionError;

    fn try_from(record: TransformRecord) -> Result<Self> {
        let rotation = Rotation::from_steps(usize::from(record.rotation)).ok_or_else(|| {
            malformed_record(&format!(
                "rotation {} is outside [0, 4)",
                record.rotation
            ))
        })?;
        Ok(Self {
            flip_x: record.flip_x,
            flip_y: record.flip_y,
            rotation,
        })
    }
}

/// One (transform, count) pair of a vote record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformCount {
    /// Transform the votes were contributed through
    pub transform: TransformRecord,
    /// Number of votes
    pub count: u32,
}

/// Wire form of one vote table entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteRecord {
    /// Edge sequence of the representative tile
    pub tile: [Label; EDGE_COUNT],
    /// Per-transform vote counts
    pub counts: Vec<TransformCount>,
}

/// Suggestion dump written by the external solver
///
/// Carries the unresolved neighborhoods the votes were derived from, the
/// full vote table, and the winning pair the solver recorded, so the whole
/// computation can be replayed and verified offline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionDump {
    /// Admissible-label sets of the unresolved neighborhoods
    pub impossible_neighborhood_labels: Vec<[Vec<Label>; EDGE_COUNT]>,
    /// Recorded vote table
    pub votes: Vec<VoteRecord>,
    /// Tile the solver elected
    pub tile: [Label; EDGE_COUNT],
    /// Runner-up the solver recorded
    pub alternative_tile: [Label; EDGE_COUNT],
}

impl SuggestionDump {
    /// Neighborhoods reconstructed from the recorded label sets
    pub fn neighborhoods(&self) -> Vec<Neighborhood> {
        self.impossible_neighborhood_labels
            .iter()
            .cloned()
            .map(Neighborhood::new)
            .collect()
    }
}

/// Rebuild a vote table from exported records
///
/// Records are replayed in order, so the rebuilt table's iteration order
/// matches the export. Re-running selection over the result must
/// reproduce the ranking of the original live computation.
///
/// # Errors
///
/// Returns [`SuggestionError::DuplicateTileRecord`] when two records carry
/// the same tile, [`SuggestionError::DuplicateVoteRecord`] when a (tile,
/// transform) pair is counted twice, and
/// [`SuggestionError::MalformedRecord`] for an out-of-range rotation.
/// All three mean the dump is corrupt; none is recoverable.
pub fn import_votes(records: &[VoteRecord]) -> Result<VoteTable> {
    let mut votes = VoteTable::new();

    for record in records {
        let tile = Tile::new(record.tile);
        let signature = tile.signature();
        if votes.contains(&signature) {
            return Err(SuggestionError::DuplicateTileRecord {
                signature: signature.as_str().to_owned(),
            });
        }

        let mut seen = [false; crate::symmetry::group::TRANSFORM_COUNT];
        for entry in &record.counts {
            let transform = Transform::try_from(entry.transform)?;
            let slot = seen
                .get_mut(transform.index())
                .ok_or_else(|| malformed_record(&"transform index out of range"))?;
            if *slot {
                return Err(SuggestionError::DuplicateVoteRecord {
                    signature: signature.as_str().to_owned(),
                    transform,
                });
            }
            *slot = true;
            votes.add_votes(tile, transform, entry.count);
        }
    }

    Ok(votes)
}

/// Export a vote table to wire records, in table iteration order
pub fn export_votes(votes: &VoteTable) -> Vec<VoteRecord> {
    votes
        .iter()
        .map(|entry| VoteRecord {
            tile: entry.tile().labels,
            counts: entry
                .transform_counts()
                .map(|(transform, count)| TransformCount {
                    transform: transform.into(),
                    count,
                })
                .collect(),
        })
        .collect()
}

/// Load a suggestion dump from a JSON file
///
/// # Errors
///
/// Returns a file system error when the file cannot be read and a JSON
/// error when it doesn't parse as a suggestion dump.
pub fn load_dump(path: &Path) -> Result<SuggestionDump> {
    let text = fs::read_to_string(path).map_err(|source| SuggestionError::FileSystem {
        path: path.to_path_buf(),
        operation: "read",
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SuggestionError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Write a JSON artifact, pretty-printed
///
/// # Errors
///
/// Returns a JSON error when serialization fails and a file system error
/// when the file cannot be written.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(|source| SuggestionError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, text).map_err(|source| SuggestionError::FileSystem {
        path: path.to_path_buf(),
        operation: "write",
        source,
    })
}
