//! Error types for suggestion computations and dump processing

use crate::symmetry::Transform;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all suggestion operations
#[derive(Debug)]
pub enum SuggestionError {
    /// A neighborhood slot carried no admissible labels
    ///
    /// The engine refuses to guess a missing constraint; callers that want
    /// the wildcard fallback must opt into it explicitly.
    EmptyLabelSet {
        /// Index of the offending neighborhood in the input sequence
        neighborhood: usize,
        /// Slot index within the neighborhood
        slot: usize,
    },

    /// A vote dump carried two records for the same tile
    DuplicateTileRecord {
        /// Signature of the duplicated tile
        signature: String,
    },

    /// A vote dump carried two counts for the same (tile, transform) pair
    DuplicateVoteRecord {
        /// Signature of the tile
        signature: String,
        /// Transform counted twice
        transform: Transform,
    },

    /// Recomputed per-transform counts disagree with a recorded total
    ///
    /// Signals a bug in consolidation or a corrupt dump; never swallowed.
    VoteCountMismatch {
        /// Signature of the inconsistent entry
        signature: String,
        /// Total recorded during accumulation
        recorded: u32,
        /// Total recomputed from per-transform counts
        recomputed: u32,
    },

    /// A dump record doesn't meet the wire format requirements
    MalformedRecord {
        /// Description of what's wrong with the record
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to parse or write a JSON artifact
    Json {
        /// Path to the artifact
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for SuggestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabelSet { neighborhood, slot } => {
                write!(
                    f,
                    "Neighborhood {neighborhood} has no admissible labels in slot {slot}"
                )
            }
            Self::DuplicateTileRecord { signature } => {
                write!(f, "Vote dump repeats tile [{signature}]")
            }
            Self::DuplicateVoteRecord {
                signature,
                transform,
            } => {
                write!(
                    f,
                    "Vote dump repeats transform {transform} for tile [{signature}]"
                )
            }
            Self::VoteCountMismatch {
                signature,
                recorded,
                recomputed,
            } => {
                write!(
                    f,
                    "Vote total for tile [{signature}] is recorded as {recorded} but per-transform counts sum to {recomputed}"
                )
            }
            Self::MalformedRecord { reason } => {
                write!(f, "Malformed record: {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Json { path, source } => {
                write!(f, "JSON error in '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for SuggestionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for suggestion results
pub type Result<T> = std::result::Result<T, SuggestionError>;

impl From<std::io::Error> for SuggestionError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for SuggestionError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create a malformed record error
pub fn malformed_record(reason: &impl ToString) -> SuggestionError {
    SuggestionError::MalformedRecord {
        reason: reason.to_string(),
    }
}
