//! Input/output operations and error handling

/// Command-line interface for checking solver suggestion dumps
pub mod cli;
/// Runtime configuration defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Batch progress display
pub mod progress;
/// JSON wire shapes and vote import/export
pub mod records;
