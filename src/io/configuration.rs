//! Runtime configuration defaults

// Default values for configurable parameters
/// Fixed seed for reproducible strategy runs
pub const DEFAULT_SEED: u64 = 0;

// Progress bar display settings
/// Minimum batch size before a progress bar is shown
pub const MIN_FILES_FOR_PROGRESS: usize = 2;
