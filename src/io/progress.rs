//! Batch progress display
//!
//! Checking a single dump finishes in well under a second, so progress is
//! only shown for directory batches.

use crate::io::configuration::MIN_FILES_FOR_PROGRESS;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Dumps: [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Coordinates progress display for batch check runs
#[derive(Default)]
pub struct ProgressManager {
    batch_bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a new progress manager
    pub const fn new() -> Self {
        Self { batch_bar: None }
    }

    /// Initialize the batch bar for the given file count
    ///
    /// Single-file runs stay silent.
    pub fn initialize(&mut self, file_count: usize) {
        if file_count >= MIN_FILES_FOR_PROGRESS {
            let bar = ProgressBar::new(file_count as u64);
            bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(bar);
        }
    }

    /// Show the file currently being checked
    pub fn start_file(&self, path: &Path) {
        if let Some(bar) = &self.batch_bar {
            let display_name = path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy()
                .to_string();
            bar.set_message(display_name);
        }
    }

    /// Mark the current file as done
    pub fn complete_file(&self) {
        if let Some(bar) = &self.batch_bar {
            bar.inc(1);
        }
    }

    /// Finish and clear the batch bar
    pub fn finish(&mut self) {
        if let Some(bar) = self.batch_bar.take() {
            bar.finish_and_clear();
        }
    }
}
