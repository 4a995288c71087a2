//! Tests for batch progress display

#[cfg(test)]
mod tests {
    use std::path::Path;
    use tilevote::io::progress::ProgressManager;

    // A single-file run stays silent; the manager still accepts the full
    // call sequence without a bar
    #[test]
    fn test_single_file_run_has_no_bar() {
        let mut manager = ProgressManager::new();
        manager.initialize(1);
        manager.start_file(Path::new("dump.json"));
        manager.complete_file();
        manager.finish();
    }

    #[test]
    fn test_batch_run_lifecycle() {
        let mut manager = ProgressManager::new();
        manager.initialize(3);
        for name in ["a.json", "b.json", "c.json"] {
            manager.start_file(Path::new(name));
            manager.complete_file();
        }
        manager.finish();
        // Finishing twice is harmless
        manager.finish();
    }
}
