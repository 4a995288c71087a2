//! Tests for configuration defaults

#[cfg(test)]
mod tests {
    use tilevote::io::configuration::{DEFAULT_SEED, MIN_FILES_FOR_PROGRESS};

    // The default seed matches the batch harness convention of seeding
    // iteration i with base_seed + i
    #[test]
    fn test_default_seed() {
        assert_eq!(DEFAULT_SEED, 0);
    }

    #[test]
    fn test_progress_threshold_hides_single_file_runs() {
        assert!(MIN_FILES_FOR_PROGRESS > 1);
    }
}
