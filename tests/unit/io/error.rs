//! Tests for error display and source chaining

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tilevote::SuggestionError;
    use tilevote::symmetry::Transform;

    #[test]
    fn test_empty_label_set_display() {
        let error = SuggestionError::EmptyLabelSet {
            neighborhood: 3,
            slot: 1,
        };
        assert_eq!(
            error.to_string(),
            "Neighborhood 3 has no admissible labels in slot 1"
        );
    }

    #[test]
    fn test_duplicate_vote_record_display() {
        let error = SuggestionError::DuplicateVoteRecord {
            signature: "1,2,3,4".to_owned(),
            transform: Transform::IDENTITY,
        };
        let message = error.to_string();
        assert!(message.contains("1,2,3,4"));
        assert!(message.contains("flip_x: false"));
    }

    #[test]
    fn test_vote_count_mismatch_display() {
        let error = SuggestionError::VoteCountMismatch {
            signature: "1,2,3,4".to_owned(),
            recorded: 16,
            recomputed: 15,
        };
        let message = error.to_string();
        assert!(message.contains("16"));
        assert!(message.contains("15"));
    }

    // File system errors keep the underlying error as their source
    #[test]
    fn test_file_system_source_chain() {
        let error = SuggestionError::FileSystem {
            path: PathBuf::from("dump.json"),
            operation: "read",
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(error.source().is_some());
        assert!(error.to_string().contains("dump.json"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: SuggestionError = io_error.into();
        assert!(matches!(error, SuggestionError::FileSystem { .. }));
    }
}
