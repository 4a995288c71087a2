//! Tests for CLI argument parsing and the file processor

#[cfg(test)]
mod tests {
    use clap::Parser;
    use tilevote::io::cli::{Cli, FileProcessor, StrategyArg};
    use tilevote::voting::strategy::Strategy;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["tilevote", "dump.json"]);
        assert_eq!(cli.target.to_str(), Some("dump.json"));
        assert_eq!(cli.seed, 0);
        assert_eq!(cli.strategy, StrategyArg::Voting);
        assert!(cli.report.is_none());
        assert!(!cli.quiet);
    }

    #[test]
    fn test_strategy_and_seed_flags() {
        let cli = Cli::parse_from([
            "tilevote",
            "dumps/",
            "--strategy",
            "guided-random",
            "--seed",
            "7",
            "--quiet",
        ]);
        assert_eq!(cli.strategy, StrategyArg::GuidedRandom);
        assert_eq!(cli.seed, 7);
        assert!(cli.quiet);
    }

    #[test]
    fn test_strategy_arg_conversion() {
        assert_eq!(Strategy::from(StrategyArg::Voting), Strategy::Voting);
        assert_eq!(Strategy::from(StrategyArg::Random), Strategy::Random);
        assert_eq!(
            Strategy::from(StrategyArg::GuidedRandom),
            Strategy::GuidedRandom
        );
        assert_eq!(
            Strategy::from(StrategyArg::GreedyNaive),
            Strategy::GreedyNaive
        );
    }

    // A missing target is an error, not an empty run
    #[test]
    fn test_missing_target_fails() {
        let cli = Cli::parse_from(["tilevote", "no-such-path"]);
        let mut processor = FileProcessor::new(cli);
        assert!(processor.process().is_err());
    }

    #[test]
    fn test_non_json_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dump.txt");
        std::fs::write(&path, "{}").unwrap();

        let cli = Cli::parse_from(["tilevote", path.to_str().unwrap()]);
        let mut processor = FileProcessor::new(cli);
        assert!(processor.process().is_err());
    }

    #[test]
    fn test_empty_directory_is_a_clean_run() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::parse_from(["tilevote", dir.path().to_str().unwrap()]);
        let mut processor = FileProcessor::new(cli);
        assert!(processor.process().is_ok());
    }
}
