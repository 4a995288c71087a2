//! CLI entry point for the tile suggestion dump checker

use clap::Parser;
use tilevote::io::cli::{Cli, FileProcessor};

fn main() -> tilevote::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
