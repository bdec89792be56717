//! CLI entry point for the adaptive pixel-block renderer

use clap::Parser;
use pixblock::io::cli::{Cli, FileProcessor};
use pixblock::io::logging::{log_specification, setup_logging};

fn main() -> pixblock::Result<()> {
    let cli = Cli::parse();
    let _logger = setup_logging(log_specification(cli.verbose, cli.quiet))?;
    let mut processor = FileProcessor::new(cli);
    processor.process()?;
    Ok(())
}
