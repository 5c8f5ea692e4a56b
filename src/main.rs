//! CLI entry point for the tile combination generator

use clap::Parser;
use tilecombo::io::cli::{Cli, ComboProcessor};
use tilecombo::io::configuration::DEFAULT_LOG_FILTER;

fn main() -> tilecombo::Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .format_timestamp(None)
        .init();

    let processor = ComboProcessor::new(cli);
    processor.process()?;
    Ok(())
}
