//! dbc-to-nodes - build the node catalog of a CAN database
//!
//! Writes one `sensor` entry per unique signal name as sorted, 4-space-indented JSON.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use signal_catalog::{OutputTarget, generate_nodes, logging};

#[derive(Parser)]
#[command(name = "dbc-to-nodes")]
#[command(author, version, about = "Convert a DBC file into a vehicle signal node catalog")]
struct Cli {
    /// Input DBC file
    input: PathBuf,

    /// Output JSON file (standard output when omitted)
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let target = OutputTarget::from(cli.output);
    generate_nodes(&cli.input, &target)
        .with_context(|| format!("Failed to build node catalog from {}", cli.input.display()))?;
    Ok(())
}
