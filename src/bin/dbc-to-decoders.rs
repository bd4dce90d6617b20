//! dbc-to-decoders - build the CAN decoder catalog of a CAN database
//!
//! Writes one `CAN_SIGNAL` decoder per signal occurrence, bound to the CAN
//! interface id found in the network-interface configuration.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use signal_catalog::{
    OutputTarget, catalog::interfaces::DEFAULT_INTERFACES_PATH, generate_decoders, logging,
};

#[derive(Parser)]
#[command(name = "dbc-to-decoders")]
#[command(author, version, about = "Convert a DBC file into a CAN signal decoder catalog")]
struct Cli {
    /// Input DBC file
    input: PathBuf,

    /// Output JSON file (standard output when omitted)
    output: Option<PathBuf>,

    /// Network-interface configuration holding the CAN_INTERFACE id
    #[arg(short, long, env = "NETWORK_INTERFACES", default_value = DEFAULT_INTERFACES_PATH)]
    interfaces: PathBuf,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let target = OutputTarget::from(cli.output);
    generate_decoders(&cli.input, &cli.interfaces, &target).with_context(|| {
        format!(
            "Failed to build decoder catalog from {} (interfaces: {})",
            cli.input.display(),
            cli.interfaces.display()
        )
    })?;
    Ok(())
}
