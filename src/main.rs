//! resnet - Resistor Network Reducer
//!
//! Computes the equivalent resistance of a resistor network described in a
//! netlist file.
//!
//! # Usage
//!
//! ```bash
//! resnet ladder.net
//! RUST_LOG=resistor_network=trace resnet ladder.net
//! ```

use std::path::PathBuf;

use clap::Parser;
use resistor_network::{circuit, netlist, error::Result, Network};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Equivalent resistance of a resistor network
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the netlist file
    #[arg(value_name = "NETLIST")]
    netlist: PathBuf,

    /// Digits printed after the decimal point
    #[arg(short, long, default_value_t = 6)]
    precision: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "resistor_network=warn",
        1 => "resistor_network=info",
        2 => "resistor_network=debug",
        _ => "resistor_network=trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Parse the netlist file
    let ast = netlist::parse_file(&args.netlist)?;
    info!(
        path = %args.netlist.display(),
        resistors = ast.resistors.len(),
        nodes = ast.node_count(),
        "netlist loaded"
    );

    // Build and validate the network
    let mut network = Network::from_ast(ast)?;
    circuit::validate_network(&network)?;

    let total = network.total_resistance()?;
    println!("Total resistance: {:.*} Ohm", args.precision, total);

    Ok(())
}
