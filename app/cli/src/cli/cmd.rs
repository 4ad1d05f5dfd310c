use clap::{Parser, Subcommand};

use crate::cli::collect::args::Args;
use crate::cli::tokens::args::Query;

#[derive(Parser, Debug)]
#[command(name = "collector")]
#[command(about = "Export the on-chain activity of an address to CSV", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan a block range and write the address activity to a CSV file
    Collect(Args),
    /// Print the persisted token metadata
    Tokens(Query),
}
