use clap::Parser;
use engine::args::Args as EngineArgs;
use eyre::Result;
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::read::{self, CliMode};

#[derive(Parser, Debug)]
#[command(about = "Collect the activity of an address", long_about = None)]
pub struct Args {
    /// Node Provider connection string
    #[arg(short, long, env = "COLLECTOR_RPC_URL")]
    pub rpc_url: String,

    /// Address whose activity is collected
    #[arg(short, long, env = "COLLECTOR_ADDRESS")]
    pub address: String,

    /// First block to scan, negative for genesis
    #[arg(long, env = "COLLECTOR_FROM_BLOCK", default_value_t = -1, allow_hyphen_values = true)]
    pub from_block: i64,

    /// Last block to scan, negative for the current head
    #[arg(long, env = "COLLECTOR_TO_BLOCK", default_value_t = -1, allow_hyphen_values = true)]
    pub to_block: i64,

    /// What to collect
    #[arg(short, long, env = "COLLECTOR_MODE", value_enum, default_value_t = CliMode::Transactions)]
    pub mode: CliMode,

    /// CSV destination
    #[arg(short, long, env = "COLLECTOR_OUTPUT")]
    pub output: PathBuf,

    /// Token metadata cache file
    #[arg(long, env = "COLLECTOR_TOKENS_FILE", default_value = EngineArgs::DEFAULT_TOKENS_FILE)]
    pub tokens_file: PathBuf,

    /// Records buffered between the scanner and the writer
    #[arg(long, env = "COLLECTOR_CHANNEL_SIZE", default_value_t = EngineArgs::DEFAULT_CHANNEL_SIZE)]
    pub channel_size: usize,

    /// Delay after shutdown in milliseconds
    #[arg(long, env = "COLLECTOR_EXIT_GRACE_MS", default_value_t = 500)]
    pub exit_grace_ms: u64,
}

impl Args {
    // map CLI args to Engine Args
    pub fn to_engine_args(&self) -> Result<EngineArgs> {
        Ok(EngineArgs {
            address: read::parse_address(&self.address)?,
            from_block: self.from_block,
            to_block: self.to_block,
            mode: self.mode.into(),
            output: self.output.clone(),
            tokens_file: self.tokens_file.clone(),
            channel_size: self.channel_size,
            exit_grace: Duration::from_millis(self.exit_grace_ms),
        })
    }
}
