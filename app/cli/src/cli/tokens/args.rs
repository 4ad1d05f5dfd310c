use clap::Parser;
use engine::args::Args as EngineArgs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Show cached token metadata", long_about = None)]
pub struct Query {
    /// Token metadata cache file
    #[arg(long, env = "COLLECTOR_TOKENS_FILE", default_value = EngineArgs::DEFAULT_TOKENS_FILE)]
    pub tokens_file: PathBuf,

    /// Only show this token
    #[arg(short, long)]
    pub token: Option<String>,
}
