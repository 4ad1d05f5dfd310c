mod cli {
    pub mod collect {
        pub mod args;
        pub mod run;
    }
    pub mod tokens {
        pub mod args;
        pub mod response;
        pub mod run;
    }
    pub mod cmd;
    pub mod read;
}

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use crate::cli::cmd::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli);

    match &cli.command {
        Command::Collect(args) => {
            tracing::info!("Collect Command: {:?}", args);
            let collect_args = args.to_engine_args()?;
            cli::collect::run::start(&args.rpc_url, collect_args).await
        }
        Command::Tokens(query) => {
            tracing::info!("Tokens Query: {:?}", query);
            cli::tokens::run::list(query)
        }
    }
}

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match &cli.command {
        Command::Collect(_) => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
        Command::Tokens(_) => {
            // keep stdout for the json output
            tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
        }
    }
}
