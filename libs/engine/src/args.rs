use std::path::PathBuf;
use std::time::Duration;

use alloy::primitives::Address;

/// What the engine collects for the target address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Every transaction sent or received by the address.
    Transactions,
    /// ERC-20 Transfer events where the address is sender or receiver.
    Transfers,
}

#[derive(Debug, Clone)]
pub struct Args {
    pub address: Address,
    /// Negative means "from genesis".
    pub from_block: i64,
    /// Negative means "up to the current head".
    pub to_block: i64,
    pub mode: Mode,
    pub output: PathBuf,
    pub tokens_file: PathBuf,
    pub channel_size: usize,
    pub exit_grace: Duration,
}

impl Args {
    pub const DEFAULT_TOKENS_FILE: &'static str = "./.data/tokens.json";
    pub const DEFAULT_CHANNEL_SIZE: usize = 256;
    pub const DEFAULT_EXIT_GRACE: Duration = Duration::from_millis(500);

    pub fn new(address: Address, mode: Mode, output: impl Into<PathBuf>) -> Self {
        Self {
            address,
            from_block: -1,
            to_block: -1,
            mode,
            output: output.into(),
            tokens_file: PathBuf::from(Self::DEFAULT_TOKENS_FILE),
            channel_size: Self::DEFAULT_CHANNEL_SIZE,
            exit_grace: Self::DEFAULT_EXIT_GRACE,
        }
    }
}
