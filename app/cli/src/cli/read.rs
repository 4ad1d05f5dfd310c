use alloy::primitives::Address;
use clap::ValueEnum;
use engine::args::Mode;
use eyre::{Result, WrapErr};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliMode {
    Transactions,
    Transfers,
}

impl From<CliMode> for Mode {
    fn from(value: CliMode) -> Self {
        match value {
            CliMode::Transactions => Mode::Transactions,
            CliMode::Transfers => Mode::Transfers,
        }
    }
}

pub fn parse_address(input: &str) -> Result<Address> {
    input.trim().parse::<Address>().wrap_err_with(|| format!("invalid address `{input}`"))
}
