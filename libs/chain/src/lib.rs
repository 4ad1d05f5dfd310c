pub mod erc20;
pub mod ledger;
pub mod rpc;
