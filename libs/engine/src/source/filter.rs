use alloy::{primitives::Address, rpc::types::Filter, sol_types::SolEvent};
use chain::erc20::IERC20;

use crate::range::ScanWindow;

/// Which indexed Transfer topic must hold the target address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferSide {
    Sender,
    Receiver,
}

impl TransferSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransferSide::Sender => "sender",
            TransferSide::Receiver => "receiver",
        }
    }
}

/// Transfer logs within `window` where `target` sits on `side`.
pub fn transfer_filter(window: &ScanWindow, target: Address, side: TransferSide) -> Filter {
    let filter = Filter::new()
        .from_block(window.from)
        .to_block(window.to)
        .event_signature(IERC20::Transfer::SIGNATURE_HASH);

    match side {
        TransferSide::Sender => filter.topic1(target.into_word()),
        TransferSide::Receiver => filter.topic2(target.into_word()),
    }
}
