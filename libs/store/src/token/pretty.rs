use std::fmt::{Display, Formatter, Result};

use crate::{token::model::TokenInfo, utils};

impl Display for TokenInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match utils::decimals_for_multiplier(self.multiplier) {
            Some(decimals) => {
                write!(f, "{} ({}, {} decimals)", self.symbol, self.address, decimals)
            }
            None => write!(f, "{} ({}, x{})", self.symbol, self.address, self.multiplier),
        }
    }
}
