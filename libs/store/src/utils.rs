/// Power of ten for a token's decimals, when it fits.
pub fn multiplier_for_decimals(decimals: u8) -> Option<u128> {
    10u128.checked_pow(decimals as u32)
}

/// Inverse of [`multiplier_for_decimals`]; `None` when the multiplier is not a power of ten.
pub fn decimals_for_multiplier(multiplier: u128) -> Option<u8> {
    let mut decimals = 0u8;
    let mut rest = multiplier;
    while rest > 1 {
        if rest % 10 != 0 {
            return None;
        }
        rest /= 10;
        decimals += 1;
    }
    (rest == 1).then_some(decimals)
}
