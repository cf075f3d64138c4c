use alloy::primitives::{Address, U256};

/// Increase `base` by `percent_increase` percent, rounding down and
/// saturating at `U256::MAX`.
pub fn apply_percent_increase(base: U256, percent_increase: u64) -> U256 {
    let hundred = U256::from(100);
    let percent = U256::from(percent_increase);
    // base * p / 100 split as (base / 100) * p + (base % 100) * p / 100 so the
    // product cannot overflow before the division
    let (quotient, remainder) = base.div_rem(hundred);
    let increase = quotient
        .saturating_mul(percent)
        .saturating_add(remainder * percent / hundred);
    base.saturating_add(increase)
}

/// `true` for `Some(address)` unless the address is zero.
pub fn is_non_zero_address(address: Option<Address>) -> bool {
    address.is_some_and(|address| !address.is_zero())
}
