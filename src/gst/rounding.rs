use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

/// Smallest cash denomination in circulation. 1c and 2c coins were
/// withdrawn in 1992, so cash tenders settle to the nearest 5 cents.
pub const CASH_ROUNDING_INCREMENT: Decimal = dec!(0.05);

/// Round to the nearest cent, half away from zero.
///
/// This is the ATO rule for GST components: 0.005 rounds to 0.01.
/// Note that most decimal libraries default to banker's rounding
/// (half to even), which is the wrong behaviour here.
pub fn round_to_cent(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round a cash tender to the nearest 5 cents.
///
/// A remainder under 2.5 cents rounds down, otherwise up.
pub fn round_to_cash(amount: Decimal) -> Decimal {
    let remainder = amount % CASH_ROUNDING_INCREMENT;
    if remainder < dec!(0.025) {
        amount - remainder
    } else {
        amount + (CASH_ROUNDING_INCREMENT - remainder)
    }
}
