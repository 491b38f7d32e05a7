pub mod eligibility;
pub mod equivalent_time;
pub mod qualification;
pub mod standard_lookup;
pub mod time_converter;
pub mod time_parser;

use rust_decimal::{Decimal, RoundingStrategy};

/// Round a time to hundredths of a second, halves away from zero.
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
