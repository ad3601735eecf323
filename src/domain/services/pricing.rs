use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Pricing {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
    pub num_nights: u32,
}

/// Flat 12% applied to the stay subtotal.
pub fn tax_rate() -> Decimal {
    Decimal::new(12, 2)
}

/// Rounds to the minor currency unit, half away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn calculate_pricing(nightly_rate: Decimal, num_nights: u32) -> Pricing {
    let subtotal = round_money(nightly_rate * Decimal::from(num_nights));
    let tax = round_money(subtotal * tax_rate());

    Pricing {
        subtotal,
        tax,
        total: subtotal + tax,
        num_nights,
    }
}
