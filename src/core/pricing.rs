use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Skip;

/// Flat amount charged per applied surcharge indicator.
///
/// The catalog reports its own transport / per-tonne magnitudes, but the
/// selection flow charges a fixed 20 per indicator; the reported values
/// stay informational.
pub const SURCHARGE_FLAT: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Surcharge {
    Transport,
    PerTonne,
}

impl Surcharge {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Surcharge::Transport => "Transport cost",
            Surcharge::PerTonne => "Per tonne cost",
        }
    }
}

/// Itemized pricing for one offering, derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    pub base_price: i64,
    pub extra_costs: i64,
    pub subtotal: i64,
    pub vat_amount: i64,
    pub final_price: i64,
}

impl PriceBreakdown {
    /// Computes base price + flat surcharges + VAT for one offering.
    ///
    /// VAT rounds half-up to a whole unit, once per offering; cart totals
    /// sum already-rounded per-offering prices.
    #[must_use]
    pub fn for_skip(skip: &Skip) -> Self {
        let base_price = skip.price_before_vat;
        let extra_costs = SURCHARGE_FLAT * applied_surcharges(skip).len() as i64;
        let subtotal = base_price + extra_costs;
        let vat_amount = round_half_up_percent(subtotal, skip.vat);

        Self {
            base_price,
            extra_costs,
            subtotal,
            vat_amount,
            final_price: subtotal + vat_amount,
        }
    }
}

/// Surcharge indicators present on the offering, in display order.
#[must_use]
pub fn applied_surcharges(skip: &Skip) -> SmallVec<[Surcharge; 2]> {
    let mut applied: SmallVec<[Surcharge; 2]> = SmallVec::new();
    if skip.has_transport_surcharge() {
        applied.push(Surcharge::Transport);
    }
    if skip.has_per_tonne_surcharge() {
        applied.push(Surcharge::PerTonne);
    }
    applied
}

/// Final per-unit price including surcharges and VAT.
#[must_use]
pub fn final_price(skip: &Skip) -> i64 {
    PriceBreakdown::for_skip(skip).final_price
}

/// `final_price` times the selected quantity.
#[must_use]
pub fn line_total(skip: &Skip, quantity: u32) -> i64 {
    final_price(skip) * i64::from(quantity)
}

/// Rounds `value * percent / 100` half-up to a whole unit.
fn round_half_up_percent(value: i64, percent: u32) -> i64 {
    let exact = Decimal::from(value) * Decimal::from(percent) / Decimal::ONE_HUNDRED;

    // Catalog prices sit far below the i64 range; saturate instead of wrapping.
    exact
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(i64::MAX)
}
