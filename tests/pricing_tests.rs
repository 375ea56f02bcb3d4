mod common;

use skipcart_rs::core::pricing::{self, PriceBreakdown, Surcharge};

#[test]
fn no_surcharges_is_base_plus_vat() {
    let skip = common::skip(1, 6, 500, 20);
    let breakdown = PriceBreakdown::for_skip(&skip);

    assert_eq!(breakdown.base_price, 500);
    assert_eq!(breakdown.extra_costs, 0);
    assert_eq!(breakdown.subtotal, 500);
    assert_eq!(breakdown.vat_amount, 100);
    assert_eq!(breakdown.final_price, 600);
}

#[test]
fn one_surcharge_adds_flat_twenty() {
    let skip = common::skip_with_surcharges(1, 6, 500, 20, Some(236), None);
    let breakdown = PriceBreakdown::for_skip(&skip);

    assert_eq!(breakdown.extra_costs, 20);
    assert_eq!(breakdown.subtotal, 520);
    assert_eq!(breakdown.vat_amount, 104);
    assert_eq!(breakdown.final_price, 624);
}

#[test]
fn both_surcharges_add_flat_forty() {
    let skip = common::skip_with_surcharges(1, 6, 500, 20, Some(236), Some(236));
    let breakdown = PriceBreakdown::for_skip(&skip);

    assert_eq!(breakdown.extra_costs, 40);
    assert_eq!(breakdown.subtotal, 540);
    assert_eq!(breakdown.vat_amount, 108);
    assert_eq!(breakdown.final_price, 648);
}

#[test]
fn surcharge_magnitudes_from_catalog_are_ignored() {
    let small = common::skip_with_surcharges(1, 6, 500, 20, Some(1), Some(1));
    let large = common::skip_with_surcharges(1, 6, 500, 20, Some(99_999), Some(99_999));

    assert_eq!(
        PriceBreakdown::for_skip(&small),
        PriceBreakdown::for_skip(&large)
    );
    assert_eq!(PriceBreakdown::for_skip(&small).extra_costs, 40);
}

#[test]
fn vat_rounds_half_up_at_exact_midpoint() {
    // 510 * 5% = 25.5 rounds up to 26
    let skip = common::skip(1, 4, 510, 5);
    let breakdown = PriceBreakdown::for_skip(&skip);
    assert_eq!(breakdown.vat_amount, 26);
    assert_eq!(breakdown.final_price, 536);

    // 490 * 5% = 24.5 rounds up to 25
    let skip = common::skip(1, 4, 490, 5);
    assert_eq!(PriceBreakdown::for_skip(&skip).vat_amount, 25);
}

#[test]
fn vat_rounds_down_below_midpoint() {
    // 101 * 15% = 15.15 rounds down to 15
    let skip = common::skip(1, 4, 101, 15);
    assert_eq!(PriceBreakdown::for_skip(&skip).vat_amount, 15);
}

#[test]
fn zero_vat_and_zero_price_stay_zero() {
    let skip = common::skip(1, 4, 500, 0);
    let breakdown = PriceBreakdown::for_skip(&skip);
    assert_eq!(breakdown.vat_amount, 0);
    assert_eq!(breakdown.final_price, 500);

    let skip = common::skip(1, 4, 0, 20);
    assert_eq!(PriceBreakdown::for_skip(&skip).final_price, 0);
}

#[test]
fn line_total_scales_final_price() {
    let skip = common::skip_with_surcharges(1, 6, 500, 20, Some(236), Some(236));

    assert_eq!(pricing::line_total(&skip, 0), 0);
    assert_eq!(pricing::line_total(&skip, 1), 648);
    assert_eq!(pricing::line_total(&skip, 3), 1944);
}

#[test]
fn applied_surcharges_keep_display_order() {
    let skip = common::skip_with_surcharges(1, 6, 500, 20, Some(236), Some(236));
    let applied = pricing::applied_surcharges(&skip);

    assert_eq!(
        applied.to_vec(),
        vec![Surcharge::Transport, Surcharge::PerTonne]
    );
    assert_eq!(applied[0].label(), "Transport cost");
    assert_eq!(applied[1].label(), "Per tonne cost");

    let plain = common::skip(1, 6, 500, 20);
    assert!(pricing::applied_surcharges(&plain).is_empty());
}
