mod common;

use skipcart_rs::core::{Cart, SkipId};

#[test]
fn add_appends_new_entry_at_quantity_one() {
    let mut cart = Cart::new();
    let skip = common::skip(1, 4, 278, 20);

    cart.add(&skip);

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.quantity_of(skip.id), 1);
}

#[test]
fn add_existing_increments_quantity() {
    let mut cart = Cart::new();
    let skip = common::skip(1, 4, 278, 20);

    cart.add(&skip);
    cart.add(&skip);
    cart.add(&skip);

    assert_eq!(cart.len(), 1);
    assert_eq!(cart.quantity_of(skip.id), 3);
}

#[test]
fn remove_decrements_above_one() {
    let mut cart = Cart::new();
    let skip = common::skip(1, 4, 278, 20);
    cart.add(&skip);
    cart.add(&skip);

    cart.remove(skip.id);

    assert_eq!(cart.quantity_of(skip.id), 1);
    assert_eq!(cart.len(), 1);
}

#[test]
fn remove_at_quantity_one_deletes_entry() {
    let mut cart = Cart::new();
    let skip = common::skip(1, 4, 278, 20);
    cart.add(&skip);

    cart.remove(skip.id);

    assert!(cart.is_empty());
    assert_eq!(cart.quantity_of(skip.id), 0);
}

#[test]
fn remove_absent_id_is_a_noop() {
    let mut cart = Cart::new();
    let skip = common::skip(1, 4, 278, 20);
    cart.add(&skip);
    let before = cart.clone();

    cart.remove(SkipId(999));

    assert_eq!(cart, before);
}

#[test]
fn clear_empties_any_cart() {
    let mut cart = Cart::new();
    for skip in common::catalog() {
        cart.add(&skip);
        cart.add(&skip);
    }

    cart.clear();

    assert!(cart.is_empty());
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.total_price(), 0);
}

#[test]
fn entries_keep_first_selection_order() {
    let mut cart = Cart::new();
    let a = common::skip(1, 4, 278, 20);
    let b = common::skip(2, 6, 305, 20);
    let c = common::skip(3, 8, 375, 20);

    cart.add(&a);
    cart.add(&b);
    cart.add(&c);
    // re-adding an existing entry must not move it
    cart.add(&a);

    let order: Vec<SkipId> = cart.entries().map(|entry| entry.skip.id).collect();
    assert_eq!(order, [a.id, b.id, c.id]);
}

#[test]
fn deleting_a_middle_entry_preserves_order() {
    let mut cart = Cart::new();
    let a = common::skip(1, 4, 278, 20);
    let b = common::skip(2, 6, 305, 20);
    let c = common::skip(3, 8, 375, 20);
    cart.add(&a);
    cart.add(&b);
    cart.add(&c);

    cart.remove(b.id);

    let order: Vec<SkipId> = cart.entries().map(|entry| entry.skip.id).collect();
    assert_eq!(order, [a.id, c.id]);
}

#[test]
fn item_count_sums_quantities_across_entries() {
    let mut cart = Cart::new();
    let a = common::skip(1, 4, 278, 20);
    let b = common::skip(2, 6, 305, 20);
    cart.add(&a);
    cart.add(&a);
    cart.add(&b);

    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.len(), 2);
}

#[test]
fn total_price_sums_line_totals() {
    let mut cart = Cart::new();
    // 278 @ 20% → 334 each; 992 + 40 extras @ 20% → 1238
    let plain = common::skip(1, 4, 278, 20);
    let surcharged = common::skip_with_surcharges(2, 20, 992, 20, Some(236), Some(236));
    cart.add(&plain);
    cart.add(&plain);
    cart.add(&surcharged);

    assert_eq!(cart.total_price(), 2 * 334 + 1238);
}
