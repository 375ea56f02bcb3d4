use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::pricing;
use crate::core::{Skip, SkipId};

/// One selected offering and how many of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartEntry {
    pub skip: Skip,
    pub quantity: u32,
}

impl CartEntry {
    /// Per-entry total: final unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> i64 {
        pricing::line_total(&self.skip, self.quantity)
    }
}

/// Insertion-ordered selection state.
///
/// At most one entry per skip id; entry order is the order offerings were
/// first selected. An entry whose quantity would reach zero is removed
/// rather than kept at zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    entries: IndexMap<SkipId, CartEntry>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the entry for `skip`, appending it at quantity 1 when it
    /// is not in the cart yet. No upper quantity bound.
    pub fn add(&mut self, skip: &Skip) {
        self.entries
            .entry(skip.id)
            .and_modify(|entry| entry.quantity += 1)
            .or_insert_with(|| CartEntry {
                skip: skip.clone(),
                quantity: 1,
            });
    }

    /// Decrements the entry for `id`, deleting it at quantity 1.
    /// Ids not in the cart are ignored.
    pub fn remove(&mut self, id: SkipId) {
        match self.entries.get_mut(&id) {
            Some(entry) if entry.quantity > 1 => entry.quantity -= 1,
            Some(_) => {
                self.entries.shift_remove(&id);
            }
            None => {}
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Selected quantity for `id`, 0 when absent.
    #[must_use]
    pub fn quantity_of(&self, id: SkipId) -> u32 {
        self.entries.get(&id).map_or(0, |entry| entry.quantity)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct offerings in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total selected units across all entries.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.entries
            .values()
            .map(|entry| u64::from(entry.quantity))
            .sum()
    }

    /// Sum of per-entry line totals.
    #[must_use]
    pub fn total_price(&self) -> i64 {
        self.entries.values().map(CartEntry::line_total).sum()
    }

    /// Entries in first-selection order.
    pub fn entries(&self) -> impl Iterator<Item = &CartEntry> + '_ {
        self.entries.values()
    }
}
