use tracing::{debug, trace};

use crate::core::{CartEntry, SkipId};
use crate::error::{SelectorError, SelectorResult};
use crate::render::Renderer;

use super::SelectorEngine;

impl<R: Renderer> SelectorEngine<R> {
    /// Adds one unit of the identified offering to the cart.
    ///
    /// The id must come from the loaded catalog; quantities are unbounded.
    pub fn add_to_cart(&mut self, id: SkipId) -> SelectorResult<()> {
        let skip = self
            .core
            .model
            .skip_by_id(id)
            .cloned()
            .ok_or(SelectorError::UnknownSkip(id))?;

        self.core.model.cart.add(&skip);
        debug!(
            skip_id = %id,
            quantity = self.core.model.cart.quantity_of(id),
            "add to cart"
        );
        self.sync_cart_panel();

        Ok(())
    }

    /// Removes one unit; deletes the entry at quantity 1. Ids not in the
    /// cart are a no-op.
    pub fn remove_from_cart(&mut self, id: SkipId) {
        self.core.model.cart.remove(id);
        trace!(
            skip_id = %id,
            quantity = self.core.model.cart.quantity_of(id),
            "remove from cart"
        );
        self.sync_cart_panel();
    }

    /// Empties the cart. The summary panel latch is left as-is.
    pub fn clear_cart(&mut self) {
        self.core.model.cart.clear();
        debug!("clear cart");
        self.sync_cart_panel();
    }

    /// Selected quantity for `id`, 0 when absent.
    #[must_use]
    pub fn cart_quantity(&self, id: SkipId) -> u32 {
        self.core.model.cart.quantity_of(id)
    }

    /// Total selected units across all entries.
    #[must_use]
    pub fn cart_item_count(&self) -> u64 {
        self.core.model.cart.item_count()
    }

    /// Cart-wide total including surcharges and VAT.
    #[must_use]
    pub fn cart_total_price(&self) -> i64 {
        self.core.model.cart.total_price()
    }

    /// Entries in first-selection order.
    pub fn cart_entries(&self) -> impl Iterator<Item = &CartEntry> + '_ {
        self.core.model.cart.entries()
    }

    fn sync_cart_panel(&mut self) {
        let non_empty = !self.core.model.cart.is_empty();
        self.core.view.on_cart_changed(non_empty);
    }
}
