//! Transient view state owned by the engine.
//!
//! Nothing here is derived from catalog or cart contents; frame building
//! reads it next to the model.

use serde::{Deserialize, Serialize};

use crate::core::SkipId;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    cart_panel_visible: bool,
    expanded_skip: Option<SkipId>,
}

impl ViewState {
    #[must_use]
    pub fn cart_panel_visible(self) -> bool {
        self.cart_panel_visible
    }

    #[must_use]
    pub fn expanded_skip(self) -> Option<SkipId> {
        self.expanded_skip
    }

    /// One-way latch: the summary panel appears when the cart first becomes
    /// non-empty and stays visible afterwards, including across `clear`.
    pub fn on_cart_changed(&mut self, cart_non_empty: bool) {
        if cart_non_empty {
            self.cart_panel_visible = true;
        }
    }

    /// Expands `id`, collapsing any other panel; toggling the currently
    /// expanded id collapses it.
    pub fn toggle_details(&mut self, id: SkipId) {
        if self.expanded_skip == Some(id) {
            self.expanded_skip = None;
        } else {
            self.expanded_skip = Some(id);
        }
    }

    /// Collapses whichever detail panel is expanded.
    pub fn collapse_details(&mut self) {
        self.expanded_skip = None;
    }
}
