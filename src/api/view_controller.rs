use tracing::trace;

use crate::core::SkipId;
use crate::render::Renderer;

use super::SelectorEngine;

impl<R: Renderer> SelectorEngine<R> {
    /// Expands the detail panel for `id`; toggling the expanded id
    /// collapses it, expanding a different id replaces it.
    pub fn toggle_skip_details(&mut self, id: SkipId) {
        self.core.view.toggle_details(id);
        trace!(
            skip_id = %id,
            expanded = ?self.core.view.expanded_skip(),
            "toggle details"
        );
    }

    /// Collapses whichever detail panel is expanded.
    pub fn collapse_skip_details(&mut self) {
        self.core.view.collapse_details();
    }

    #[must_use]
    pub fn expanded_skip(&self) -> Option<SkipId> {
        self.core.view.expanded_skip()
    }

    /// Whether the cart summary panel has latched visible.
    #[must_use]
    pub fn cart_panel_visible(&self) -> bool {
        self.core.view.cart_panel_visible()
    }
}
