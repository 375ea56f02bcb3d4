use crate::core::{PriceBreakdown, pricing};
use crate::error::{SelectorError, SelectorResult};
use crate::render::Renderer;

use super::SelectorEngine;
use super::engine_snapshot::{CartEntrySnapshot, CartSnapshot, EngineSnapshot, SkipRowSnapshot};

impl<R: Renderer> SelectorEngine<R> {
    /// Captures the full engine state for tooling and regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        let expanded = self.core.view.expanded_skip();

        let rows = self
            .core
            .model
            .catalog
            .iter()
            .map(|skip| {
                let quantity = self.core.model.cart.quantity_of(skip.id);
                SkipRowSnapshot {
                    id: skip.id,
                    size: skip.size,
                    hire_period_days: skip.hire_period_days,
                    allowed_on_road: skip.allowed_on_road,
                    allows_heavy_waste: skip.allows_heavy_waste,
                    breakdown: PriceBreakdown::for_skip(skip),
                    quantity,
                    line_total: pricing::line_total(skip, quantity),
                    expanded: expanded == Some(skip.id),
                }
            })
            .collect();

        let entries = self
            .core
            .model
            .cart
            .entries()
            .map(|entry| CartEntrySnapshot {
                id: entry.skip.id,
                size: entry.skip.size,
                quantity: entry.quantity,
                line_total: entry.line_total(),
            })
            .collect();

        EngineSnapshot {
            phase: self.core.runtime.phase.clone(),
            postcode: self.core.config.postcode.clone(),
            area: self.core.config.area.clone(),
            rows,
            cart: CartSnapshot {
                entries,
                item_count: self.core.model.cart.item_count(),
                total_price: self.core.model.cart.total_price(),
                panel_visible: self.core.view.cart_panel_visible(),
            },
            expanded_skip: expanded,
        }
    }

    /// Pretty JSON form of `snapshot`.
    pub fn snapshot_json_pretty(&self) -> SelectorResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| SelectorError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
