use crate::catalog::CatalogPhase;
use crate::core::{PriceBreakdown, Skip, pricing};
use crate::render::{
    BreakdownLines, CartSummary, FrameBody, Renderer, SkipRow, ViewFrame, format_gbp,
};

use super::SelectorEngine;

const LOADING_MESSAGE: &str = "Loading skip options...";
const RETRY_LABEL: &str = "Try Again";
const EMPTY_CART_HINT: &str = "No skips selected yet";
const TOTAL_LABEL: &str = "Total Price (inc. VAT)";

impl<R: Renderer> SelectorEngine<R> {
    /// Materializes the deterministic presentation frame for the current
    /// engine state.
    #[must_use]
    pub fn build_view_frame(&self) -> ViewFrame {
        let status_line = format!(
            "Delivering to {}, {}",
            self.core.config.area, self.core.config.postcode
        );

        let body = match &self.core.runtime.phase {
            CatalogPhase::Loading => FrameBody::Loading {
                message: LOADING_MESSAGE.to_owned(),
            },
            CatalogPhase::Failed { message } => FrameBody::Failed {
                message: message.clone(),
                retry_label: RETRY_LABEL.to_owned(),
            },
            CatalogPhase::Ready => self.build_catalog_body(),
        };

        ViewFrame { status_line, body }
    }

    fn build_catalog_body(&self) -> FrameBody {
        let expanded = self.core.view.expanded_skip();
        let rows = self
            .core
            .model
            .catalog
            .iter()
            .map(|skip| {
                build_skip_row(
                    skip,
                    self.core.model.cart.quantity_of(skip.id),
                    expanded == Some(skip.id),
                )
            })
            .collect();

        let summary = if self.core.model.cart.is_empty() {
            None
        } else {
            Some(self.build_cart_summary())
        };
        let empty_hint = summary.is_none().then(|| EMPTY_CART_HINT.to_owned());

        FrameBody::Catalog {
            rows,
            summary,
            empty_hint,
        }
    }

    fn build_cart_summary(&self) -> CartSummary {
        let cart = &self.core.model.cart;
        let item_count = cart.item_count();
        let plural = if item_count == 1 { "" } else { "s" };

        CartSummary {
            item_count_line: format!("{item_count} item{plural} selected"),
            total_label: TOTAL_LABEL.to_owned(),
            total: format_gbp(cart.total_price()),
            entries: cart
                .entries()
                .map(|entry| {
                    format!(
                        "{} Yard Skip × {} — {}",
                        entry.skip.size,
                        entry.quantity,
                        format_gbp(entry.line_total())
                    )
                })
                .collect(),
            panel_visible: self.core.view.cart_panel_visible(),
        }
    }
}

fn build_skip_row(skip: &Skip, quantity: u32, expanded: bool) -> SkipRow {
    let breakdown = PriceBreakdown::for_skip(skip);

    let mut warnings = Vec::new();
    if !skip.allowed_on_road {
        warnings.push("Not allowed on road".to_owned());
    }
    if !skip.allows_heavy_waste {
        warnings.push("Not for heavy waste".to_owned());
    }

    SkipRow {
        id: skip.id,
        title: format!("{} Yard Skip", skip.size),
        hire_period: format!("{} day hire period", skip.hire_period_days),
        warnings,
        price: format_gbp(breakdown.final_price),
        price_note: price_note(skip, breakdown),
        extra_costs_note: extra_costs_note(skip),
        quantity,
        selected: quantity > 0,
        line_total: (quantity > 1).then(|| {
            format!(
                "Total: {}",
                format_gbp(breakdown.final_price * i64::from(quantity))
            )
        }),
        breakdown: expanded.then(|| breakdown_lines(skip, breakdown)),
    }
}

fn price_note(skip: &Skip, breakdown: PriceBreakdown) -> String {
    if breakdown.extra_costs > 0 {
        format!(
            "{} + VAT ({}%) + {} extra costs",
            format_gbp(breakdown.base_price),
            skip.vat,
            format_gbp(breakdown.extra_costs)
        )
    } else {
        format!("{} + VAT ({}%)", format_gbp(breakdown.base_price), skip.vat)
    }
}

/// "Includes Transport cost and Per tonne cost (£20 each)" style note,
/// absent when no surcharge indicator applies.
fn extra_costs_note(skip: &Skip) -> Option<String> {
    let applied = pricing::applied_surcharges(skip);
    if applied.is_empty() {
        return None;
    }

    let labels: Vec<&str> = applied.iter().map(|surcharge| surcharge.label()).collect();
    Some(format!(
        "Includes {} (£{} each)",
        labels.join(" and "),
        pricing::SURCHARGE_FLAT
    ))
}

fn breakdown_lines(skip: &Skip, breakdown: PriceBreakdown) -> BreakdownLines {
    BreakdownLines {
        base_price: format!("Base Price: {}", format_gbp(breakdown.base_price)),
        extra_costs: (breakdown.extra_costs > 0)
            .then(|| format!("Extra Costs: {}", format_gbp(breakdown.extra_costs))),
        subtotal: format!("Subtotal: {}", format_gbp(breakdown.subtotal)),
        vat: format!("VAT ({}%): {}", skip.vat, format_gbp(breakdown.vat_amount)),
        total: format!("Total Price: {}", format_gbp(breakdown.final_price)),
    }
}
