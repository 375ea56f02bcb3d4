use serde::{Deserialize, Serialize};

use crate::core::SkipId;
use crate::error::{SelectorError, SelectorResult};

/// Formats a whole-unit amount in the catalog currency.
#[must_use]
pub fn format_gbp(amount: i64) -> String {
    format!("£{amount}")
}

/// Itemized pricing lines shown in an expanded detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownLines {
    pub base_price: String,
    pub extra_costs: Option<String>,
    pub subtotal: String,
    pub vat: String,
    pub total: String,
}

/// One catalog offering prepared for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipRow {
    pub id: SkipId,
    pub title: String,
    pub hire_period: String,
    pub warnings: Vec<String>,
    pub price: String,
    pub price_note: String,
    pub extra_costs_note: Option<String>,
    pub quantity: u32,
    pub selected: bool,
    /// Present only for quantities above one.
    pub line_total: Option<String>,
    /// Present only while this row's detail panel is expanded.
    pub breakdown: Option<BreakdownLines>,
}

/// Cart summary panel content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSummary {
    pub item_count_line: String,
    pub total_label: String,
    pub total: String,
    pub entries: Vec<String>,
    /// One-way latch state; entry lines are shown only once latched.
    pub panel_visible: bool,
}

/// Body variants for the three catalog phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrameBody {
    Loading {
        message: String,
    },
    Failed {
        message: String,
        retry_label: String,
    },
    Catalog {
        rows: Vec<SkipRow>,
        summary: Option<CartSummary>,
        empty_hint: Option<String>,
    },
}

/// Backend-agnostic scene for one selector draw pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewFrame {
    pub status_line: String,
    pub body: FrameBody,
}

impl ViewFrame {
    /// Checks internal consistency before a backend consumes the frame.
    pub fn validate(&self) -> SelectorResult<()> {
        match &self.body {
            FrameBody::Loading { message } | FrameBody::Failed { message, .. } => {
                if message.is_empty() {
                    return Err(SelectorError::InvalidFrame(
                        "empty phase message".to_owned(),
                    ));
                }
            }
            FrameBody::Catalog {
                rows,
                summary,
                empty_hint,
            } => {
                for row in rows {
                    if row.selected != (row.quantity > 0) {
                        return Err(SelectorError::InvalidFrame(format!(
                            "row {} selection flag disagrees with quantity {}",
                            row.id, row.quantity
                        )));
                    }
                    if row.line_total.is_some() && row.quantity < 2 {
                        return Err(SelectorError::InvalidFrame(format!(
                            "row {} carries a line total at quantity {}",
                            row.id, row.quantity
                        )));
                    }
                }
                if summary.is_some() == empty_hint.is_some() {
                    return Err(SelectorError::InvalidFrame(
                        "catalog body needs exactly one of summary or empty hint".to_owned(),
                    ));
                }
            }
        }

        Ok(())
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.body, FrameBody::Loading { .. })
    }
}
