use serde::{Deserialize, Serialize};

use crate::catalog::CatalogPhase;
use crate::core::{PriceBreakdown, SkipId};

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub phase: CatalogPhase,
    pub postcode: String,
    pub area: String,
    pub rows: Vec<SkipRowSnapshot>,
    pub cart: CartSnapshot,
    pub expanded_skip: Option<SkipId>,
}

/// One catalog offering with its derived pricing and selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipRowSnapshot {
    pub id: SkipId,
    pub size: u32,
    pub hire_period_days: u32,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
    pub breakdown: PriceBreakdown,
    pub quantity: u32,
    pub line_total: i64,
    pub expanded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartEntrySnapshot {
    pub id: SkipId,
    pub size: u32,
    pub quantity: u32,
    pub line_total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub entries: Vec<CartEntrySnapshot>,
    pub item_count: u64,
    pub total_price: i64,
    pub panel_visible: bool,
}
