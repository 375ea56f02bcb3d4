use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Catalog-unique identifier of one skip offering.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SkipId(pub u64);

impl fmt::Display for SkipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One skip-hire offering as returned by the by-location catalog endpoint.
///
/// Field names mirror the wire schema so records deserialize straight from
/// the API payload. Monetary fields are whole currency units; timestamps
/// arrive without a timezone designator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skip {
    pub id: SkipId,
    pub size: u32,
    pub hire_period_days: u32,
    pub transport_cost: Option<i64>,
    pub per_tonne_cost: Option<i64>,
    pub price_before_vat: i64,
    pub vat: u32,
    pub postcode: String,
    pub area: String,
    pub forbidden: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub allowed_on_road: bool,
    pub allows_heavy_waste: bool,
}

impl Skip {
    /// The transport surcharge applies whenever the catalog reports any
    /// transport cost, whatever its magnitude.
    #[must_use]
    pub fn has_transport_surcharge(&self) -> bool {
        self.transport_cost.is_some()
    }

    /// The per-tonne surcharge applies whenever the catalog reports any
    /// per-tonne cost, whatever its magnitude.
    #[must_use]
    pub fn has_per_tonne_surcharge(&self) -> bool {
        self.per_tonne_cost.is_some()
    }
}
