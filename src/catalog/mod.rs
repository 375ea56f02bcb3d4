//! Catalog load lifecycle shared by the engine and transport clients.

use serde::{Deserialize, Serialize};

#[cfg(feature = "http-catalog")]
mod client;
#[cfg(feature = "http-catalog")]
pub use client::CatalogClient;

/// User-facing copy shown for any catalog failure, regardless of kind.
pub const CATALOG_FAILURE_MESSAGE: &str = "Failed to load skip options. Please try again.";

/// Lifecycle of the one catalog request the selector ever has in flight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogPhase {
    /// Fetch pending; the engine starts here.
    Loading,
    /// Fetch failed; `message` carries the user-facing retry copy.
    Failed { message: String },
    /// Catalog loaded and canonicalized.
    Ready,
}

impl CatalogPhase {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogPhase::Loading)
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, CatalogPhase::Failed { .. })
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, CatalogPhase::Ready)
    }
}

/// Completion guard for one catalog load.
///
/// Tickets are minted by `begin_catalog_load` and honored at most once:
/// a completion carrying a superseded ticket is dropped, which keeps late
/// fetch callbacks harmless after a retry or a torn-down flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub(crate) generation: u64,
}

impl LoadTicket {
    #[must_use]
    pub fn generation(self) -> u64 {
        self.generation
    }
}
