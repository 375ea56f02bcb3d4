use std::collections::HashSet;

use tracing::{debug, warn};

use crate::catalog::{CATALOG_FAILURE_MESSAGE, CatalogPhase, LoadTicket};
use crate::core::{Skip, SkipId};
use crate::error::SelectorResult;
use crate::render::Renderer;

use super::SelectorEngine;

impl<R: Renderer> SelectorEngine<R> {
    /// Starts (or restarts) the catalog load and returns its completion
    /// ticket. Any ticket minted earlier is superseded immediately.
    pub fn begin_catalog_load(&mut self) -> LoadTicket {
        self.core.runtime.load_generation += 1;
        self.core.runtime.phase = CatalogPhase::Loading;
        debug!(
            generation = self.core.runtime.load_generation,
            "begin catalog load"
        );

        LoadTicket {
            generation: self.core.runtime.load_generation,
        }
    }

    /// Applies a finished fetch.
    ///
    /// Stale tickets are dropped without touching state, so completions
    /// arriving after a retry or a torn-down flow stay harmless. Every
    /// failure kind collapses into the same retryable failed phase; the
    /// concrete error goes to the log only.
    pub fn complete_catalog_load(
        &mut self,
        ticket: LoadTicket,
        outcome: SelectorResult<Vec<Skip>>,
    ) {
        if ticket.generation != self.core.runtime.load_generation {
            warn!(
                ticket_generation = ticket.generation,
                current_generation = self.core.runtime.load_generation,
                "dropping stale catalog load completion"
            );
            return;
        }

        match outcome {
            Ok(skips) => {
                let skips = canonicalize_catalog(skips);
                debug!(count = skips.len(), "catalog ready");
                self.core.model.catalog = skips;
                self.core.runtime.phase = CatalogPhase::Ready;
            }
            Err(err) => {
                warn!(error = %err, "catalog load failed");
                self.core.runtime.phase = CatalogPhase::Failed {
                    message: CATALOG_FAILURE_MESSAGE.to_owned(),
                };
            }
        }
    }

    /// User-gated manual retry; equivalent to starting a fresh load.
    /// No automatic backoff, no retry count.
    pub fn retry_catalog_load(&mut self) -> LoadTicket {
        self.begin_catalog_load()
    }

    #[must_use]
    pub fn catalog_phase(&self) -> &CatalogPhase {
        &self.core.runtime.phase
    }

    /// Loaded offerings in catalog order; empty until the first successful
    /// load.
    #[must_use]
    pub fn skips(&self) -> &[Skip] {
        &self.core.model.catalog
    }

    #[must_use]
    pub fn skip_by_id(&self, id: SkipId) -> Option<&Skip> {
        self.core.model.skip_by_id(id)
    }
}

/// Keeps the first record per id; the catalog carries one offering per id.
fn canonicalize_catalog(skips: Vec<Skip>) -> Vec<Skip> {
    let original_count = skips.len();
    let mut seen: HashSet<SkipId> = HashSet::with_capacity(skips.len());
    let mut canonical = Vec::with_capacity(skips.len());

    for skip in skips {
        if seen.insert(skip.id) {
            canonical.push(skip);
        }
    }

    let duplicate_count = original_count - canonical.len();
    if duplicate_count > 0 {
        warn!(
            duplicate_count,
            canonical_count = canonical.len(),
            "canonicalized catalog on load"
        );
    }

    canonical
}
