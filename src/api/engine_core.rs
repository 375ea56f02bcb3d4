use crate::catalog::CatalogPhase;
use crate::view::ViewState;

use super::{engine_config::SelectorEngineConfig, selector_model::SelectorModel};

/// Load lifecycle bookkeeping.
pub(super) struct RuntimeState {
    pub(super) phase: CatalogPhase,
    pub(super) load_generation: u64,
}

/// Internal engine core state used by the public facade (`SelectorEngine`).
pub(super) struct EngineCore {
    pub(super) config: SelectorEngineConfig,
    pub(super) model: SelectorModel,
    pub(super) view: ViewState,
    pub(super) runtime: RuntimeState,
}
