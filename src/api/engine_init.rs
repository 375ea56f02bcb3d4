use crate::catalog::CatalogPhase;
use crate::error::SelectorResult;
use crate::render::Renderer;
use crate::view::ViewState;

use super::engine_core::{EngineCore, RuntimeState};
use super::selector_model::SelectorModel;
use super::{SelectorEngine, SelectorEngineConfig};

impl<R: Renderer> SelectorEngine<R> {
    /// Creates an engine awaiting its first catalog load.
    ///
    /// The engine starts in the loading phase; drive it with
    /// `begin_catalog_load` / `complete_catalog_load`.
    pub fn new(renderer: R, config: SelectorEngineConfig) -> SelectorResult<Self> {
        config.validate()?;

        Ok(Self {
            renderer,
            core: EngineCore {
                config,
                model: SelectorModel::new(),
                view: ViewState::default(),
                runtime: RuntimeState {
                    phase: CatalogPhase::Loading,
                    load_generation: 0,
                },
            },
        })
    }

    /// Engine bootstrap configuration.
    #[must_use]
    pub fn config(&self) -> &SelectorEngineConfig {
        &self.core.config
    }
}
