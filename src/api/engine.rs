use crate::error::SelectorResult;
use crate::render::Renderer;

use super::engine_core::EngineCore;

/// Main orchestration facade consumed by host applications.
///
/// `SelectorEngine` coordinates the loaded catalog, cart bookkeeping,
/// transient view state, and renderer calls.
pub struct SelectorEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> SelectorEngine<R> {
    /// Builds the current frame, validates it, and hands it to the owned
    /// renderer.
    pub fn render(&mut self) -> SelectorResult<()> {
        let frame = self.build_view_frame();
        frame.validate()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
