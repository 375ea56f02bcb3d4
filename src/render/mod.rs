mod frame;
mod null_renderer;
mod text_renderer;

pub use frame::{BreakdownLines, CartSummary, FrameBody, SkipRow, ViewFrame, format_gbp};
pub use null_renderer::NullRenderer;
pub use text_renderer::TextRenderer;

use crate::error::SelectorResult;

/// Contract implemented by any presentation backend.
///
/// Backends receive a fully materialized, deterministic `ViewFrame` so
/// display code stays isolated from catalog, cart and pricing logic.
pub trait Renderer {
    fn render(&mut self, frame: &ViewFrame) -> SelectorResult<()>;
}
