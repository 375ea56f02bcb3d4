use crate::error::SelectorResult;
use crate::render::{FrameBody, Renderer, ViewFrame};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch inconsistent rows
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_row_count: usize,
    pub last_summary_present: bool,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ViewFrame) -> SelectorResult<()> {
        frame.validate()?;

        if let FrameBody::Catalog { rows, summary, .. } = &frame.body {
            self.last_row_count = rows.len();
            self.last_summary_present = summary.is_some();
        } else {
            self.last_row_count = 0;
            self.last_summary_present = false;
        }

        Ok(())
    }
}
