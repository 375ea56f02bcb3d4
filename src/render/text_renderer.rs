use std::io::Write;

use crate::error::{SelectorError, SelectorResult};
use crate::render::{FrameBody, Renderer, ViewFrame};

/// Plain-text renderer writing one frame per render call.
///
/// Emits content only; layout and styling stay with the host.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, frame: &ViewFrame) -> SelectorResult<()> {
        frame.validate()?;
        write_frame(&mut self.out, frame).map_err(|e| SelectorError::RenderIo(e.to_string()))
    }
}

fn write_frame<W: Write>(out: &mut W, frame: &ViewFrame) -> std::io::Result<()> {
    writeln!(out, "{}", frame.status_line)?;

    match &frame.body {
        FrameBody::Loading { message } => writeln!(out, "{message}")?,
        FrameBody::Failed {
            message,
            retry_label,
        } => {
            writeln!(out, "{message}")?;
            writeln!(out, "[{retry_label}]")?;
        }
        FrameBody::Catalog {
            rows,
            summary,
            empty_hint,
        } => {
            for row in rows {
                writeln!(out)?;
                writeln!(out, "{} — {}", row.title, row.price)?;
                writeln!(out, "  {}", row.hire_period)?;
                writeln!(out, "  {}", row.price_note)?;
                for warning in &row.warnings {
                    writeln!(out, "  ! {warning}")?;
                }
                if let Some(note) = &row.extra_costs_note {
                    writeln!(out, "  {note}")?;
                }
                if row.selected {
                    writeln!(out, "  Selected × {}", row.quantity)?;
                }
                if let Some(line_total) = &row.line_total {
                    writeln!(out, "  {line_total}")?;
                }
                if let Some(breakdown) = &row.breakdown {
                    writeln!(out, "  {}", breakdown.base_price)?;
                    if let Some(extra_costs) = &breakdown.extra_costs {
                        writeln!(out, "  {extra_costs}")?;
                    }
                    writeln!(out, "  {}", breakdown.subtotal)?;
                    writeln!(out, "  {}", breakdown.vat)?;
                    writeln!(out, "  {}", breakdown.total)?;
                }
            }

            writeln!(out)?;
            if let Some(hint) = empty_hint {
                writeln!(out, "{hint}")?;
            }
            if let Some(summary) = summary {
                writeln!(out, "Your Selection — {}", summary.item_count_line)?;
                writeln!(out, "{}: {}", summary.total_label, summary.total)?;
                if summary.panel_visible {
                    for entry in &summary.entries {
                        writeln!(out, "  {entry}")?;
                    }
                }
            }
        }
    }

    out.flush()
}
