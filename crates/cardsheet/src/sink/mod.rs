//! Drawing back ends
//!
//! The composer never talks to a PDF library directly. It issues a small set of
//! drawing primitives against a [`DocumentSink`]:
//! - `PdfSink` renders them with printpdf
//! - `RecordingSink` keeps them as plain data

mod pdf;
mod recording;

pub use pdf::PdfSink;
pub use recording::{DrawOp, RecordedPage, RecordingSink};

use crate::layout::{Corner, Rect};
use crate::types::{Color, FontFamily, Result};

/// A block of pre-wrapped lines, each centered on `center_x_mm`
#[derive(Debug, Clone, PartialEq)]
pub struct TextBlock {
    pub lines: Vec<String>,
    pub family: FontFamily,
    pub size_pt: f32,
    pub color: Color,
    /// Horizontal anchor of every line (mm from the left page edge)
    pub center_x_mm: f32,
    /// Baseline of the first line (mm from the top page edge)
    pub first_baseline_mm: f32,
    /// Baseline-to-baseline distance (mm)
    pub line_height_mm: f32,
}

impl TextBlock {
    /// Baseline of each line, top to bottom
    pub fn baselines(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.lines.len()).map(|i| self.first_baseline_mm + i as f32 * self.line_height_mm)
    }
}

/// Stroke style of a dashed outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashStyle {
    pub color: Color,
    pub line_width_mm: f32,
    /// Length of each dash and of each gap (mm)
    pub dash_mm: f32,
}

/// A multi-page vector document that cards are drawn into.
///
/// Coordinates are millimetres from the top-left corner of the current page.
/// Drawing before the first `begin_page` is an error.
pub trait DocumentSink {
    /// What `finish` hands back (bytes, recorded pages, ...)
    type Output;

    /// Start a new page; subsequent drawing goes to it
    fn begin_page(&mut self, width_mm: f32, height_mm: f32) -> Result<()>;

    fn fill_rect(&mut self, rect: &Rect, color: Color) -> Result<()>;

    /// Fill the quarter of a circle centered on `corner` of `cell` that lies inside the cell
    fn fill_quarter_circle(
        &mut self,
        cell: &Rect,
        corner: Corner,
        radius_mm: f32,
        color: Color,
    ) -> Result<()>;

    fn stroke_dashed_rect(&mut self, rect: &Rect, style: &DashStyle) -> Result<()>;

    fn draw_text(&mut self, block: &TextBlock) -> Result<()>;

    /// Close the document
    fn finish(self) -> Result<Self::Output>;
}
