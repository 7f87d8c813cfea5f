use crate::layout::{Corner, Rect};
use crate::types::{Color, FlashcardError, Result};

use super::{DashStyle, DocumentSink, TextBlock};

/// One recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: Rect,
        color: Color,
    },
    FillQuarterCircle {
        cell: Rect,
        corner: Corner,
        radius_mm: f32,
        color: Color,
    },
    StrokeDashedRect {
        rect: Rect,
        style: DashStyle,
    },
    Text(TextBlock),
}

/// A page and everything drawn on it, in call order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordedPage {
    pub width_mm: f32,
    pub height_mm: f32,
    pub ops: Vec<DrawOp>,
}

impl RecordedPage {
    /// All text blocks on the page
    pub fn texts(&self) -> impl Iterator<Item = &TextBlock> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text(block) => Some(block),
            _ => None,
        })
    }

    /// All dashed outlines on the page
    pub fn outlines(&self) -> impl Iterator<Item = &Rect> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::StrokeDashedRect { rect, .. } => Some(rect),
            _ => None,
        })
    }

    /// All background fills on the page
    pub fn fills(&self) -> impl Iterator<Item = (&Rect, Color)> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::FillRect { rect, color } => Some((rect, *color)),
            _ => None,
        })
    }
}

/// A sink that keeps every drawing call as data
#[derive(Debug, Default)]
pub struct RecordingSink {
    pages: Vec<RecordedPage>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, op: DrawOp) -> Result<()> {
        let page = self
            .pages
            .last_mut()
            .ok_or_else(|| FlashcardError::Pdf("Drawing before the first page".to_string()))?;
        page.ops.push(op);
        Ok(())
    }
}

impl DocumentSink for RecordingSink {
    type Output = Vec<RecordedPage>;

    fn begin_page(&mut self, width_mm: f32, height_mm: f32) -> Result<()> {
        self.pages.push(RecordedPage {
            width_mm,
            height_mm,
            ops: Vec::new(),
        });
        Ok(())
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) -> Result<()> {
        self.push(DrawOp::FillRect { rect: *rect, color })
    }

    fn fill_quarter_circle(
        &mut self,
        cell: &Rect,
        corner: Corner,
        radius_mm: f32,
        color: Color,
    ) -> Result<()> {
        self.push(DrawOp::FillQuarterCircle {
            cell: *cell,
            corner,
            radius_mm,
            color,
        })
    }

    fn stroke_dashed_rect(&mut self, rect: &Rect, style: &DashStyle) -> Result<()> {
        self.push(DrawOp::StrokeDashedRect {
            rect: *rect,
            style: *style,
        })
    }

    fn draw_text(&mut self, block: &TextBlock) -> Result<()> {
        self.push(DrawOp::Text(block.clone()))
    }

    fn finish(self) -> Result<Self::Output> {
        Ok(self.pages)
    }
}
