//! Layout data types
//!
//! All coordinates are millimetres with the origin at the top-left corner of the page
//! and y growing downward. Conversion to PDF space happens in the sink.

use crate::constants::{
    A4_LANDSCAPE_HEIGHT_MM, A4_LANDSCAPE_WIDTH_MM, DEFAULT_COLUMNS, DEFAULT_MARGIN_MM,
    DEFAULT_ROWS,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Grid of cards on a single page
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridSpec {
    /// Number of card rows per page
    pub rows: usize,
    /// Number of card columns per page
    pub cols: usize,
    /// Page width in mm
    pub page_width_mm: f32,
    /// Page height in mm
    pub page_height_mm: f32,
    /// Uniform margin around the grid in mm
    pub margin_mm: f32,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLUMNS,
            page_width_mm: A4_LANDSCAPE_WIDTH_MM,
            page_height_mm: A4_LANDSCAPE_HEIGHT_MM,
            margin_mm: DEFAULT_MARGIN_MM,
        }
    }
}

impl GridSpec {
    /// Number of cards that fit on one page
    pub fn cells_per_page(&self) -> usize {
        self.rows * self.cols
    }

    pub fn content_width_mm(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }

    pub fn content_height_mm(&self) -> f32 {
        self.page_height_mm - 2.0 * self.margin_mm
    }

    pub fn cell_width_mm(&self) -> f32 {
        self.content_width_mm() / self.cols as f32
    }

    pub fn cell_height_mm(&self) -> f32 {
        self.content_height_mm() / self.rows as f32
    }
}

/// Position within the grid (row, column)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    /// Row index (0 = top row)
    pub row: usize,
    /// Column index (0 = leftmost column)
    pub col: usize,
}

impl GridPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// A rectangular area in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (top edge)
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge x coordinate
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge y coordinate
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Shrink the rectangle by `amount` on every side
    pub fn inset(&self, amount: f32) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            self.width - 2.0 * amount,
            self.height - 2.0 * amount,
        )
    }
}

/// Corner of a rectangle, used to place decorations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// The corner point of `rect`
    pub fn point_of(self, rect: &Rect) -> (f32, f32) {
        match self {
            Corner::TopLeft => (rect.x, rect.y),
            Corner::TopRight => (rect.right(), rect.y),
            Corner::BottomLeft => (rect.x, rect.bottom()),
            Corner::BottomRight => (rect.right(), rect.bottom()),
        }
    }
}
