//! Grid layout calculation
//!
//! This module turns a `GridSpec` into concrete cell rectangles and converts between
//! flat slot indices and grid positions.

use crate::types::{FlashcardError, Result};

use super::{GridPosition, GridSpec, Rect};

// =============================================================================
// Validation
// =============================================================================

impl GridSpec {
    /// Check the geometry invariants before any layout is attempted.
    ///
    /// Rejects empty grids, negative or non-finite margins and margins that leave no
    /// content area.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(FlashcardError::Config(format!(
                "Grid must have at least one row and column (got {}x{})",
                self.rows, self.cols
            )));
        }

        if !self.page_width_mm.is_finite()
            || !self.page_height_mm.is_finite()
            || !self.margin_mm.is_finite()
        {
            return Err(FlashcardError::Config(
                "Page size and margin must be finite numbers".to_string(),
            ));
        }

        if self.margin_mm < 0.0 {
            return Err(FlashcardError::Config(format!(
                "Margin must not be negative (got {} mm)",
                self.margin_mm
            )));
        }

        if self.content_width_mm() <= 0.0 || self.content_height_mm() <= 0.0 {
            return Err(FlashcardError::Config(format!(
                "Margin of {} mm leaves no content area on a {} x {} mm page",
                self.margin_mm, self.page_width_mm, self.page_height_mm
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Cell Calculations
// =============================================================================

/// Calculate the bounds of the cell at `row`, `col`.
///
/// # Panics
/// If the position lies outside the grid.
pub fn cell_rect(row: usize, col: usize, grid: &GridSpec) -> Rect {
    assert!(
        row < grid.rows && col < grid.cols,
        "cell ({row}, {col}) outside {}x{} grid",
        grid.rows,
        grid.cols
    );

    let cell_width = grid.cell_width_mm();
    let cell_height = grid.cell_height_mm();

    Rect::new(
        grid.margin_mm + col as f32 * cell_width,
        grid.margin_mm + row as f32 * cell_height,
        cell_width,
        cell_height,
    )
}

/// Grid position of a row-major slot index
pub fn slot_position(index: usize, grid: &GridSpec) -> GridPosition {
    assert!(
        index < grid.cells_per_page(),
        "slot {index} outside {}x{} grid",
        grid.rows,
        grid.cols
    );
    GridPosition::new(index / grid.cols, index % grid.cols)
}

/// Row-major slot index of a grid position
pub fn slot_index(pos: GridPosition, grid: &GridSpec) -> usize {
    assert!(
        pos.row < grid.rows && pos.col < grid.cols,
        "cell ({}, {}) outside {}x{} grid",
        pos.row,
        pos.col,
        grid.rows,
        grid.cols
    );
    pos.row * grid.cols + pos.col
}

/// All cells of the grid in row-major order
pub fn grid_cells(grid: &GridSpec) -> impl Iterator<Item = (GridPosition, Rect)> + '_ {
    (0..grid.rows).flat_map(move |row| {
        (0..grid.cols).map(move |col| (GridPosition::new(row, col), cell_rect(row, col, grid)))
    })
}

// =============================================================================
// Tests
// =============================================================================
