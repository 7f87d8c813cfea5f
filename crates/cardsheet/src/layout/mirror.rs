//! Back-page mirroring
//!
//! When a duplex sheet is turned over, the order of cells along one axis is reversed.
//! The back page therefore has to hold the same slots in mirrored positions so that
//! every definition ends up behind its term once the sheet is cut.
//!
//! **Horizontal (short-edge flip), 3x3:**
//! - Front row: [1, 2, 3]
//! - Back row:  [3, 2, 1]
//!
//! **Vertical (long-edge flip), 3x3:**
//! - Front rows: [1-3], [4-6], [7-9]
//! - Back rows:  [7-9], [4-6], [1-3]

use crate::types::MirrorAxis;

use super::{GridPosition, GridSpec, slot_index, slot_position};

/// Position on the back page that holds the content of the front slot at `pos`.
pub fn mirror_position(pos: GridPosition, axis: MirrorAxis, grid: &GridSpec) -> GridPosition {
    match axis {
        MirrorAxis::None => pos,
        MirrorAxis::Vertical => GridPosition::new(grid.rows - 1 - pos.row, pos.col),
        MirrorAxis::Horizontal => GridPosition::new(pos.row, grid.cols - 1 - pos.col),
    }
}

/// Row-major index version of [`mirror_position`].
pub fn mirror_index(index: usize, axis: MirrorAxis, grid: &GridSpec) -> usize {
    slot_index(mirror_position(slot_position(index, grid), axis, grid), grid)
}

/// Rearrange a page's front slots into back-page order.
///
/// The result is a permutation of `front`: the entry at front index `i` moves to
/// `mirror_index(i)`. Every axis is its own inverse, so applying this twice returns
/// the original arrangement.
///
/// # Panics
/// If `front` does not hold exactly one entry per grid cell.
pub fn mirrored_slots<T: Clone>(front: &[T], axis: MirrorAxis, grid: &GridSpec) -> Vec<T> {
    assert_eq!(
        front.len(),
        grid.cells_per_page(),
        "slot array does not match a {}x{} grid",
        grid.rows,
        grid.cols
    );

    // The mapping is an involution, so back[j] = front[mirror(j)]
    (0..front.len())
        .map(|index| front[mirror_index(index, axis, grid)].clone())
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
