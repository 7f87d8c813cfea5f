use crate::layout::{GridSpec, page_count};
use crate::types::Result;

/// Counts describing a finished layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutSummary {
    /// Cards in the deck
    pub cards: usize,
    /// Cards per sheet side
    pub cells_per_page: usize,
    /// Physical sheets (front/back pairs)
    pub sheets: usize,
    /// Pages in the output document
    pub output_pages: usize,
    /// Unused cells on the last sheet
    pub empty_slots: usize,
}

/// Summarise how `card_count` cards will be laid out on `grid`
pub fn calculate_summary(card_count: usize, grid: &GridSpec) -> Result<LayoutSummary> {
    grid.validate()?;

    let cells_per_page = grid.cells_per_page();
    let sheets = page_count(card_count, grid);

    Ok(LayoutSummary {
        cards: card_count,
        cells_per_page,
        sheets,
        output_pages: sheets * 2,
        empty_slots: sheets * cells_per_page - card_count,
    })
}
