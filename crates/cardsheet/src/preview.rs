//! Sheet preview
//!
//! Builds the same front/back arrangement the composer draws, as plain data, so a
//! front end can show which definition ends up behind which term before printing.

use crate::layout::{GridSpec, Rect, cell_rect, mirrored_slots, paginate, slot_position};
use crate::options::FlashcardOptions;
use crate::types::{Flashcard, Result};

/// One occupied cell of a previewed page
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewCell<'a> {
    /// 1-based position of the card in the deck
    pub card_number: usize,
    pub card: &'a Flashcard,
    pub rect: Rect,
}

/// Both sides of one sheet
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewPage<'a> {
    pub page_index: usize,
    pub page_count: usize,
    /// Row-major, one entry per cell
    pub front: Vec<Option<PreviewCell<'a>>>,
    /// Row-major, already mirrored
    pub back: Vec<Option<PreviewCell<'a>>>,
}

/// Preview sheet `page_index` of `cards`, or `None` if the deck has no such sheet.
///
/// Invalid options are rejected before any layout is attempted.
pub fn preview_page<'a>(
    cards: &'a [Flashcard],
    options: &FlashcardOptions,
    page_index: usize,
) -> Result<Option<PreviewPage<'a>>> {
    options.validate()?;

    let grid = &options.grid;
    let pages = paginate(cards, grid);
    let page_count = pages.len();
    let Some(page) = pages.into_iter().nth(page_index) else {
        return Ok(None);
    };

    let numbered: Vec<Option<(usize, &'a Flashcard)>> = page
        .front
        .iter()
        .enumerate()
        .map(|(index, slot)| slot.map(|card| (page.first_card + index + 1, card)))
        .collect();
    let mirrored = mirrored_slots(&numbered, options.axis, grid);

    Ok(Some(PreviewPage {
        page_index,
        page_count,
        front: place(&numbered, grid),
        back: place(&mirrored, grid),
    }))
}

fn place<'a>(
    slots: &[Option<(usize, &'a Flashcard)>],
    grid: &GridSpec,
) -> Vec<Option<PreviewCell<'a>>> {
    slots
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            slot.map(|(card_number, card)| {
                let pos = slot_position(index, grid);
                PreviewCell {
                    card_number,
                    card,
                    rect: cell_rect(pos.row, pos.col, grid),
                }
            })
        })
        .collect()
}
