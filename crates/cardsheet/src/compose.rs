//! Page composition
//!
//! Every sheet becomes two output pages: the fronts in reading order, followed by the
//! backs in mirrored order so that each definition is printed behind its term.
//!
//! Front pages frame every cell, including empty ones at the end of the deck.
//! Back pages skip empty cells entirely.

use log::{debug, info};

use crate::constants::{
    ACCENT_RADIUS_MM, BACK_ACCENT, BACK_FILL, CUT_LINE_COLOR, CUT_LINE_DASH_MM,
    CUT_LINE_WIDTH_MM, FRONT_ACCENT, FRONT_FILL, TEXT_COLOR, TEXT_PADDING_MM,
};
use crate::layout::{Corner, GridSpec, Rect, cell_rect, paginate, slot_position};
use crate::options::FlashcardOptions;
use crate::sink::{DashStyle, DocumentSink, TextBlock};
use crate::text::TextFitter;
use crate::types::*;

/// Cosmetic styling of one side of a card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardDecoration {
    pub background: Color,
    pub accent: Color,
    pub accent_corner: Corner,
}

impl CardSide {
    /// Fronts get a cool tint with the accent top-right, backs a green tint top-left
    pub fn decoration(self) -> CardDecoration {
        match self {
            CardSide::Front => CardDecoration {
                background: FRONT_FILL,
                accent: FRONT_ACCENT,
                accent_corner: Corner::TopRight,
            },
            CardSide::Back => CardDecoration {
                background: BACK_FILL,
                accent: BACK_ACCENT,
                accent_corner: Corner::TopLeft,
            },
        }
    }
}

/// Lay out `cards` on duplex sheets and draw them into `sink`.
///
/// Output page order is `[sheet 0 front, sheet 0 back, sheet 1 front, ...]`.
/// No cards produce no pages.
pub fn compose<S: DocumentSink>(
    cards: &[Flashcard],
    options: &FlashcardOptions,
    mut sink: S,
) -> Result<S::Output> {
    options.validate()?;

    let grid = &options.grid;
    let painter = CardPainter {
        options,
        fitter: TextFitter::default(),
        family: options.font_family(),
    };

    let pages = paginate(cards, grid);
    info!(
        "Composing {} cards on {} sheets ({:?} mirror, {})",
        cards.len(),
        pages.len(),
        options.axis,
        options.font.name()
    );

    for page in &pages {
        debug!(
            "Sheet {}: cards {}..{}",
            page.page_index,
            page.first_card,
            page.first_card + page.card_count()
        );

        sink.begin_page(grid.page_width_mm, grid.page_height_mm)?;
        for (index, slot) in page.front.iter().enumerate() {
            let cell = slot_cell(index, grid);
            let text = slot.map(|card| card.text(CardSide::Front));
            painter.draw_card(&mut sink, &cell, text, CardSide::Front)?;
        }

        sink.begin_page(grid.page_width_mm, grid.page_height_mm)?;
        for (index, slot) in page.back(options.axis, grid).iter().enumerate() {
            let Some(card) = slot else { continue };
            let cell = slot_cell(index, grid);
            let text = Some(card.text(CardSide::Back));
            painter.draw_card(&mut sink, &cell, text, CardSide::Back)?;
        }
    }

    sink.finish()
}

fn slot_cell(index: usize, grid: &GridSpec) -> Rect {
    let pos = slot_position(index, grid);
    cell_rect(pos.row, pos.col, grid)
}

struct CardPainter<'a> {
    options: &'a FlashcardOptions,
    fitter: TextFitter,
    family: FontFamily,
}

impl CardPainter<'_> {
    /// Background, accent, optional cut guide, then fitted text
    fn draw_card<S: DocumentSink>(
        &self,
        sink: &mut S,
        cell: &Rect,
        text: Option<&str>,
        side: CardSide,
    ) -> Result<()> {
        let decoration = side.decoration();

        sink.fill_rect(cell, decoration.background)?;
        sink.fill_quarter_circle(
            cell,
            decoration.accent_corner,
            ACCENT_RADIUS_MM,
            decoration.accent,
        )?;

        // Drawn after the fills so it stays visible
        if self.options.show_cut_lines {
            sink.stroke_dashed_rect(
                cell,
                &DashStyle {
                    color: CUT_LINE_COLOR,
                    line_width_mm: CUT_LINE_WIDTH_MM,
                    dash_mm: CUT_LINE_DASH_MM,
                },
            )?;
        }

        match text {
            Some(text) if !text.trim().is_empty() => {
                let block = self.layout_text(text, cell);
                sink.draw_text(&block)
            }
            _ => Ok(()),
        }
    }

    fn layout_text(&self, text: &str, cell: &Rect) -> TextBlock {
        let text_box = cell.inset(TEXT_PADDING_MM);
        let fit = self
            .fitter
            .fit(text, text_box.width, text_box.height, self.family);

        TextBlock {
            center_x_mm: cell.center_x(),
            first_baseline_mm: fit.first_baseline_mm(cell),
            line_height_mm: fit.line_height_mm(),
            size_pt: fit.font_size_pt,
            family: self.family,
            color: TEXT_COLOR,
            lines: fit.lines,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
