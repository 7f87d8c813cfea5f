use cardsheet::layout::{GridSpec, Rect, cell_rect};
use cardsheet::sink::{RecordedPage, RecordingSink, TextBlock};
use cardsheet::*;

fn deck(n: usize) -> Vec<Flashcard> {
    (0..n)
        .map(|i| Flashcard::new(format!("card-{i}"), format!("Term {i}"), format!("Def {i}")))
        .collect()
}

fn compose_recorded(cards: &[Flashcard], options: &FlashcardOptions) -> Vec<RecordedPage> {
    compose(cards, options, RecordingSink::new()).unwrap()
}

fn in_cell(block: &TextBlock, cell: &Rect) -> bool {
    (block.center_x_mm - cell.center_x()).abs() < 1e-3
        && block.first_baseline_mm > cell.y
        && block.first_baseline_mm < cell.bottom()
}

/// Text drawn in the cell at (row, col), if any
fn text_at(page: &RecordedPage, row: usize, col: usize, grid: &GridSpec) -> Option<String> {
    let cell = cell_rect(row, col, grid);
    page.texts()
        .find(|block| in_cell(block, &cell))
        .map(|block| block.lines.join(" "))
}

fn options_with(axis: MirrorAxis) -> FlashcardOptions {
    FlashcardOptions {
        axis,
        ..Default::default()
    }
}

#[test]
fn test_zero_cards_zero_pages() {
    let pages = compose_recorded(&[], &FlashcardOptions::default());
    assert!(pages.is_empty());
}

#[test]
fn test_short_deck_single_sheet() {
    let pages = compose_recorded(&deck(4), &FlashcardOptions::default());
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].width_mm, 297.0);
    assert_eq!(pages[0].height_mm, 210.0);

    // Front frames every cell, back only the occupied ones
    assert_eq!(pages[0].fills().count(), 9);
    assert_eq!(pages[0].texts().count(), 4);
    assert_eq!(pages[1].fills().count(), 4);
    assert_eq!(pages[1].texts().count(), 4);
}

#[test]
fn test_page_order_front_then_back() {
    let pages = compose_recorded(&deck(19), &FlashcardOptions::default());
    assert_eq!(pages.len(), 6);

    let front_fill = CardSide::Front.decoration().background;
    let back_fill = CardSide::Back.decoration().background;
    for (index, page) in pages.iter().enumerate() {
        let expected = if index % 2 == 0 { front_fill } else { back_fill };
        assert!(page.fills().all(|(_, color)| color == expected), "page {index}");
    }
}

#[test]
fn test_ten_cards_horizontal_mirror() {
    let options = options_with(MirrorAxis::Horizontal);
    let grid = options.grid;
    let pages = compose_recorded(&deck(10), &options);
    assert_eq!(pages.len(), 4);

    // Sheet 0 front: cards 0-8 in row-major order
    for index in 0..9 {
        let (row, col) = (index / 3, index % 3);
        assert_eq!(
            text_at(&pages[0], row, col, &grid),
            Some(format!("Term {index}"))
        );
    }

    // Sheet 0 back: columns reversed within each row
    assert_eq!(text_at(&pages[1], 0, 0, &grid), Some("Def 2".to_string()));
    assert_eq!(text_at(&pages[1], 0, 1, &grid), Some("Def 1".to_string()));
    assert_eq!(text_at(&pages[1], 0, 2, &grid), Some("Def 0".to_string()));
    assert_eq!(text_at(&pages[1], 2, 0, &grid), Some("Def 8".to_string()));

    // Sheet 1: a lone card in slot 0 lands in column 2 on the back
    assert_eq!(pages[2].texts().count(), 1);
    assert_eq!(text_at(&pages[2], 0, 0, &grid), Some("Term 9".to_string()));
    assert_eq!(pages[3].texts().count(), 1);
    assert_eq!(pages[3].fills().count(), 1);
    assert_eq!(text_at(&pages[3], 0, 2, &grid), Some("Def 9".to_string()));
}

#[test]
fn test_nine_cards_vertical_mirror() {
    let options = options_with(MirrorAxis::Vertical);
    let grid = options.grid;
    let pages = compose_recorded(&deck(9), &options);
    assert_eq!(pages.len(), 2);

    for col in 0..3 {
        assert_eq!(
            text_at(&pages[1], 0, col, &grid),
            Some(format!("Def {}", 6 + col))
        );
        assert_eq!(
            text_at(&pages[1], 1, col, &grid),
            Some(format!("Def {}", 3 + col))
        );
        assert_eq!(
            text_at(&pages[1], 2, col, &grid),
            Some(format!("Def {col}"))
        );
    }
}

#[test]
fn test_no_mirror_keeps_positions() {
    let options = options_with(MirrorAxis::None);
    let grid = options.grid;
    let pages = compose_recorded(&deck(5), &options);

    for index in 0..5 {
        let (row, col) = (index / 3, index % 3);
        assert_eq!(
            text_at(&pages[1], row, col, &grid),
            Some(format!("Def {index}"))
        );
    }
}

#[test]
fn test_empty_slots_never_get_back_text() {
    for axis in [MirrorAxis::None, MirrorAxis::Horizontal, MirrorAxis::Vertical] {
        let pages = compose_recorded(&deck(11), &options_with(axis));
        // Sheet 1 holds two cards
        assert_eq!(pages[3].texts().count(), 2, "{axis:?}");
        assert_eq!(pages[3].fills().count(), 2, "{axis:?}");
    }
}

#[test]
fn test_cut_lines_only_toggle_outlines() {
    let cards = deck(12);
    let with_lines = compose_recorded(&cards, &FlashcardOptions::default());
    let without_lines = compose_recorded(
        &cards,
        &FlashcardOptions {
            show_cut_lines: false,
            ..Default::default()
        },
    );

    assert_eq!(with_lines.len(), without_lines.len());
    for (a, b) in with_lines.iter().zip(&without_lines) {
        assert_eq!(b.outlines().count(), 0);
        assert_eq!(a.outlines().count(), a.fills().count());

        // Identical geometry and text otherwise
        let fills_a: Vec<_> = a.fills().collect();
        let fills_b: Vec<_> = b.fills().collect();
        assert_eq!(fills_a, fills_b);
        let texts_a: Vec<_> = a.texts().collect();
        let texts_b: Vec<_> = b.texts().collect();
        assert_eq!(texts_a, texts_b);
    }

    // Outlines match the cell bounds exactly
    let grid = GridSpec::default();
    let outlines: Vec<_> = with_lines[0].outlines().copied().collect();
    assert_eq!(outlines[4], cell_rect(1, 1, &grid));
}

#[test]
fn test_long_definition_shrinks_font() {
    let long = "A very long definition that keeps going and going, far beyond what a \
                single line could ever hold at the largest size on the scale. "
        .repeat(3);
    let cards = vec![Flashcard::new("card-1", "Short", long)];
    let pages = compose_recorded(&cards, &FlashcardOptions::default());

    let front = pages[0].texts().next().unwrap();
    let back = pages[1].texts().next().unwrap();
    assert_eq!(front.size_pt, 14.0);
    assert!(back.size_pt < 14.0);
    assert!(back.size_pt >= 6.0);
    assert!(back.lines.len() > 1);
}

#[test]
fn test_serif_font_choice() {
    let options = FlashcardOptions {
        font: FontChoice::Merriweather,
        ..Default::default()
    };
    let pages = compose_recorded(&deck(1), &options);
    let block = pages[0].texts().next().unwrap();
    assert_eq!(block.family, FontFamily::TimesRoman);
}
