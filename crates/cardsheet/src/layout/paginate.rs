//! Pagination of the card list into fixed-size pages

use crate::types::{Flashcard, MirrorAxis, Slot};

use super::{GridSpec, mirrored_slots};

/// The front slots of one sheet
#[derive(Debug, Clone, PartialEq)]
pub struct PageSlots<'a> {
    /// Sheet index (0-based)
    pub page_index: usize,
    /// Index of the first card on this page within the full card list
    pub first_card: usize,
    /// One entry per grid cell in row-major order, empty cells at the tail
    pub front: Vec<Slot<'a>>,
}

impl<'a> PageSlots<'a> {
    /// Slots for the reverse side of this sheet
    pub fn back(&self, axis: MirrorAxis, grid: &GridSpec) -> Vec<Slot<'a>> {
        mirrored_slots(&self.front, axis, grid)
    }

    /// Number of cards on this page
    pub fn card_count(&self) -> usize {
        self.front.iter().filter(|slot| slot.is_some()).count()
    }
}

/// Number of sheets needed for `card_count` cards
pub fn page_count(card_count: usize, grid: &GridSpec) -> usize {
    card_count.div_ceil(grid.cells_per_page())
}

/// Split `cards` into pages of `rows * cols` slots.
///
/// The last page is padded with empty slots. No cards means no pages.
pub fn paginate<'a>(cards: &'a [Flashcard], grid: &GridSpec) -> Vec<PageSlots<'a>> {
    let per_page = grid.cells_per_page();

    cards
        .chunks(per_page)
        .enumerate()
        .map(|(page_index, chunk)| {
            let mut front: Vec<Slot<'a>> = chunk.iter().map(Some).collect();
            front.resize(per_page, None);
            PageSlots {
                page_index,
                first_card: page_index * per_page,
                front,
            }
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: usize) -> Vec<Flashcard> {
        (0..n)
            .map(|i| Flashcard::new(format!("card-{i}"), format!("term {i}"), format!("def {i}")))
            .collect()
    }

    #[test]
    fn test_page_counts() {
        let grid = GridSpec::default();
        for n in [0, 1, 8, 9, 10, 17, 18, 19, 100] {
            let cards = cards(n);
            let pages = paginate(&cards, &grid);
            assert_eq!(pages.len(), n.div_ceil(9));
            assert_eq!(pages.len(), page_count(n, &grid));

            if let Some(last) = pages.last() {
                let expected = if n % 9 == 0 { 9 } else { n % 9 };
                assert_eq!(last.card_count(), expected, "n = {n}");
                assert_eq!(last.front.len(), 9);
            }
        }
    }

    #[test]
    fn test_no_cards_no_pages() {
        assert!(paginate(&[], &GridSpec::default()).is_empty());
    }

    #[test]
    fn test_pages_keep_card_order() {
        let grid = GridSpec::default();
        let cards = cards(10);
        let pages = paginate(&cards, &grid);

        for (slot, card) in pages[0].front.iter().zip(&cards[0..9]) {
            assert_eq!(slot.map(|c| c.id.as_str()), Some(card.id.as_str()));
        }
        assert_eq!(pages[1].first_card, 9);
        assert_eq!(pages[1].front[0].map(|c| c.id.as_str()), Some("card-9"));
        assert!(pages[1].front[1..].iter().all(Option::is_none));
    }

    #[test]
    fn test_back_is_permutation_of_front() {
        let grid = GridSpec::default();
        let cards = cards(7);
        let page = &paginate(&cards, &grid)[0];

        for axis in [MirrorAxis::None, MirrorAxis::Horizontal, MirrorAxis::Vertical] {
            let back = page.back(axis, &grid);
            let mut front_ids: Vec<_> = page.front.iter().flatten().map(|c| &c.id).collect();
            let mut back_ids: Vec<_> = back.iter().flatten().map(|c| &c.id).collect();
            front_ids.sort();
            back_ids.sort();
            assert_eq!(front_ids, back_ids);
        }
    }
}
