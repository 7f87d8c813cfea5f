//! Two-column spreadsheet input
//!
//! Column A is the term, column B the definition. The first row is taken to be a
//! header and skipped, unless it is the only row. Rows with both columns empty are
//! dropped; a cell holding only spaces still counts as content.

use crate::types::{Flashcard, FlashcardError, Result};
use log::{debug, info};
use std::io::Read;
use std::path::Path;

pub async fn load_from_csv(path: impl AsRef<Path>) -> Result<Vec<Flashcard>> {
    let path = path.as_ref().to_owned();

    let contents = tokio::fs::read(&path).await?;

    let cards = tokio::task::spawn_blocking(move || parse_cards(contents.as_slice())).await??;
    info!("Loaded {} flashcards from {}", cards.len(), path.display());

    Ok(cards)
}

/// Parse cards from CSV data.
///
/// Card ids are `card-{row}` with `row` the 0-based row index in the source, so they
/// are unique within one input.
pub fn parse_cards(reader: impl Read) -> Result<Vec<Flashcard>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let rows = reader
        .records()
        .collect::<std::result::Result<Vec<_>, csv::Error>>()?;
    let start_row = if rows.len() > 1 { 1 } else { 0 };

    let mut cards = Vec::new();
    for (index, record) in rows.iter().enumerate().skip(start_row) {
        let front = record.get(0).unwrap_or_default();
        let back = record.get(1).unwrap_or_default();

        if front.is_empty() && back.is_empty() {
            debug!("Skipping empty row {}", index);
            continue;
        }

        cards.push(Flashcard::new(format!("card-{index}"), front, back));
    }

    Ok(cards)
}

/// Parse cards and reject input that yields none
pub fn parse_nonempty_cards(reader: impl Read) -> Result<Vec<Flashcard>> {
    let cards = parse_cards(reader)?;
    if cards.is_empty() {
        return Err(FlashcardError::NoCards);
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_row_skipped() {
        let data = "Term,Definition\nCell,Basic unit of life\nAtom,Smallest unit of matter\n";
        let cards = parse_cards(data.as_bytes()).unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, "card-1");
        assert_eq!(cards[0].front, "Cell");
        assert_eq!(cards[0].back, "Basic unit of life");
        assert_eq!(cards[1].id, "card-2");
    }

    #[test]
    fn test_single_row_kept() {
        let cards = parse_cards("Cell,Basic unit of life\n".as_bytes()).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, "card-0");
    }

    #[test]
    fn test_empty_rows_dropped() {
        let data = "Term,Definition\n,\nCell,\n\"\",\n,Orphan definition\n";
        let cards = parse_cards(data.as_bytes()).unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].front, "Cell");
        assert_eq!(cards[0].back, "");
        assert_eq!(cards[1].front, "");
        assert_eq!(cards[1].back, "Orphan definition");
        assert_eq!(cards[1].id, "card-4");
    }

    #[test]
    fn test_whitespace_row_kept() {
        let data = "Term,Definition\n , \nCell,Unit\n";
        let cards = parse_cards(data.as_bytes()).unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, "card-1");
        assert_eq!(cards[0].front, " ");
        assert_eq!(cards[0].back, " ");
    }

    #[test]
    fn test_short_and_long_rows() {
        let data = "Term,Definition\nLonely\nA,B,extra column\n";
        let cards = parse_cards(data.as_bytes()).unwrap();

        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].back, "");
        assert_eq!(cards[1].back, "B");
    }

    #[test]
    fn test_quoted_fields() {
        let data = "Term,Definition\n\"Osmosis\",\"Diffusion of water, through a membrane\"\n";
        let cards = parse_cards(data.as_bytes()).unwrap();
        assert_eq!(cards[0].back, "Diffusion of water, through a membrane");
    }

    #[test]
    fn test_nonempty_rejects_header_only() {
        let result = parse_nonempty_cards("Term,Definition\n,\n".as_bytes());
        assert!(matches!(result, Err(FlashcardError::NoCards)));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "Term,Definition\nCell,Unit\n").unwrap();

        let cards = load_from_csv(file.path()).await.unwrap();
        assert_eq!(cards.len(), 1);
    }
}
