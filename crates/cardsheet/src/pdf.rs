use crate::compose::compose;
use crate::options::FlashcardOptions;
use crate::sink::PdfSink;
use crate::types::{Flashcard, FlashcardError, Result};
use log::info;
use std::path::Path;

/// Title embedded in generated documents
pub const DOCUMENT_TITLE: &str = "Flashcards";

/// Render `cards` to a duplex flashcard PDF at `output_path`.
pub async fn generate_pdf(
    cards: &[Flashcard],
    options: &FlashcardOptions,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let cards = cards.to_vec();
    let options = options.clone();
    let output_path = output_path.as_ref().to_owned();

    let bytes = tokio::task::spawn_blocking(move || generate_pdf_bytes(&cards, &options)).await??;

    tokio::fs::write(&output_path, &bytes).await?;
    info!("Wrote {} bytes to {}", bytes.len(), output_path.display());

    Ok(())
}

/// Render `cards` to PDF bytes.
///
/// An empty deck is refused rather than producing a document without pages.
pub fn generate_pdf_bytes(cards: &[Flashcard], options: &FlashcardOptions) -> Result<Vec<u8>> {
    if cards.is_empty() {
        return Err(FlashcardError::NoCards);
    }
    compose(cards, options, PdfSink::new(DOCUMENT_TITLE))
}
