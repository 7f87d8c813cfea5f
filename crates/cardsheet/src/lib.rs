pub mod compose;
pub mod constants;
pub mod layout;
mod options;
mod pdf;
mod preview;
pub mod sink;
mod spreadsheet;
mod stats;
pub mod text;
mod types;

pub use compose::compose;
pub use options::FlashcardOptions;
pub use pdf::{DOCUMENT_TITLE, generate_pdf, generate_pdf_bytes};
pub use preview::{PreviewCell, PreviewPage, preview_page};
pub use spreadsheet::{load_from_csv, parse_cards, parse_nonempty_cards};
pub use stats::{LayoutSummary, calculate_summary};
pub use types::*;
