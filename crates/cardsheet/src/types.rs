use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("PDF error: {0}")]
    Pdf(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("No flashcards to lay out")]
    NoCards,
}

pub type Result<T> = std::result::Result<T, FlashcardError>;

/// A single term/definition pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    /// Unique within one generation run (e.g. `card-3` for spreadsheet row 3)
    pub id: String,
    /// Printed on the front page
    pub front: String,
    /// Printed on the back page, behind the front
    pub back: String,
}

impl Flashcard {
    pub fn new(id: impl Into<String>, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            front: front.into(),
            back: back.into(),
        }
    }

    /// Text shown on the given side of the card
    pub fn text(&self, side: CardSide) -> &str {
        match side {
            CardSide::Front => &self.front,
            CardSide::Back => &self.back,
        }
    }
}

/// One cell position on a page. `None` is an empty cell.
pub type Slot<'a> = Option<&'a Flashcard>;

/// Which physical side of the printed sheet a page is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardSide {
    /// Terms, printed first in duplex
    Front,
    /// Definitions, printed on the reverse
    Back,
}

/// How back-page cells are permuted so they line up with the fronts after a duplex flip.
///
/// The names describe the mirror line, not the flip edge: `Horizontal` reverses the
/// columns of each row and `Vertical` reverses the order of the rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MirrorAxis {
    /// Back page uses the same arrangement as the front
    None,
    /// Reverse columns (duplex flip on the short edge of a landscape sheet)
    #[default]
    Horizontal,
    /// Reverse rows (duplex flip on the long edge of a landscape sheet)
    Vertical,
}

impl MirrorAxis {
    /// Printer duplex setting this axis is meant for
    pub fn duplex_edge(self) -> &'static str {
        match self {
            MirrorAxis::None => "no mirroring",
            MirrorAxis::Horizontal => "flip on short edge",
            MirrorAxis::Vertical => "flip on long edge",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MirrorAxis::None => "None",
            MirrorAxis::Horizontal => "Horizontal",
            MirrorAxis::Vertical => "Vertical",
        }
    }
}

/// Built-in PDF font families that cards can be rendered with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFamily {
    Helvetica,
    TimesRoman,
}

/// Display fonts offered to the user.
///
/// Each choice maps onto one of the built-in PDF families; serif faces render in Times,
/// everything else in Helvetica.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FontChoice {
    #[default]
    Inter,
    Roboto,
    OpenSans,
    Montserrat,
    PlayfairDisplay,
    Merriweather,
}

impl FontChoice {
    pub const ALL: [FontChoice; 6] = [
        FontChoice::Inter,
        FontChoice::Roboto,
        FontChoice::OpenSans,
        FontChoice::Montserrat,
        FontChoice::PlayfairDisplay,
        FontChoice::Merriweather,
    ];

    pub fn family(self) -> FontFamily {
        match self {
            FontChoice::Inter
            | FontChoice::Roboto
            | FontChoice::OpenSans
            | FontChoice::Montserrat => FontFamily::Helvetica,
            FontChoice::PlayfairDisplay | FontChoice::Merriweather => FontFamily::TimesRoman,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FontChoice::Inter => "Inter",
            FontChoice::Roboto => "Roboto",
            FontChoice::OpenSans => "Open Sans",
            FontChoice::Montserrat => "Montserrat",
            FontChoice::PlayfairDisplay => "Playfair Display",
            FontChoice::Merriweather => "Merriweather",
        }
    }
}

/// An RGB colour with 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_choice_families() {
        assert_eq!(FontChoice::Inter.family(), FontFamily::Helvetica);
        assert_eq!(FontChoice::OpenSans.family(), FontFamily::Helvetica);
        assert_eq!(FontChoice::PlayfairDisplay.family(), FontFamily::TimesRoman);
        assert_eq!(FontChoice::Merriweather.family(), FontFamily::TimesRoman);
    }

    #[test]
    fn test_card_text_by_side() {
        let card = Flashcard::new("card-1", "term", "definition");
        assert_eq!(card.text(CardSide::Front), "term");
        assert_eq!(card.text(CardSide::Back), "definition");
    }

    #[test]
    fn test_default_axis_is_short_edge() {
        assert_eq!(MirrorAxis::default(), MirrorAxis::Horizontal);
        assert_eq!(MirrorAxis::default().duplex_edge(), "flip on short edge");
    }
}
