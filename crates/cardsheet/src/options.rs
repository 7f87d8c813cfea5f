use crate::layout::GridSpec;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings for one flashcard sheet run
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlashcardOptions {
    /// How back pages are mirrored for duplex printing
    pub axis: MirrorAxis,
    /// Page size, margin and card grid
    pub grid: GridSpec,
    /// Draw dashed cut guides around every card
    pub show_cut_lines: bool,
    /// Font used for both sides of every card
    pub font: FontChoice,
}

impl Default for FlashcardOptions {
    fn default() -> Self {
        Self {
            axis: MirrorAxis::Horizontal,
            grid: GridSpec::default(),
            show_cut_lines: true,
            font: FontChoice::Inter,
        }
    }
}

impl FlashcardOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| FlashcardError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| FlashcardError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.grid.validate()
    }

    /// PDF font family the selected display font renders with
    pub fn font_family(&self) -> FontFamily {
        self.font.family()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = FlashcardOptions::default();
        assert_eq!(options.axis, MirrorAxis::Horizontal);
        assert_eq!(options.grid.rows, 3);
        assert_eq!(options.grid.cols, 3);
        assert_eq!(options.grid.page_width_mm, 297.0);
        assert_eq!(options.grid.page_height_mm, 210.0);
        assert_eq!(options.grid.margin_mm, 10.0);
        assert!(options.show_cut_lines);
        assert_eq!(options.font_family(), FontFamily::Helvetica);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_invalid_grid_rejected() {
        let mut options = FlashcardOptions::default();
        options.grid.cols = 0;
        assert!(matches!(options.validate(), Err(FlashcardError::Config(_))));
    }
}
