//! Glyph metrics for the built-in PDF fonts
//!
//! Widths are read from the font programs printpdf ships for its standard faces, the
//! same programs [`crate::sink::PdfSink`] embeds, so text is measured with the glyphs
//! that end up on the page.

use std::collections::HashMap;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

use log::{debug, error};
use printpdf::{BuiltinFont, ParsedFont};

use crate::constants::pt_to_mm;
use crate::types::{FlashcardError, FontFamily, Result};

/// Blocks covering the Windows-1252 repertoire of the built-in font programs
const MEASURED_RANGES: [RangeInclusive<u32>; 2] = [0x20..=0x2FF, 0x2000..=0x22FF];

/// Horizontal advances of one face, in font units
#[derive(Debug, Clone)]
pub struct GlyphWidths {
    units_per_em: u16,
    advances: HashMap<char, u16>,
    /// Advance of `.notdef`, drawn for unmapped characters
    missing: u16,
}

impl GlyphWidths {
    pub fn from_font(font: &ParsedFont) -> Self {
        let advances = MEASURED_RANGES
            .iter()
            .cloned()
            .flatten()
            .filter_map(char::from_u32)
            .filter_map(|ch| {
                let glyph = font.lookup_glyph_index(ch as u32)?;
                Some((ch, font.get_horizontal_advance(glyph)))
            })
            .collect();

        Self {
            units_per_em: font.font_metrics.units_per_em.max(1),
            advances,
            missing: font.get_horizontal_advance(0),
        }
    }

    /// Half an em for every character
    fn flat() -> Self {
        Self {
            units_per_em: 1000,
            advances: HashMap::new(),
            missing: 500,
        }
    }

    /// Advance width of `ch` in 1/1000 em
    pub fn char_width(&self, ch: char) -> f32 {
        let advance = self.advances.get(&ch).copied().unwrap_or(self.missing);
        f32::from(advance) * 1000.0 / f32::from(self.units_per_em)
    }

    /// Width of `text` set at `size_pt`, in millimetres
    pub fn text_width_mm(&self, text: &str, size_pt: f32) -> f32 {
        let units: f32 = text.chars().map(|ch| self.char_width(ch)).sum();
        pt_to_mm(units / 1000.0 * size_pt)
    }

    pub fn has_glyph(&self, ch: char) -> bool {
        self.advances.contains_key(&ch)
    }
}

impl FontFamily {
    pub fn builtin(self) -> BuiltinFont {
        match self {
            FontFamily::Helvetica => BuiltinFont::Helvetica,
            FontFamily::TimesRoman => BuiltinFont::TimesRoman,
        }
    }

    /// Parse the font program printpdf bundles for this family
    pub fn parsed_font(self) -> Result<ParsedFont> {
        let bytes = self.builtin().get_subset_font().bytes;
        let mut warnings = Vec::new();
        ParsedFont::from_bytes(&bytes, 0, &mut warnings)
            .ok_or_else(|| FlashcardError::Pdf(format!("Failed to parse font {:?}", self)))
    }

    /// Widths of this family, parsed once per process
    pub fn glyph_widths(self) -> &'static GlyphWidths {
        static HELVETICA: OnceLock<GlyphWidths> = OnceLock::new();
        static TIMES_ROMAN: OnceLock<GlyphWidths> = OnceLock::new();

        let cell = match self {
            FontFamily::Helvetica => &HELVETICA,
            FontFamily::TimesRoman => &TIMES_ROMAN,
        };
        cell.get_or_init(|| match self.parsed_font() {
            Ok(font) => {
                let widths = GlyphWidths::from_font(&font);
                debug!("Measured {} glyphs of {:?}", widths.advances.len(), self);
                widths
            }
            Err(e) => {
                error!("{e}, measuring with a flat width");
                GlyphWidths::flat()
            }
        })
    }

    /// Advance width of `ch` in 1/1000 em
    pub fn char_width(self, ch: char) -> f32 {
        self.glyph_widths().char_width(ch)
    }

    /// Width of `text` set at `size_pt`, in millimetres
    pub fn text_width_mm(self, text: &str, size_pt: f32) -> f32 {
        self.glyph_widths().text_width_mm(text, size_pt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_width(family: FontFamily, ch: char, expected: f32) {
        let width = family.char_width(ch);
        assert!(
            (width - expected).abs() < 1.0,
            "{family:?} '{ch}' measured {width}, expected {expected}"
        );
    }

    #[test]
    fn test_known_widths() {
        assert_width(FontFamily::Helvetica, ' ', 278.0);
        assert_width(FontFamily::Helvetica, 'W', 944.0);
        assert_width(FontFamily::Helvetica, 'i', 222.0);
        assert_width(FontFamily::TimesRoman, 'm', 778.0);
        assert_width(FontFamily::TimesRoman, 'e', 444.0);
    }

    #[test]
    fn test_latin1_letters_have_glyphs() {
        for family in [FontFamily::Helvetica, FontFamily::TimesRoman] {
            let widths = family.glyph_widths();
            for ch in ['é', 'ü', 'Ö', 'ß', 'ç', 'ñ'] {
                assert!(widths.has_glyph(ch), "{family:?} has no glyph for '{ch}'");
            }
        }
        assert_width(FontFamily::Helvetica, 'é', 556.0);
    }

    #[test]
    fn test_proportional_measurement() {
        let narrow = FontFamily::Helvetica.text_width_mm("iiii", 12.0);
        let wide = FontFamily::Helvetica.text_width_mm("WWWW", 12.0);
        assert!(wide > narrow * 4.0);

        // 1000 units at 72pt is one inch
        let size = 72.0 * 1000.0 / FontFamily::Helvetica.char_width('M');
        let width = FontFamily::Helvetica.text_width_mm("M", size);
        assert!((width - 25.4).abs() < 0.01);
    }

    #[test]
    fn test_width_is_sum_of_glyphs() {
        let word = FontFamily::TimesRoman.text_width_mm("café", 10.0);
        let glyphs: f32 = "café"
            .chars()
            .map(|ch| FontFamily::TimesRoman.text_width_mm(ch.encode_utf8(&mut [0; 4]), 10.0))
            .sum();
        assert!((word - glyphs).abs() < 1e-4);
    }

    #[test]
    fn test_empty_text_has_no_width() {
        assert_eq!(FontFamily::TimesRoman.text_width_mm("", 14.0), 0.0);
    }
}
