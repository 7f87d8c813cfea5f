//! Auto-fitting card text into a cell
//!
//! Text is tried at a descending, discrete scale of font sizes. At each size it is
//! word-wrapped with the real glyph widths of the font, and the first size whose
//! wrapped block is no taller than the box wins. If nothing fits the floor size is used
//! and the text is allowed to overflow.

use log::debug;

use crate::constants::{
    BASELINE_FACTOR, FONT_SIZE_STEP_PT, LINE_SPACING, MAX_FONT_SIZE_PT, MIN_FONT_SIZE_PT,
    pt_to_mm,
};
use crate::layout::Rect;
use crate::types::{FlashcardError, FontFamily, Result};

/// Outcome of fitting one text into one box
#[derive(Debug, Clone, PartialEq)]
pub struct FitResult {
    /// Chosen font size in points
    pub font_size_pt: f32,
    /// Wrapped lines at the chosen size
    pub lines: Vec<String>,
    /// Height of the wrapped block in mm
    pub block_height_mm: f32,
    /// True when even the floor size did not fit
    pub overflow: bool,
    line_spacing: f32,
}

impl FitResult {
    /// Distance between consecutive baselines in mm
    pub fn line_height_mm(&self) -> f32 {
        pt_to_mm(self.font_size_pt) * self.line_spacing
    }

    /// Baseline of the first line when the block is centered vertically in `cell`
    pub fn first_baseline_mm(&self, cell: &Rect) -> f32 {
        cell.y + (cell.height - self.block_height_mm) / 2.0
            + pt_to_mm(self.font_size_pt) * BASELINE_FACTOR
    }
}

/// Parameters of the font size scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextFitter {
    max_size_pt: f32,
    min_size_pt: f32,
    step_pt: f32,
    line_spacing: f32,
}

impl Default for TextFitter {
    fn default() -> Self {
        Self {
            max_size_pt: MAX_FONT_SIZE_PT,
            min_size_pt: MIN_FONT_SIZE_PT,
            step_pt: FONT_SIZE_STEP_PT,
            line_spacing: LINE_SPACING,
        }
    }
}

impl TextFitter {
    /// Scale from `max_size_pt` down to `min_size_pt` in steps of `step_pt`
    pub fn with_scale(max_size_pt: f32, min_size_pt: f32, step_pt: f32) -> Result<Self> {
        let finite = [max_size_pt, min_size_pt, step_pt]
            .iter()
            .all(|v| v.is_finite());
        if !finite || step_pt <= 0.0 || min_size_pt <= 0.0 || min_size_pt > max_size_pt {
            return Err(FlashcardError::Config(format!(
                "Invalid font size scale: {max_size_pt}pt to {min_size_pt}pt, step {step_pt}pt"
            )));
        }

        Ok(Self {
            max_size_pt,
            min_size_pt,
            step_pt,
            ..Self::default()
        })
    }

    /// Candidate sizes from largest to smallest, floor included
    pub fn sizes(&self) -> impl Iterator<Item = f32> + '_ {
        let steps = ((self.max_size_pt - self.min_size_pt) / self.step_pt)
            .floor()
            .max(0.0) as usize;
        let last_step = self.max_size_pt - steps as f32 * self.step_pt;
        let floor = (last_step > self.min_size_pt).then_some(self.min_size_pt);

        (0..=steps)
            .map(move |i| self.max_size_pt - i as f32 * self.step_pt)
            .chain(floor)
    }

    /// Find the largest size at which `text` fits a box of `width_mm` x `height_mm`.
    pub fn fit(&self, text: &str, width_mm: f32, height_mm: f32, family: FontFamily) -> FitResult {
        let mut last = None;

        for size in self.sizes() {
            let lines = wrap_text(text, family, size, width_mm);
            let block_height_mm = lines.len() as f32 * pt_to_mm(size) * self.line_spacing;

            if block_height_mm <= height_mm {
                return FitResult {
                    font_size_pt: size,
                    lines,
                    block_height_mm,
                    overflow: false,
                    line_spacing: self.line_spacing,
                };
            }
            last = Some((size, lines, block_height_mm));
        }

        // Nothing fit: keep the wrap computed at the floor size
        let (font_size_pt, lines, block_height_mm) = last.unwrap_or_else(|| {
            let lines = wrap_text(text, family, self.min_size_pt, width_mm);
            let height = lines.len() as f32 * pt_to_mm(self.min_size_pt) * self.line_spacing;
            (self.min_size_pt, lines, height)
        });
        debug!(
            "text of {} chars overflows {:.1}x{:.1} mm at {}pt",
            text.chars().count(),
            width_mm,
            height_mm,
            font_size_pt
        );

        FitResult {
            font_size_pt,
            lines,
            block_height_mm,
            overflow: true,
            line_spacing: self.line_spacing,
        }
    }
}

/// Fit `text` with the default 14pt → 6pt scale.
pub fn fit_text(text: &str, width_mm: f32, height_mm: f32, family: FontFamily) -> FitResult {
    TextFitter::default().fit(text, width_mm, height_mm, family)
}

// =============================================================================
// Word Wrapping
// =============================================================================

/// Greedy word wrap of `text` to `max_width_mm` at `size_pt`.
///
/// Explicit line breaks are kept. Runs of whitespace collapse to a single space.
/// Words wider than the box are broken between characters.
pub fn wrap_text(text: &str, family: FontFamily, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();

        for word in paragraph.split_whitespace() {
            for piece in split_long_word(word, family, size_pt, max_width_mm) {
                if current.is_empty() {
                    current = piece;
                    continue;
                }

                let candidate = format!("{current} {piece}");
                if family.text_width_mm(&candidate, size_pt) <= max_width_mm {
                    current = candidate;
                } else {
                    lines.push(std::mem::replace(&mut current, piece));
                }
            }
        }

        lines.push(current);
    }

    lines
}

fn split_long_word(word: &str, family: FontFamily, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    if family.text_width_mm(word, size_pt) <= max_width_mm {
        return vec![word.to_string()];
    }

    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0;

    for ch in word.chars() {
        let width = family.text_width_mm(ch.encode_utf8(&mut [0; 4]), size_pt);
        if !current.is_empty() && current_width + width > max_width_mm {
            pieces.push(std::mem::take(&mut current));
            current_width = 0.0;
        }
        current.push(ch);
        current_width += width;
    }

    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}

// =============================================================================
// Tests
// =============================================================================
