//! Shared constants for flashcard sheets
//!
//! Page geometry, text fitting parameters and the card colour palette live here so
//! that the composer, the fitter and the PDF sink agree on them.

use crate::types::Color;

// =============================================================================
// Unit Conversion
// =============================================================================

/// Points per millimeter (1 inch = 72 points, 1 inch = 25.4mm)
pub const POINTS_PER_MM: f32 = 72.0 / 25.4;

/// Convert millimeters to points
#[inline]
pub fn mm_to_pt(mm: f32) -> f32 {
    mm * POINTS_PER_MM
}

/// Convert points to millimeters
#[inline]
pub fn pt_to_mm(pt: f32) -> f32 {
    pt / POINTS_PER_MM
}

// =============================================================================
// Default Sheet Layout
// =============================================================================

/// A4 landscape width (mm)
pub const A4_LANDSCAPE_WIDTH_MM: f32 = 297.0;

/// A4 landscape height (mm)
pub const A4_LANDSCAPE_HEIGHT_MM: f32 = 210.0;

/// Margin on every side of the sheet (mm)
pub const DEFAULT_MARGIN_MM: f32 = 10.0;

pub const DEFAULT_ROWS: usize = 3;
pub const DEFAULT_COLUMNS: usize = 3;

/// File name used when the caller does not pick one
pub const DEFAULT_OUTPUT_FILE: &str = "flashcards-landscape.pdf";

// =============================================================================
// Text Fitting
// =============================================================================

/// Largest font size tried when fitting text (points)
pub const MAX_FONT_SIZE_PT: f32 = 14.0;

/// Floor of the font scale; text that still overflows is drawn at this size (points)
pub const MIN_FONT_SIZE_PT: f32 = 6.0;

/// Decrement between candidate sizes (points)
pub const FONT_SIZE_STEP_PT: f32 = 0.5;

/// Line advance as a multiple of the font size
pub const LINE_SPACING: f32 = 1.2;

/// Ascent of the first line as a fraction of the font size
pub const BASELINE_FACTOR: f32 = 0.8;

/// Inset between the cell edge and the text box on every side (mm)
pub const TEXT_PADDING_MM: f32 = 6.0;

// =============================================================================
// Card Decoration
// =============================================================================

/// Radius of the corner accent disc (mm)
pub const ACCENT_RADIUS_MM: f32 = 15.0;

/// Cut guide stroke width (mm)
pub const CUT_LINE_WIDTH_MM: f32 = 0.1;

/// Cut guide dash and gap length (mm)
pub const CUT_LINE_DASH_MM: f32 = 2.0;

/// Front background (slate-50)
pub const FRONT_FILL: Color = Color::rgb(248, 250, 252);

/// Front corner accent (indigo-100)
pub const FRONT_ACCENT: Color = Color::rgb(224, 231, 255);

/// Back background (green-50)
pub const BACK_FILL: Color = Color::rgb(240, 253, 244);

/// Back corner accent (emerald-100)
pub const BACK_ACCENT: Color = Color::rgb(209, 250, 229);

/// Cut guide colour (slate-300)
pub const CUT_LINE_COLOR: Color = Color::rgb(203, 213, 225);

/// Card text colour (slate-800)
pub const TEXT_COLOR: Color = Color::rgb(30, 41, 59);

// =============================================================================
// Bezier Curve Constants
// =============================================================================

/// Control point factor for approximating circles with Bezier curves.
/// 4 * (sqrt(2) - 1) / 3 ≈ 0.552284749831
pub const BEZIER_CIRCLE_FACTOR: f32 = 0.552_284_8;
