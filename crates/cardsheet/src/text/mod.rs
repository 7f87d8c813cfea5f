//! Text measurement and fitting
//!
//! - Glyph metrics of the built-in PDF fonts
//! - Word wrapping and font size selection for a fixed cell box

mod fit;
mod metrics;

pub use fit::*;
pub use metrics::GlyphWidths;
