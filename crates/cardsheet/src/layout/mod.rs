//! Layout calculation modules for flashcard sheets
//!
//! This module handles all the pure geometry of a sheet:
//! - Grid layout (cell rectangles inside the page margins)
//! - Back-page mirroring (which front slot lands behind which back slot)
//! - Pagination (splitting the card list into fixed-size pages)

mod grid;
mod mirror;
mod paginate;
mod types;

pub use grid::*;
pub use mirror::*;
pub use paginate::*;
pub use types::*;
