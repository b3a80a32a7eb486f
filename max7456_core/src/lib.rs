//! Conversion between MAX7456 `.mcm` OSD fonts and directories of per-glyph PNG images.
//!
//! The `.mcm` format stores 256 glyphs of 12×18 pixels, each pixel a 2-bit code written as two
//! ASCII digits. [`mcm::read_mcm`] and [`mcm::write_mcm`] move between that text form and a
//! [`GlyphTable`], and the [`raster`] module moves between glyphs and RGBA images.
//! [`McmConverter`] ties both together on the filesystem.

pub mod converter;
mod error;
pub mod glyph;
pub mod mcm;
pub mod raster;

pub use converter::{Converter, McmConverter};
pub use error::Error;
pub use glyph::{Glyph, GlyphTable, PixelCode};

/// Tag every `.mcm` file starts with.
pub const MAX7456_TAG: &str = "MAX7456";
/// Visible pixels per glyph row.
pub const GLYPH_WIDTH: usize = 12;
/// Visible pixel rows per glyph.
pub const GLYPH_HEIGHT: usize = 18;
/// Codes of a glyph that map to a pixel. The rest are padding.
pub const VISIBLE_PIXELS: usize = GLYPH_WIDTH * GLYPH_HEIGHT;
/// Pixel codes stored per glyph, visible pixels and padding together.
pub const CODES_PER_GLYPH: usize = 256;
/// Character slots in a font.
pub const GLYPH_COUNT: usize = 256;
/// Pixel codes on one line of an `.mcm` file.
pub const CODES_PER_LINE: usize = 4;
/// Lines of an `.mcm` file taken up by one glyph.
pub const LINES_PER_GLYPH: usize = CODES_PER_GLYPH / CODES_PER_LINE;
