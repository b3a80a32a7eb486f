use crate::{CODES_PER_GLYPH, GLYPH_COUNT, VISIBLE_PIXELS};

/// A 2-bit MAX7456 pixel code.
///
/// The chip draws `00` as black, `10` as white and both `x1` codes as transparent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PixelCode {
    #[default]
    Black = 0b00,
    Transparent = 0b01,
    White = 0b10,
    /// Also transparent. Accepted when reading, never produced.
    TransparentAlt = 0b11,
}

impl PixelCode {
    /// Builds a code from the two low bits of `bits`.
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0b00 => PixelCode::Black,
            0b01 => PixelCode::Transparent,
            0b10 => PixelCode::White,
            _ => PixelCode::TransparentAlt,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }

    pub const fn high_bit(self) -> u8 {
        (self.bits() >> 1) & 1
    }

    pub const fn low_bit(self) -> u8 {
        self.bits() & 1
    }

    pub const fn is_transparent(self) -> bool {
        self.low_bit() == 1
    }
}

/// The 256 codes stored for one character slot.
///
/// Codes `0..VISIBLE_PIXELS` are the 12×18 pixels in row-major order, the remaining codes are
/// padding. The default glyph is all [`PixelCode::Black`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Glyph {
    codes: [PixelCode; CODES_PER_GLYPH],
}

impl Glyph {
    pub const PADDING: PixelCode = PixelCode::Transparent;

    pub const fn new(codes: [PixelCode; CODES_PER_GLYPH]) -> Self {
        Self { codes }
    }

    /// Builds a glyph from its visible pixels, filling the padding with [`Self::PADDING`].
    pub fn from_visible(pixels: [PixelCode; VISIBLE_PIXELS]) -> Self {
        let mut codes = [Self::PADDING; CODES_PER_GLYPH];
        codes[..VISIBLE_PIXELS].copy_from_slice(&pixels);
        Self { codes }
    }

    pub fn codes(&self) -> &[PixelCode; CODES_PER_GLYPH] {
        &self.codes
    }

    pub fn visible(&self) -> &[PixelCode] {
        &self.codes[..VISIBLE_PIXELS]
    }

    pub fn padding(&self) -> &[PixelCode] {
        &self.codes[VISIBLE_PIXELS..]
    }

    /// The pixel at column `x`, row `y`.
    pub fn pixel(&self, x: usize, y: usize) -> PixelCode {
        assert!(x < crate::GLYPH_WIDTH && y < crate::GLYPH_HEIGHT);
        self.codes[y * crate::GLYPH_WIDTH + x]
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self {
            codes: [PixelCode::Black; CODES_PER_GLYPH],
        }
    }
}

impl core::fmt::Debug for Glyph {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let rows = self
            .codes
            .chunks(crate::GLYPH_WIDTH)
            .take(crate::GLYPH_HEIGHT)
            .map(|row| {
                row.iter()
                    .map(|code| match code {
                        PixelCode::Black => '#',
                        PixelCode::White => 'o',
                        _ => '.',
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>();
        f.debug_struct("Glyph").field("rows", &rows).finish()
    }
}

/// All 256 glyphs of a font, addressed by slot.
///
/// Slots that were never assigned hold [`Glyph::default`].
#[derive(Clone, PartialEq, Eq)]
pub struct GlyphTable {
    glyphs: Box<[Glyph; GLYPH_COUNT]>,
}

impl GlyphTable {
    pub fn new() -> Self {
        Self {
            glyphs: Box::new([Glyph::default(); GLYPH_COUNT]),
        }
    }

    pub fn get(&self, slot: u8) -> &Glyph {
        &self.glyphs[usize::from(slot)]
    }

    /// Replaces the glyph at `slot`, returning the previous one.
    pub fn set(&mut self, slot: u8, glyph: Glyph) -> Glyph {
        core::mem::replace(&mut self.glyphs[usize::from(slot)], glyph)
    }

    /// Iterates over every slot in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &Glyph)> + '_ {
        (0..=u8::MAX).zip(self.glyphs.iter())
    }
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for GlyphTable {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let assigned = self
            .glyphs
            .iter()
            .filter(|glyph| **glyph != Glyph::default())
            .count();
        f.debug_struct("GlyphTable")
            .field("assigned", &assigned)
            .finish()
    }
}
