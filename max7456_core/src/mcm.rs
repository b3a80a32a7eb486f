//! The `.mcm` text format.
//!
//! A file is the `MAX7456` tag followed by 64 lines per glyph, each line holding four pixel codes
//! as pairs of `0`/`1` characters (high bit first):
//!
//! ```text
//! MAX7456
//! 00000000
//! 10101010
//! ...
//! ```

use crate::{
    Error, Glyph, GlyphTable, PixelCode, CODES_PER_GLYPH, CODES_PER_LINE, LINES_PER_GLYPH,
    MAX7456_TAG, VISIBLE_PIXELS,
};
use std::io::{BufRead, Write};

/// Parses an `.mcm` stream into a glyph table.
///
/// An empty stream is not an error and yields `Ok(None)`. If the stream ends before all 256
/// glyphs are complete, whatever was read is kept and every code not read stays
/// [`PixelCode::Black`].
pub fn read_mcm<R: BufRead>(mut reader: R) -> Result<Option<GlyphTable>, Error> {
    let mut line = Vec::with_capacity(2 * CODES_PER_LINE + 2);

    let n = reader
        .read_until(b'\n', &mut line)
        .map_err(|e| Error::read("can't read first line", e))?;
    if n == 0 {
        return Ok(None);
    }
    if !line.starts_with(MAX7456_TAG.as_bytes()) {
        return Err(Error::InvalidFormat);
    }

    let mut table = GlyphTable::new();
    'glyphs: for slot in 0..=u8::MAX {
        let mut codes = [PixelCode::Black; CODES_PER_GLYPH];
        for line_index in 0..LINES_PER_GLYPH {
            line.clear();
            let n = reader.read_until(b'\n', &mut line).map_err(|e| {
                Error::read(
                    format!("can't read line {} of glyph 0x{:02X}", line_index, slot),
                    e,
                )
            })?;
            if n == 0 {
                tracing::debug!(
                    slot,
                    lines = line_index,
                    "input ended before the last glyph was complete"
                );
                table.set(slot, Glyph::new(codes));
                break 'glyphs;
            }

            let start = line_index * CODES_PER_LINE;
            decode_line(&line, &mut codes[start..start + CODES_PER_LINE]);
        }
        table.set(slot, Glyph::new(codes));
    }

    Ok(Some(table))
}

fn decode_line(line: &[u8], codes: &mut [PixelCode]) {
    let is_set = |i: usize| u8::from(line.get(i) == Some(&b'1'));
    for (k, code) in codes.iter_mut().enumerate() {
        *code = PixelCode::from_bits((is_set(2 * k) << 1) | is_set(2 * k + 1));
    }
}

/// Serializes `table` in `.mcm` form.
///
/// The tag is not followed by a newline of its own; instead every line of four codes starts with
/// one, so the output has no trailing newline. Padding codes are always written as
/// [`Glyph::PADDING`].
pub fn write_mcm<W: Write>(table: &GlyphTable, mut writer: W) -> Result<(), Error> {
    writer
        .write_all(MAX7456_TAG.as_bytes())
        .map_err(|e| Error::write("can't write tag", e))?;

    let mut line = [0u8; 1 + 2 * CODES_PER_LINE];
    line[0] = b'\n';
    for (slot, glyph) in table.iter() {
        for (line_index, chunk) in glyph.codes().chunks(CODES_PER_LINE).enumerate() {
            for (k, code) in chunk.iter().enumerate() {
                let code = if line_index * CODES_PER_LINE + k < VISIBLE_PIXELS {
                    *code
                } else {
                    Glyph::PADDING
                };
                line[1 + 2 * k] = b'0' + code.high_bit();
                line[2 + 2 * k] = b'0' + code.low_bit();
            }
            writer
                .write_all(&line)
                .map_err(|e| Error::write(format!("can't write glyph 0x{:02X}", slot), e))?;
        }
    }

    writer
        .flush()
        .map_err(|e| Error::write("can't flush output", e))
}
