//! Projection between glyph codes and 12×18 RGBA images.

use crate::{Glyph, PixelCode, GLYPH_HEIGHT, GLYPH_WIDTH, VISIBLE_PIXELS};
use image::{Rgba, RgbaImage};

pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

impl PixelCode {
    pub fn to_rgba(self) -> Rgba<u8> {
        match self {
            PixelCode::Black => BLACK,
            PixelCode::White => WHITE,
            PixelCode::Transparent | PixelCode::TransparentAlt => TRANSPARENT,
        }
    }

    /// Exact match only: a pixel that is almost black is still transparent.
    pub fn from_rgba(pixel: Rgba<u8>) -> Self {
        if pixel == BLACK {
            PixelCode::Black
        } else if pixel == WHITE {
            PixelCode::White
        } else {
            PixelCode::Transparent
        }
    }
}

/// Renders the visible part of `glyph`.
pub fn glyph_to_image(glyph: &Glyph) -> RgbaImage {
    RgbaImage::from_fn(GLYPH_WIDTH as u32, GLYPH_HEIGHT as u32, |x, y| {
        glyph.pixel(x as usize, y as usize).to_rgba()
    })
}

/// An image that is not 12×18, with its actual size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WrongSize {
    pub width: u32,
    pub height: u32,
}

impl core::fmt::Display for WrongSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "image is {}x{}, expected {}x{}",
            self.width, self.height, GLYPH_WIDTH, GLYPH_HEIGHT
        )
    }
}

impl std::error::Error for WrongSize {}

/// Reads a glyph back from a rendered image.
pub fn image_to_glyph(image: &RgbaImage) -> Result<Glyph, WrongSize> {
    let (width, height) = image.dimensions();
    if width as usize != GLYPH_WIDTH || height as usize != GLYPH_HEIGHT {
        return Err(WrongSize { width, height });
    }

    let mut pixels = [PixelCode::Black; VISIBLE_PIXELS];
    for (x, y, pixel) in image.enumerate_pixels() {
        pixels[y as usize * GLYPH_WIDTH + x as usize] = PixelCode::from_rgba(*pixel);
    }
    Ok(Glyph::from_visible(pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CODES_PER_GLYPH;

    #[test]
    fn rendered_colors() {
        let mut codes = [PixelCode::Black; CODES_PER_GLYPH];
        codes[1] = PixelCode::White;
        codes[GLYPH_WIDTH] = PixelCode::Transparent;
        codes[VISIBLE_PIXELS - 1] = PixelCode::TransparentAlt;
        // padding never reaches the image
        codes[VISIBLE_PIXELS] = PixelCode::White;

        let image = glyph_to_image(&Glyph::new(codes));
        assert_eq!(image.dimensions(), (12, 18));
        assert_eq!(*image.get_pixel(0, 0), BLACK);
        assert_eq!(*image.get_pixel(1, 0), WHITE);
        assert_eq!(*image.get_pixel(0, 1), TRANSPARENT);
        assert_eq!(*image.get_pixel(11, 17), TRANSPARENT);
        assert_eq!(image.pixels().filter(|p| **p == WHITE).count(), 1);
    }

    #[test]
    fn color_matching_is_exact() {
        assert_eq!(PixelCode::from_rgba(Rgba([0, 0, 0, 254])), PixelCode::Transparent);
        assert_eq!(PixelCode::from_rgba(Rgba([1, 0, 0, 255])), PixelCode::Transparent);
        assert_eq!(PixelCode::from_rgba(Rgba([255, 255, 254, 255])), PixelCode::Transparent);
        assert_eq!(PixelCode::from_rgba(Rgba([128, 0, 0, 0])), PixelCode::Transparent);
        assert_eq!(PixelCode::from_rgba(BLACK), PixelCode::Black);
        assert_eq!(PixelCode::from_rgba(WHITE), PixelCode::White);
    }

    #[test]
    fn image_to_glyph_sets_padding() {
        let mut image = RgbaImage::from_pixel(12, 18, WHITE);
        image.put_pixel(3, 4, Rgba([10, 20, 30, 255]));
        let glyph = image_to_glyph(&image).unwrap();
        assert_eq!(glyph.pixel(3, 4), PixelCode::Transparent);
        assert_eq!(glyph.pixel(4, 3), PixelCode::White);
        assert!(glyph.padding().iter().all(|c| *c == PixelCode::Transparent));
    }

    #[test]
    fn wrong_size_is_rejected() {
        for (width, height) in [(12, 17), (13, 18), (18, 12)] {
            assert_eq!(
                image_to_glyph(&RgbaImage::new(width, height)),
                Err(WrongSize { width, height })
            );
        }
    }
}
