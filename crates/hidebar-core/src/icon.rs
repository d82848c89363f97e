//! The tray icon glyph: a taskbar along the bottom edge with a
//! double-headed arrow above it.
//!
//! Drawn as a two-tone 32x32 bitmap and exported as the 1-bpp AND/XOR
//! mask pair that `CreateIcon` takes.

/// Width and height of the glyph in pixels.
pub const SIZE: usize = 32;

const BAR_TOP: usize = SIZE - 10;
const BAR_BOTTOM: usize = SIZE - 2;
const BAR_LEFT: usize = 2;
const BAR_RIGHT: usize = SIZE - 2;
const ARROW_X: usize = SIZE / 2;
const ARROW_TOP: usize = 4;
const ARROW_BOTTOM: usize = SIZE - 14;
const ARROW_HEAD: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pixel {
    Clear,
    Dark,
    Light,
}

/// A square two-tone bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glyph {
    pixels: [[Pixel; SIZE]; SIZE],
}

/// Draws the tray glyph.
pub fn glyph() -> Glyph {
    let mut g = Glyph {
        pixels: [[Pixel::Clear; SIZE]; SIZE],
    };

    for y in BAR_TOP..BAR_BOTTOM {
        for x in BAR_LEFT..BAR_RIGHT {
            let edge = y == BAR_TOP || y == BAR_BOTTOM - 1 || x == BAR_LEFT || x == BAR_RIGHT - 1;
            g.set(x, y, if edge { Pixel::Light } else { Pixel::Dark });
        }
    }

    for y in ARROW_TOP..=ARROW_BOTTOM {
        g.stroke(ARROW_X, y);
    }
    for i in 1..=ARROW_HEAD {
        g.stroke(ARROW_X - i, ARROW_TOP + i);
        g.stroke(ARROW_X + i, ARROW_TOP + i);
        g.stroke(ARROW_X - i, ARROW_BOTTOM - i);
        g.stroke(ARROW_X + i, ARROW_BOTTOM - i);
    }

    g
}

impl Glyph {
    pub fn pixel(&self, x: usize, y: usize) -> Pixel {
        self.pixels[y][x]
    }

    fn set(&mut self, x: usize, y: usize, p: Pixel) {
        if x < SIZE && y < SIZE {
            self.pixels[y][x] = p;
        }
    }

    /// Two-pixel-wide light stroke.
    fn stroke(&mut self, x: usize, y: usize) {
        self.set(x, y, Pixel::Light);
        self.set(x + 1, y, Pixel::Light);
    }

    /// Returns the `(and, xor)` 1-bpp masks, rows top to bottom, most
    /// significant bit leftmost.
    ///
    /// AND bit set means transparent; XOR bit set on an opaque pixel
    /// means white.
    pub fn masks(&self) -> (Vec<u8>, Vec<u8>) {
        let stride = SIZE / 8;
        let mut and = vec![0xFF; stride * SIZE];
        let mut xor = vec![0x00; stride * SIZE];

        for (y, row) in self.pixels.iter().enumerate() {
            for (x, p) in row.iter().enumerate() {
                let byte = y * stride + x / 8;
                let bit = 0x80 >> (x % 8);
                match p {
                    Pixel::Clear => {}
                    Pixel::Dark => and[byte] &= !bit,
                    Pixel::Light => {
                        and[byte] &= !bit;
                        xor[byte] |= bit;
                    }
                }
            }
        }
        (and, xor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_transparent() {
        let g = glyph();
        assert_eq!(g.pixel(0, 0), Pixel::Clear);
        assert_eq!(g.pixel(SIZE - 1, SIZE - 1), Pixel::Clear);
    }

    #[test]
    fn bar_has_light_outline_and_dark_fill() {
        let g = glyph();
        assert_eq!(g.pixel(BAR_LEFT, BAR_TOP + 3), Pixel::Light);
        assert_eq!(g.pixel(ARROW_X, BAR_TOP + 3), Pixel::Dark);
    }

    #[test]
    fn arrow_spans_both_heads() {
        let g = glyph();
        assert_eq!(g.pixel(ARROW_X, ARROW_TOP), Pixel::Light);
        assert_eq!(g.pixel(ARROW_X, ARROW_BOTTOM), Pixel::Light);
        assert_eq!(g.pixel(ARROW_X - ARROW_HEAD, ARROW_TOP + ARROW_HEAD), Pixel::Light);
        assert_eq!(g.pixel(ARROW_X + ARROW_HEAD, ARROW_BOTTOM - ARROW_HEAD), Pixel::Light);
    }

    #[test]
    fn masks_encode_pixels_msb_first() {
        // Arrange
        let g = glyph();

        // Act
        let (and, xor) = g.masks();

        // Assert
        assert_eq!(and.len(), SIZE * SIZE / 8);
        assert_eq!(xor.len(), and.len());
        assert_eq!(and[0], 0xFF);
        assert_eq!(xor[0], 0x00);
        // Arrow tip: columns 16 and 17 of row 4 are the top two bits of byte 2.
        let tip = ARROW_TOP * SIZE / 8 + 2;
        assert_eq!(and[tip] & 0xC0, 0x00);
        assert_eq!(xor[tip] & 0xC0, 0xC0);
        // Dark fill is opaque black.
        let fill = (BAR_TOP + 3) * SIZE / 8 + 1;
        assert_eq!(and[fill], 0x00);
        assert_eq!(xor[fill], 0x00);
    }
}
