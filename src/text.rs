//! Bitmap text at the cursor
//!
//! Glyphs are painted cell by cell: set bits in `color`, clear bits in the
//! opposite colour, so text overwrites whatever was underneath. The cursor
//! only moves right; line breaks are up to the caller.

use crate::canvas::Canvas;
use crate::color::Color;
use crate::error::Error;
use crate::fonts::Font;
use crate::graphics::Rasterizer;

/// Pixel extent of a rendered string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextSize {
    /// Horizontal extent
    pub width: u32,
    /// Vertical extent
    pub height: u32,
}

/// How much room `text` takes in `font`, without drawing anything
pub fn measure_str(text: &str, font: &Font) -> TextSize {
    TextSize {
        width: text.chars().count() as u32 * u32::from(font.width()),
        height: u32::from(font.height()),
    }
}

impl Canvas {
    /// Draw `ch` at the cursor and advance the cursor by one cell.
    ///
    /// Fails with [`Error::TextOverflow`] when the cursor is already at or
    /// past the right or bottom edge. A glyph that starts on the panel but
    /// runs past the edge is clipped.
    pub fn put_char(&mut self, ch: char, font: &Font, color: Color) -> Result<char, Error> {
        let cursor = self.cursor();
        if cursor.x >= self.width() || cursor.y >= self.height() {
            return Err(Error::TextOverflow(ch));
        }
        let glyph = font.glyph(ch)?;

        for (i, row) in glyph.iter().enumerate() {
            let y = cursor.y as i32 + i as i32;
            for j in 0..font.width() {
                let paint = if row & (0x8000 >> j) != 0 {
                    color
                } else {
                    color.invert()
                };
                self.set_pixel(cursor.x as i32 + i32::from(j), y, paint);
            }
        }

        self.goto_xy(cursor.x + u32::from(font.width()), cursor.y);
        Ok(ch)
    }

    /// Draw every character of `text`, stopping at the first one that
    /// cannot be drawn. The error carries that character.
    pub fn put_str(&mut self, text: &str, font: &Font, color: Color) -> Result<(), Error> {
        for ch in text.chars() {
            self.put_char(ch, font, color)?;
        }
        Ok(())
    }
}
