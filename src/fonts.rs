//! Fixed-size bitmap fonts
//!
//! A glyph is `height` rows of 16-bit masks, row-major, leftmost pixel in
//! bit 15. The tables cover printable ASCII (`' '..='~'`) and are generated
//! at compile time from one 5x8 column-major master set, scaled and padded
//! into the cell of each font.

use crate::error::Error;

/// First character with a glyph
pub const ASCII_MIN: u8 = 0x20;

/// Last character with a glyph
pub const ASCII_MAX: u8 = 0x7E;

/// Widest cell a row mask can describe
pub const MAX_GLYPH_WIDTH: u8 = 16;

const GLYPH_COUNT: usize = (ASCII_MAX - ASCII_MIN + 1) as usize;

/// Font descriptor: cell size and glyph rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    width: u8,
    height: u8,
    data: &'static [u16],
}

impl Font {
    /// `data` must hold `height` rows for every character in
    /// `ASCII_MIN..=ASCII_MAX`. Rows are 16-bit masks, so `width` is capped
    /// at [`MAX_GLYPH_WIDTH`].
    pub const fn new(width: u8, height: u8, data: &'static [u16]) -> Self {
        Self {
            width: if width > MAX_GLYPH_WIDTH {
                MAX_GLYPH_WIDTH
            } else {
                width
            },
            height,
            data,
        }
    }

    /// Cell width in pixels, at most 16
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Cell height in pixels
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Whether `ch` has a glyph in this font
    pub fn contains(&self, ch: char) -> bool {
        self.glyph(ch).is_ok()
    }

    /// Rows of the glyph for `ch`
    pub fn glyph(&self, ch: char) -> Result<&'static [u16], Error> {
        let code = ch as u32;
        if code < u32::from(ASCII_MIN) || code > u32::from(ASCII_MAX) {
            return Err(Error::UndefinedGlyph(ch));
        }
        let height = usize::from(self.height);
        let start = (code - u32::from(ASCII_MIN)) as usize * height;
        self.data
            .get(start..start + height)
            .ok_or(Error::UndefinedGlyph(ch))
    }
}

/// 7 x 10 cell, unscaled master glyphs
pub static FONT_7X10: Font = Font::new(7, 10, &FONT_7X10_DATA);

/// 11 x 18 cell, master glyphs doubled
pub static FONT_11X18: Font = Font::new(11, 18, &FONT_11X18_DATA);

/// 16 x 26 cell, master glyphs tripled
pub static FONT_16X26: Font = Font::new(16, 26, &FONT_16X26_DATA);

static FONT_7X10_DATA: [u16; GLYPH_COUNT * 10] = render(10, 1, 1, 1);
static FONT_11X18_DATA: [u16; GLYPH_COUNT * 18] = render(18, 2, 0, 1);
static FONT_16X26_DATA: [u16; GLYPH_COUNT * 26] = render(26, 3, 0, 1);

/// Expand the master set into row masks of a `height` tall cell, every
/// master pixel becoming a `scale` x `scale` block at (`left`, `top`)
const fn render<const N: usize>(height: usize, scale: usize, left: usize, top: usize) -> [u16; N] {
    let mut rows = [0u16; N];
    let mut glyph = 0;
    while glyph < GLYPH_COUNT {
        let columns = MASTER_5X8[glyph];
        let mut col = 0;
        while col < 5 {
            let mut bit = 0;
            while bit < 8 {
                if columns[col] & (1 << bit) != 0 {
                    let mut dy = 0;
                    while dy < scale {
                        let row = top + bit * scale + dy;
                        let mut dx = 0;
                        while dx < scale {
                            let x = left + col * scale + dx;
                            rows[glyph * height + row] |= 0x8000u16 >> x;
                            dx += 1;
                        }
                        dy += 1;
                    }
                }
                bit += 1;
            }
            col += 1;
        }
        glyph += 1;
    }
    rows
}

/// Master glyphs: five columns per character, bit 0 is the top row,
/// bit 7 carries descenders
#[rustfmt::skip]
const MASTER_5X8: [[u8; 5]; GLYPH_COUNT] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // '!'
    [0x00, 0x07, 0x00, 0x07, 0x00], // '"'
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // '#'
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // '$'
    [0x23, 0x13, 0x08, 0x64, 0x62], // '%'
    [0x36, 0x49, 0x56, 0x20, 0x50], // '&'
    [0x00, 0x08, 0x07, 0x03, 0x00], // '\''
    [0x00, 0x1C, 0x22, 0x41, 0x00], // '('
    [0x00, 0x41, 0x22, 0x1C, 0x00], // ')'
    [0x2A, 0x1C, 0x7F, 0x1C, 0x2A], // '*'
    [0x08, 0x08, 0x3E, 0x08, 0x08], // '+'
    [0x00, 0x80, 0x70, 0x30, 0x00], // ','
    [0x08, 0x08, 0x08, 0x08, 0x08], // '-'
    [0x00, 0x00, 0x60, 0x60, 0x00], // '.'
    [0x20, 0x10, 0x08, 0x04, 0x02], // '/'
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // '0'
    [0x00, 0x42, 0x7F, 0x40, 0x00], // '1'
    [0x72, 0x49, 0x49, 0x49, 0x46], // '2'
    [0x21, 0x41, 0x49, 0x4D, 0x33], // '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10], // '4'
    [0x27, 0x45, 0x45, 0x45, 0x39], // '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x31], // '6'
    [0x41, 0x21, 0x11, 0x09, 0x07], // '7'
    [0x36, 0x49, 0x49, 0x49, 0x36], // '8'
    [0x46, 0x49, 0x49, 0x29, 0x1E], // '9'
    [0x00, 0x00, 0x14, 0x00, 0x00], // ':'
    [0x00, 0x40, 0x34, 0x00, 0x00], // ';'
    [0x00, 0x08, 0x14, 0x22, 0x41], // '<'
    [0x14, 0x14, 0x14, 0x14, 0x14], // '='
    [0x00, 0x41, 0x22, 0x14, 0x08], // '>'
    [0x02, 0x01, 0x59, 0x09, 0x06], // '?'
    [0x3E, 0x41, 0x5D, 0x59, 0x4E], // '@'
    [0x7C, 0x12, 0x11, 0x12, 0x7C], // 'A'
    [0x7F, 0x49, 0x49, 0x49, 0x36], // 'B'
    [0x3E, 0x41, 0x41, 0x41, 0x22], // 'C'
    [0x7F, 0x41, 0x41, 0x41, 0x3E], // 'D'
    [0x7F, 0x49, 0x49, 0x49, 0x41], // 'E'
    [0x7F, 0x09, 0x09, 0x09, 0x01], // 'F'
    [0x3E, 0x41, 0x41, 0x51, 0x73], // 'G'
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // 'H'
    [0x00, 0x41, 0x7F, 0x41, 0x00], // 'I'
    [0x20, 0x40, 0x41, 0x3F, 0x01], // 'J'
    [0x7F, 0x08, 0x14, 0x22, 0x41], // 'K'
    [0x7F, 0x40, 0x40, 0x40, 0x40], // 'L'
    [0x7F, 0x02, 0x1C, 0x02, 0x7F], // 'M'
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // 'N'
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // 'O'
    [0x7F, 0x09, 0x09, 0x09, 0x06], // 'P'
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // 'Q'
    [0x7F, 0x09, 0x19, 0x29, 0x46], // 'R'
    [0x26, 0x49, 0x49, 0x49, 0x32], // 'S'
    [0x03, 0x01, 0x7F, 0x01, 0x03], // 'T'
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // 'U'
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // 'V'
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // 'W'
    [0x63, 0x14, 0x08, 0x14, 0x63], // 'X'
    [0x03, 0x04, 0x78, 0x04, 0x03], // 'Y'
    [0x61, 0x59, 0x49, 0x4D, 0x43], // 'Z'
    [0x00, 0x7F, 0x41, 0x41, 0x41], // '['
    [0x02, 0x04, 0x08, 0x10, 0x20], // '\\'
    [0x00, 0x41, 0x41, 0x41, 0x7F], // ']'
    [0x04, 0x02, 0x01, 0x02, 0x04], // '^'
    [0x40, 0x40, 0x40, 0x40, 0x40], // '_'
    [0x00, 0x03, 0x07, 0x08, 0x00], // '`'
    [0x20, 0x54, 0x54, 0x78, 0x40], // 'a'
    [0x7F, 0x28, 0x44, 0x44, 0x38], // 'b'
    [0x38, 0x44, 0x44, 0x44, 0x28], // 'c'
    [0x38, 0x44, 0x44, 0x28, 0x7F], // 'd'
    [0x38, 0x54, 0x54, 0x54, 0x18], // 'e'
    [0x00, 0x08, 0x7E, 0x09, 0x02], // 'f'
    [0x18, 0xA4, 0xA4, 0x9C, 0x78], // 'g'
    [0x7F, 0x08, 0x04, 0x04, 0x78], // 'h'
    [0x00, 0x44, 0x7D, 0x40, 0x00], // 'i'
    [0x20, 0x40, 0x40, 0x3D, 0x00], // 'j'
    [0x7F, 0x10, 0x28, 0x44, 0x00], // 'k'
    [0x00, 0x41, 0x7F, 0x40, 0x00], // 'l'
    [0x7C, 0x04, 0x78, 0x04, 0x78], // 'm'
    [0x7C, 0x08, 0x04, 0x04, 0x78], // 'n'
    [0x38, 0x44, 0x44, 0x44, 0x38], // 'o'
    [0xFC, 0x18, 0x24, 0x24, 0x18], // 'p'
    [0x18, 0x24, 0x24, 0x18, 0xFC], // 'q'
    [0x7C, 0x08, 0x04, 0x04, 0x08], // 'r'
    [0x48, 0x54, 0x54, 0x54, 0x24], // 's'
    [0x04, 0x04, 0x3F, 0x44, 0x24], // 't'
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // 'u'
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // 'v'
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // 'w'
    [0x44, 0x28, 0x10, 0x28, 0x44], // 'x'
    [0x4C, 0x90, 0x90, 0x90, 0x7C], // 'y'
    [0x44, 0x64, 0x54, 0x4C, 0x44], // 'z'
    [0x00, 0x08, 0x36, 0x41, 0x00], // '{'
    [0x00, 0x00, 0x77, 0x00, 0x00], // '|'
    [0x00, 0x41, 0x36, 0x08, 0x00], // '}'
    [0x02, 0x01, 0x02, 0x04, 0x02], // '~'
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_hold_every_printable_character() {
        for font in [&FONT_7X10, &FONT_11X18, &FONT_16X26] {
            assert_eq!(font.data.len(), GLYPH_COUNT * usize::from(font.height()));
            for code in ASCII_MIN..=ASCII_MAX {
                let glyph = font.glyph(char::from(code)).unwrap();
                assert_eq!(glyph.len(), usize::from(font.height()));
            }
        }
    }

    #[test]
    fn characters_outside_the_table_are_rejected() {
        for ch in ['\u{1f}', '\u{7f}', '\n', 'é', '€'] {
            assert!(matches!(FONT_7X10.glyph(ch), Err(Error::UndefinedGlyph(c)) if c == ch));
            assert!(!FONT_16X26.contains(ch));
        }
    }

    #[test]
    fn space_is_blank_and_glyphs_stay_inside_the_cell() {
        for font in [&FONT_7X10, &FONT_11X18, &FONT_16X26] {
            assert!(font.glyph(' ').unwrap().iter().all(|row| *row == 0));
            let outside = !(0xFFFFu16 << (16 - font.width()));
            for code in ASCII_MIN..=ASCII_MAX {
                let glyph = font.glyph(char::from(code)).unwrap();
                assert!(glyph.iter().all(|row| row & outside == 0), "{:?}", code as char);
            }
        }
    }

    #[test]
    fn small_font_places_master_pixels_one_cell_in() {
        // 'I' = [0x00, 0x41, 0x7F, 0x41, 0x00]: serifs on the top and bottom row
        let glyph = FONT_7X10.glyph('I').unwrap();
        assert_eq!(glyph[0], 0);
        assert_eq!(glyph[1], 0b0011_1000_0000_0000);
        assert_eq!(glyph[2], 0b0001_0000_0000_0000);
        assert_eq!(glyph[7], 0b0011_1000_0000_0000);
        assert_eq!(glyph[9], 0);
    }

    #[test]
    fn scaled_fonts_double_and_triple_pixels() {
        let small = FONT_7X10.glyph('-').unwrap();
        let medium = FONT_11X18.glyph('-').unwrap();
        let large = FONT_16X26.glyph('-').unwrap();
        // master bit 3 is the bar
        assert_eq!(small[4], 0b0111_1100_0000_0000);
        assert_eq!(medium[7], 0xFFC0);
        assert_eq!(medium[8], 0xFFC0);
        assert_eq!(&large[10..13], &[0xFFFE; 3]);
    }
}
