//! Pixel colour of a 1 bit per pixel panel

use embedded_graphics::pixelcolor::BinaryColor;

/// Colour of a single pixel.
///
/// `Set` lights the OLED pixel ("white"), `Clear` leaves it dark ("black").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Pixel off
    #[default]
    Clear,
    /// Pixel on
    Set,
}

impl Color {
    /// The opposite colour
    pub const fn invert(self) -> Self {
        match self {
            Color::Clear => Color::Set,
            Color::Set => Color::Clear,
        }
    }

    /// Colour actually written once the display inversion flag is applied
    pub const fn effective(self, inverted: bool) -> Self {
        if inverted {
            self.invert()
        } else {
            self
        }
    }

    /// Whether the pixel is lit
    pub const fn is_set(self) -> bool {
        matches!(self, Color::Set)
    }

    /// Byte value that puts all eight pixels of a page column in this colour
    pub const fn fill_byte(self) -> u8 {
        match self {
            Color::Clear => 0x00,
            Color::Set => 0xFF,
        }
    }
}

impl From<bool> for Color {
    fn from(on: bool) -> Self {
        if on {
            Color::Set
        } else {
            Color::Clear
        }
    }
}

impl From<BinaryColor> for Color {
    fn from(color: BinaryColor) -> Self {
        color.is_on().into()
    }
}

impl From<Color> for BinaryColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Clear => BinaryColor::Off,
            Color::Set => BinaryColor::On,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inversion_flag_complements_effective_colour() {
        assert_eq!(Color::Set.effective(false), Color::Set);
        assert_eq!(Color::Set.effective(true), Color::Clear);
        assert_eq!(Color::Clear.effective(true), Color::Set);
    }

    #[test]
    fn binary_color_maps_on_to_set() {
        assert_eq!(Color::from(BinaryColor::On), Color::Set);
        assert_eq!(Color::from(BinaryColor::Off), Color::Clear);
        assert_eq!(BinaryColor::from(Color::Set), BinaryColor::On);
    }
}
