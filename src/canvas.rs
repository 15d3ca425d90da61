//! Framebuffer plus display state
//!
//! The canvas is what drawing and text talk to. It owns the pixel buffer,
//! the text cursor and the inversion flag, and it is plain memory: nothing
//! here touches the bus.

use core::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    pixelcolor::BinaryColor,
    Pixel,
};

use crate::color::Color;
use crate::framebuffer::Framebuffer;
use crate::graphics::Rasterizer;

/// Text cursor position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Column of the next glyph's left edge
    pub x: u32,
    /// Row of the next glyph's top edge
    pub y: u32,
}

/// Drawing surface of one display
#[derive(Debug, Clone)]
pub struct Canvas {
    fb: Framebuffer,
    cursor: Cursor,
    inverted: bool,
}

impl Canvas {
    /// Dark canvas with the cursor at the origin
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            fb: Framebuffer::new(width, height),
            cursor: Cursor::default(),
            inverted: false,
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.fb.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.fb.height()
    }

    /// The packed pixel buffer
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Stored colour of a pixel, `None` off the panel
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.fb.read(x, y)
    }

    /// Move the text cursor
    pub fn goto_xy(&mut self, x: u32, y: u32) {
        self.cursor = Cursor { x, y };
    }

    /// Current text cursor
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether pixel writes are complemented
    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Complement every later pixel write. Existing pixels keep their value.
    pub fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    /// Flip the inversion flag and the whole buffer with it, so the current
    /// image and everything drawn afterwards come out inverted
    pub fn toggle_invert(&mut self) {
        self.inverted = !self.inverted;
        self.fb.invert();
    }
}

impl Rasterizer for Canvas {
    fn panel_size(&self) -> (u32, u32) {
        (self.fb.width(), self.fb.height())
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.fb.write(x, y, color.effective(self.inverted));
    }

    fn fill(&mut self, color: Color) {
        self.fb.fill(color);
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.fb.width(), self.fb.height())
    }
}

impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.set_pixel(x, y, color.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::{
        prelude::*,
        primitives::{PrimitiveStyle, Rectangle},
    };

    #[test]
    fn inverted_canvas_clears_when_asked_to_set() {
        let mut canvas = Canvas::new(128, 64);
        canvas.fill(Color::Set);
        canvas.set_inverted(true);
        canvas.set_pixel(3, 3, Color::Set);
        assert_eq!(canvas.pixel(3, 3), Some(Color::Clear));
        canvas.set_pixel(3, 3, Color::Clear);
        assert_eq!(canvas.pixel(3, 3), Some(Color::Set));
    }

    #[test]
    fn fill_ignores_inversion() {
        let mut canvas = Canvas::new(128, 64);
        canvas.set_inverted(true);
        canvas.fill(Color::Set);
        assert!(canvas.framebuffer().as_bytes().iter().all(|b| *b == 0xFF));
    }

    #[test]
    fn toggle_invert_flips_existing_pixels() {
        let mut canvas = Canvas::new(128, 64);
        canvas.set_pixel(10, 10, Color::Set);
        canvas.toggle_invert();
        assert!(canvas.is_inverted());
        assert_eq!(canvas.pixel(10, 10), Some(Color::Clear));
        assert_eq!(canvas.pixel(11, 10), Some(Color::Set));
        canvas.toggle_invert();
        assert!(!canvas.is_inverted());
        assert_eq!(canvas.pixel(10, 10), Some(Color::Set));
    }

    #[test]
    fn embedded_graphics_primitives_land_in_the_buffer() {
        let mut canvas = Canvas::new(128, 64);
        Rectangle::new(Point::new(4, 6), Size::new(3, 2))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut canvas)
            .unwrap();
        assert_eq!(canvas.pixel(4, 6), Some(Color::Set));
        assert_eq!(canvas.pixel(6, 7), Some(Color::Set));
        assert_eq!(canvas.pixel(7, 7), Some(Color::Clear));
        assert_eq!(canvas.pixel(4, 8), Some(Color::Clear));
    }

    #[test]
    fn draw_target_drops_pixels_off_the_panel() {
        let mut canvas = Canvas::new(128, 64);
        canvas
            .draw_iter([
                Pixel(Point::new(-1, 0), BinaryColor::On),
                Pixel(Point::new(0, 64), BinaryColor::On),
            ])
            .unwrap();
        assert!(canvas.framebuffer().as_bytes().iter().all(|b| *b == 0));
        assert_eq!(canvas.size(), Size::new(128, 64));
    }

    #[test]
    fn unvalidated_geometry_stays_inside_the_buffer() {
        let mut canvas = Canvas::new(128, 60);
        canvas.set_pixel(127, 59, Color::Set);
        assert_eq!(canvas.pixel(127, 59), Some(Color::Set));
        canvas.draw_filled_rectangle(0, 0, 200, 200, Color::Set);
        assert_eq!(canvas.pixel(0, 59), Some(Color::Set));
        assert_eq!(canvas.pixel(0, 60), None);

        let mut empty = Canvas::new(0, 8);
        empty.fill(Color::Set);
        empty.draw_line(0, 0, 5, 5, Color::Set);
        assert_eq!(empty.framebuffer().pages().count(), 0);
    }
}
