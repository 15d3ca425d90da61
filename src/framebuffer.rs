//! Bit-packed mirror of the controller's display RAM
//!
//! The SSD1306 stores the panel as pages of 8 pixel rows. Each byte is one
//! column of a page, bit 0 on top. Pixel `(x, y)` therefore lives in bit
//! `y % 8` of byte `x + (y / 8) * width`.

use alloc::vec;
use alloc::vec::Vec;

use crate::color::Color;

/// In-memory pixel buffer laid out exactly like the panel RAM
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    buf: Vec<u8>,
}

impl Framebuffer {
    /// All-dark buffer of `width` bytes per page. A height that is not a
    /// multiple of 8 gets a partial last page.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            buf: vec![0u8; width as usize * height.div_ceil(8) as usize],
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of 8-row pages, the last one possibly partial
    pub fn page_count(&self) -> u32 {
        self.height.div_ceil(8)
    }

    /// Byte index and bit mask of an on-panel pixel
    fn locate(&self, x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (x + (y / 8) * self.width) as usize;
        Some((index, 1 << (y % 8)))
    }

    /// Write one pixel as stored, no inversion applied. Off-panel is a no-op.
    pub fn write(&mut self, x: i32, y: i32, color: Color) {
        let Some((index, mask)) = self.locate(x, y) else {
            return;
        };
        match color {
            Color::Set => self.buf[index] |= mask,
            Color::Clear => self.buf[index] &= !mask,
        }
    }

    /// Stored colour of a pixel, `None` off the panel
    pub fn read(&self, x: i32, y: i32) -> Option<Color> {
        self.locate(x, y)
            .map(|(index, mask)| Color::from(self.buf[index] & mask != 0))
    }

    /// Set every byte to `0x00` or `0xFF`
    pub fn fill(&mut self, color: Color) {
        self.buf.fill(color.fill_byte());
    }

    /// Complement every stored pixel
    pub fn invert(&mut self) {
        for byte in self.buf.iter_mut() {
            *byte = !*byte;
        }
    }

    /// The `width` bytes of one page
    pub fn page(&self, page: u32) -> Option<&[u8]> {
        if page >= self.page_count() {
            return None;
        }
        let start = (page * self.width) as usize;
        Some(&self.buf[start..start + self.width as usize])
    }

    /// Pages in transfer order
    pub fn pages(&self) -> impl Iterator<Item = &[u8]> {
        // zero width means an empty buffer, and chunks(0) panics
        self.buf.chunks(self.width.max(1) as usize)
    }

    /// Raw buffer
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_maps_to_page_column_bit() {
        let mut fb = Framebuffer::new(128, 64);
        fb.write(5, 13, Color::Set);
        // page 1, column 5, bit 5
        assert_eq!(fb.as_bytes()[5 + 128], 0b0010_0000);
        assert_eq!(fb.as_bytes().iter().filter(|b| **b != 0).count(), 1);
    }

    #[test]
    fn set_then_clear_every_pixel() {
        let mut fb = Framebuffer::new(128, 64);
        for y in 0..64 {
            for x in 0..128 {
                fb.write(x, y, Color::Set);
                assert_eq!(fb.read(x, y), Some(Color::Set));
                fb.write(x, y, Color::Clear);
                assert_eq!(fb.read(x, y), Some(Color::Clear));
            }
        }
    }

    #[test]
    fn off_panel_writes_leave_buffer_untouched() {
        let mut fb = Framebuffer::new(128, 64);
        fb.fill(Color::Set);
        let before = fb.clone();
        for (x, y) in [(128, 0), (0, 64), (-1, 0), (0, -1), (i32::MAX, i32::MAX)] {
            fb.write(x, y, Color::Clear);
            assert_eq!(fb.read(x, y), None);
        }
        assert_eq!(fb, before);
    }

    #[test]
    fn fill_writes_raw_bytes() {
        let mut fb = Framebuffer::new(128, 64);
        fb.fill(Color::Set);
        assert_eq!(fb.as_bytes().len(), 1024);
        assert!(fb.as_bytes().iter().all(|b| *b == 0xFF));
        fb.fill(Color::Clear);
        assert!(fb.as_bytes().iter().all(|b| *b == 0x00));
    }

    #[test]
    fn pages_split_buffer_by_width() {
        let mut fb = Framebuffer::new(64, 32);
        fb.write(63, 31, Color::Set);
        assert_eq!(fb.pages().count(), 4);
        assert_eq!(fb.page(3).map(|p| p[63]), Some(0x80));
        assert!(fb.page(4).is_none());
    }

    #[test]
    fn partial_last_page_holds_the_bottom_rows() {
        let mut fb = Framebuffer::new(128, 60);
        assert_eq!(fb.page_count(), 8);
        assert_eq!(fb.as_bytes().len(), 1024);
        fb.write(127, 59, Color::Set);
        assert_eq!(fb.read(127, 59), Some(Color::Set));
        assert_eq!(fb.page(7).map(|p| p[127]), Some(0x08));
        assert_eq!(fb.read(127, 60), None);
    }

    #[test]
    fn zero_sized_buffer_has_no_pixels() {
        let mut fb = Framebuffer::new(0, 16);
        fb.write(0, 0, Color::Set);
        assert_eq!(fb.read(0, 0), None);
        assert_eq!(fb.pages().count(), 0);
        assert!(fb.as_bytes().is_empty());

        let fb = Framebuffer::new(32, 0);
        assert_eq!(fb.page_count(), 0);
        assert_eq!(fb.pages().count(), 0);
    }
}
