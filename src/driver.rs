//! SSD1306 Display Driver Implementation
//!
//! This module contains the driver object that ties the canvas to the panel.
//!
//! ## Lifecycle
//!
//! - `new()` - validate the configuration and allocate the framebuffer; no
//!   bus traffic
//! - `init()` - settle delay, controller configuration, blank screen; the
//!   driver is `Ready` afterwards
//! - `sync()` - push the whole framebuffer, page by page
//!
//! Drawing works in either state since it only touches memory. Everything
//! that talks to the panel needs `Ready`.
//!
//! ## Page transfer
//!
//! The controller runs in page addressing mode. For each page the write
//! pointer is moved with three commands (page, column low nibble, column
//! high nibble) and the page's `width` bytes follow as one data frame.
//!
//! ## Failures
//!
//! A frame whose readiness probe fails is not sent and the error is
//! returned. During `sync()` the [`SyncPolicy`] decides whether the
//! remaining pages are still attempted.

use core::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    Pixel,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::canvas::{Canvas, Cursor};
use crate::cmd::Cmd;
use crate::color::Color;
use crate::config::{Config, SyncPolicy};
use crate::error::Error;
use crate::flag::Flag;
use crate::fonts::Font;
use crate::graphics::Rasterizer;
use crate::interface::I2cInterface;
use crate::text::{measure_str, TextSize};

/// Number of single-byte command frames in the power-up configuration
pub const INIT_SEQUENCE_LEN: usize = 28;

/// Driver lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Constructed, controller not configured yet
    Uninitialized,
    /// Configured and showing the framebuffer
    Ready,
}

/// SSD1306 OLED Display Driver
///
/// ## Type Parameters
///
/// - `I2C` - bus the controller is attached to
pub struct Ssd1306<I2C> {
    /// The display interface
    interface: I2cInterface<I2C>,
    canvas: Canvas,
    config: Config,
    state: State,
}

impl<I2C> Ssd1306<I2C> {
    /// Create the driver. The panel is not touched until [`Ssd1306::init`].
    pub fn new(i2c: I2C, config: Config) -> Result<Self, Error> {
        config.validate()?;
        Ok(Ssd1306 {
            interface: I2cInterface::new(i2c, config.address, config.probe_attempts),
            canvas: Canvas::new(config.width, config.height),
            config,
            state: State::Uninitialized,
        })
    }

    /// Current lifecycle state
    pub fn state(&self) -> State {
        self.state
    }

    /// Configuration the driver was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Drawing surface
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Mutable drawing surface
    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Stored colour of a pixel, `None` off the panel
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.canvas.pixel(x, y)
    }

    /// Move the text cursor
    pub fn goto_xy(&mut self, x: u32, y: u32) {
        self.canvas.goto_xy(x, y);
    }

    /// Current text cursor
    pub fn cursor(&self) -> Cursor {
        self.canvas.cursor()
    }

    /// See [`Canvas::put_char`]
    pub fn put_char(&mut self, ch: char, font: &Font, color: Color) -> Result<char, Error> {
        self.canvas.put_char(ch, font, color)
    }

    /// See [`Canvas::put_str`]
    pub fn put_str(&mut self, text: &str, font: &Font, color: Color) -> Result<(), Error> {
        self.canvas.put_str(text, font, color)
    }

    /// See [`measure_str`]
    pub fn measure_str(&self, text: &str, font: &Font) -> TextSize {
        measure_str(text, font)
    }

    /// Whether pixel writes are complemented
    pub fn is_inverted(&self) -> bool {
        self.canvas.is_inverted()
    }

    /// See [`Canvas::set_inverted`]
    pub fn set_inverted(&mut self, inverted: bool) {
        self.canvas.set_inverted(inverted);
    }

    /// See [`Canvas::toggle_invert`]
    pub fn toggle_invert(&mut self) {
        self.canvas.toggle_invert();
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.interface.release()
    }
}

impl<I2C> Ssd1306<I2C>
where
    I2C: I2c,
{
    /// Bring the controller up: settle delay, configuration commands,
    /// blank framebuffer, first full transfer.
    ///
    /// On failure the driver stays [`State::Uninitialized`] and `init` can
    /// be retried.
    pub fn init(&mut self, delay: &mut impl DelayNs) -> Result<(), Error> {
        log::info!(
            "Initializing {}x{} SSD1306 at 0x{:02X}",
            self.config.width,
            self.config.height,
            self.interface.address()
        );
        self.state = State::Uninitialized;

        delay.delay_ms(self.config.settle_delay_ms);

        self.interface.cmds(&init_sequence(&self.config))?;

        self.canvas.fill(Color::Clear);
        self.transfer_pages()?;
        self.canvas.goto_xy(0, 0);

        self.state = State::Ready;
        log::info!("Display ready");
        Ok(())
    }

    /// Push the whole framebuffer to the panel
    pub fn sync(&mut self) -> Result<(), Error> {
        self.ensure_ready()?;
        self.transfer_pages()
    }

    /// Panel on, or off into sleep mode. RAM contents survive.
    pub fn set_display_on(&mut self, on: bool) -> Result<(), Error> {
        self.ensure_ready()?;
        self.interface
            .cmd(if on { Cmd::DISPLAY_ON } else { Cmd::DISPLAY_OFF })
    }

    /// Change brightness
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error> {
        self.ensure_ready()?;
        self.interface.cmds(&[Cmd::SET_CONTRAST, contrast])
    }

    /// Let the controller invert the whole panel without touching RAM
    pub fn set_hardware_invert(&mut self, inverted: bool) -> Result<(), Error> {
        self.ensure_ready()?;
        self.interface.cmd(if inverted {
            Cmd::INVERSE_DISPLAY
        } else {
            Cmd::NORMAL_DISPLAY
        })
    }

    /// Direct command access: each byte goes out as its own command frame,
    /// so opcodes and their arguments can be mixed freely
    pub fn command(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.ensure_ready()?;
        self.interface.cmds(bytes)
    }

    /// Direct data access: `bytes` are written to display RAM in one frame
    /// at the controller's current write pointer. The framebuffer does not
    /// see them.
    pub fn data(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.ensure_ready()?;
        self.interface.data(bytes)
    }

    fn ensure_ready(&self) -> Result<(), Error> {
        match self.state {
            State::Ready => Ok(()),
            State::Uninitialized => Err(Error::NotInitialized),
        }
    }

    fn transfer_pages(&mut self) -> Result<(), Error> {
        let column = self.config.column_offset;
        let mut first_error = None;

        for (page, bytes) in self.canvas.framebuffer().pages().enumerate() {
            let result = send_page(&mut self.interface, page as u8, column, bytes);
            let Err(e) = result else {
                continue;
            };
            log::warn!("Page {} not transferred: {}", page, e);
            match self.config.sync_policy {
                SyncPolicy::Abort => return Err(e),
                SyncPolicy::Continue => {
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => {
                log::debug!(
                    "Synced {} pages of {} bytes",
                    self.config.pages(),
                    self.config.width
                );
                Ok(())
            }
        }
    }
}

/// Move the write pointer to the start of `page` and stream its bytes
fn send_page<I2C: I2c>(
    interface: &mut I2cInterface<I2C>,
    page: u8,
    column: u8,
    bytes: &[u8],
) -> Result<(), Error> {
    interface.cmds(&[
        Cmd::PAGE_START | page,
        Cmd::LOW_COLUMN_START | (column & 0x0F),
        Cmd::HIGH_COLUMN_START | (column >> 4),
    ])?;
    interface.data(bytes)
}

/// Controller configuration, one command frame per byte
pub fn init_sequence(config: &Config) -> [u8; INIT_SEQUENCE_LEN] {
    [
        Cmd::DISPLAY_OFF,
        Cmd::MEMORY_ADDRESSING_MODE,
        Flag::ADDRESSING_PAGE,
        Cmd::PAGE_START,
        Cmd::COM_SCAN_REMAPPED,
        Cmd::LOW_COLUMN_START,
        Cmd::HIGH_COLUMN_START,
        Cmd::START_LINE,
        Cmd::SET_CONTRAST,
        config.contrast,
        Cmd::SEGMENT_REMAP_127,
        Cmd::NORMAL_DISPLAY,
        Cmd::MULTIPLEX_RATIO,
        config.multiplex_ratio(),
        Cmd::DISPLAY_FOLLOW_RAM,
        Cmd::DISPLAY_OFFSET,
        Flag::DISPLAY_OFFSET_NONE,
        Cmd::CLOCK_DIVIDE,
        Flag::CLOCK_DIVIDE_DEFAULT,
        Cmd::PRE_CHARGE_PERIOD,
        Flag::PRE_CHARGE_DEFAULT,
        Cmd::COM_PINS_CONFIG,
        config.com_pins(),
        Cmd::VCOMH_DESELECT,
        Flag::VCOMH_077,
        Cmd::CHARGE_PUMP,
        Flag::CHARGE_PUMP_ENABLE,
        Cmd::DISPLAY_ON,
    ]
}

impl<I2C> Rasterizer for Ssd1306<I2C> {
    fn panel_size(&self) -> (u32, u32) {
        self.canvas.panel_size()
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        self.canvas.set_pixel(x, y, color);
    }

    fn fill(&mut self, color: Color) {
        self.canvas.fill(color);
    }
}

impl<I2C> OriginDimensions for Ssd1306<I2C> {
    fn size(&self) -> Size {
        self.canvas.size()
    }
}

impl<I2C> DrawTarget for Ssd1306<I2C> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        self.canvas.draw_iter(pixels)
    }
}
