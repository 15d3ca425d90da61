//! SSD1306 OLED Display Driver
//!
//! Used with the common 0.96" 128x64 (and 0.91" 128x32) I2C OLED modules.
//!
//! The driver keeps a 1 bit per pixel framebuffer in memory, draws lines,
//! rectangles, triangles, circles and bitmap text into it, and copies it to
//! the controller page by page when asked. Drawing never touches the bus.
//!
//!
//! ### Usage
//! This driver does not hide that you're working with one buffer. To
//! display something you:
//!
//! 1. create the driver with a [`config::Config`] and call
//!    [`driver::Ssd1306::init`]
//! 1. draw onto it with the [`graphics::Rasterizer`] methods, with text via
//!    [`driver::Ssd1306::put_str`], or with
//!    [`embedded_graphics`](https://github.com/embedded-graphics/embedded-graphics)
//! 1. then send the frame to the panel using [`driver::Ssd1306::sync`]
//!
//!
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

extern crate alloc;

pub mod canvas;
pub mod color;
pub mod config;
pub mod driver;
pub mod error;
pub mod fonts;
pub mod framebuffer;
pub mod graphics;
pub mod interface;
pub mod text;

pub mod cmd;
pub mod flag;

/// Maximum display height this driver supports
pub const MAX_HEIGHT: u32 = 64;

/// Maximum display width this driver supports
pub const MAX_WIDTH: u32 = 128;

pub use canvas::{Canvas, Cursor};
pub use color::Color;
pub use config::{Config, SyncPolicy};
pub use driver::{Ssd1306, State};
pub use error::Error;
pub use fonts::{Font, FONT_11X18, FONT_16X26, FONT_7X10};
pub use graphics::Rasterizer;
pub use text::{measure_str, TextSize};
