//! Panel geometry and controller settings
//!
//! Everything that used to be a compile-time constant of a single 128x64
//! panel is a runtime value here, so the same build drives 128x32 or
//! narrower panels.

use crate::error::Error;
use crate::flag::Flag;
use crate::{MAX_HEIGHT, MAX_WIDTH};

/// 7-bit I2C address with SA0 tied low (0x78 in 8-bit notation)
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Columns of display RAM in the controller; panels narrower than this
/// show a window starting at `column_offset`
pub const RAM_COLUMNS: u32 = 132;

/// How long the panel gets to settle after power-up before the first command
pub const SETTLE_DELAY_MS: u32 = 100;

/// What `sync()` does when a frame cannot be delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SyncPolicy {
    /// Stop at the first failed frame and return its error
    #[default]
    Abort,
    /// Keep sending the remaining pages, return the first error at the end
    Continue,
}

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Panel width in pixels
    pub width: u32,
    /// Panel height in pixels, a multiple of 8
    pub height: u32,
    /// 7-bit bus address
    pub address: u8,
    /// Contrast sent during initialization
    pub contrast: u8,
    /// Blocking wait before the first command
    pub settle_delay_ms: u32,
    /// Readiness probes tried before a frame is given up
    pub probe_attempts: u8,
    /// First RAM column of the visible area (2 on SH1106 style modules)
    pub column_offset: u8,
    /// Failure handling during `sync()`
    pub sync_policy: SyncPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(MAX_WIDTH, MAX_HEIGHT)
    }
}

impl Config {
    /// Configuration for a panel of the given size with default settings
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            address: DEFAULT_ADDRESS,
            contrast: Flag::CONTRAST_DEFAULT,
            settle_delay_ms: SETTLE_DELAY_MS,
            probe_attempts: 1,
            column_offset: 0,
            sync_policy: SyncPolicy::Abort,
        }
    }

    /// Bus address, 0x3D when SA0 is tied high
    pub const fn with_address(mut self, address: u8) -> Self {
        self.address = address;
        self
    }

    /// Contrast value, 0x00..=0xFF
    pub const fn with_contrast(mut self, contrast: u8) -> Self {
        self.contrast = contrast;
        self
    }

    /// Power-up settle delay
    pub const fn with_settle_delay_ms(mut self, ms: u32) -> Self {
        self.settle_delay_ms = ms;
        self
    }

    /// At least one probe is always made
    pub const fn with_probe_attempts(mut self, attempts: u8) -> Self {
        self.probe_attempts = if attempts == 0 { 1 } else { attempts };
        self
    }

    /// Visible area column offset
    pub const fn with_column_offset(mut self, offset: u8) -> Self {
        self.column_offset = offset;
        self
    }

    /// Failure handling during sync
    pub const fn with_sync_policy(mut self, policy: SyncPolicy) -> Self {
        self.sync_policy = policy;
        self
    }

    /// Reject geometry the controller cannot address
    pub fn validate(&self) -> Result<(), Error> {
        let width_ok = self.width > 0 && self.width <= MAX_WIDTH;
        let height_ok = self.height >= 8 && self.height <= MAX_HEIGHT && self.height % 8 == 0;
        if !(width_ok && height_ok) {
            return Err(Error::InvalidGeometry {
                width: self.width,
                height: self.height,
            });
        }
        if u32::from(self.column_offset) + self.width > RAM_COLUMNS {
            return Err(Error::ColumnOverflow {
                column_offset: self.column_offset,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Number of 8-row memory pages
    pub const fn pages(&self) -> u32 {
        self.height / 8
    }

    /// Framebuffer size in bytes
    pub const fn buffer_len(&self) -> usize {
        (self.width * self.height / 8) as usize
    }

    /// Parameter of the multiplex ratio command: active rows minus one
    pub const fn multiplex_ratio(&self) -> u8 {
        (self.height - 1) as u8
    }

    /// COM pin layout; 128x32 glass is wired sequentially
    pub const fn com_pins(&self) -> u8 {
        if self.width == 128 && self.height == 32 {
            Flag::COM_PINS_SEQUENTIAL
        } else {
            Flag::COM_PINS_ALTERNATIVE
        }
    }
}
