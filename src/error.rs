//! Driver error type

use core::fmt;

pub use display_interface::DisplayError;

/// Everything that can go wrong in the driver.
///
/// Geometry outside the panel is never an error: pixels are dropped and
/// line endpoints are clamped.
#[derive(Debug, Clone)]
pub enum Error {
    /// Panel dimensions the controller cannot address
    InvalidGeometry {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },
    /// Column offset plus width runs past the controller's RAM
    ColumnOverflow {
        /// First RAM column of the visible area
        column_offset: u8,
        /// Panel width in pixels
        width: u32,
    },
    /// A bus operation was attempted before `init()` completed
    NotInitialized,
    /// The readiness probe failed, the frame was not sent
    BusNotReady,
    /// The bus write itself failed
    Bus(DisplayError),
    /// The cursor is at or past the panel edge
    TextOverflow(char),
    /// The character has no glyph in the font
    UndefinedGlyph(char),
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Error::Bus(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidGeometry { width, height } => {
                write!(f, "unsupported panel geometry {}x{}", width, height)
            }
            Error::ColumnOverflow {
                column_offset,
                width,
            } => write!(
                f,
                "columns {}..{} exceed the controller RAM",
                column_offset,
                u32::from(*column_offset) + width
            ),
            Error::NotInitialized => write!(f, "display not initialized"),
            Error::BusNotReady => write!(f, "display did not acknowledge on the bus"),
            Error::Bus(e) => write!(f, "bus error: {:?}", e),
            Error::TextOverflow(ch) => write!(f, "no room left for {:?}", ch),
            Error::UndefinedGlyph(ch) => write!(f, "no glyph for {:?}", ch),
        }
    }
}

impl core::error::Error for Error {}
