//! Command opcodes

/// SSD1306 command opcodes (datasheet table 9-1).
///
/// Opcodes that take their argument in the low bits (page, column nibbles,
/// start line) are the base value; OR the argument in before sending.
pub struct Cmd;

#[allow(missing_docs)]
impl Cmd {
    // Fundamental
    pub const SET_CONTRAST: u8 = 0x81;
    pub const DISPLAY_FOLLOW_RAM: u8 = 0xA4;
    pub const DISPLAY_IGNORE_RAM: u8 = 0xA5;
    pub const NORMAL_DISPLAY: u8 = 0xA6;
    pub const INVERSE_DISPLAY: u8 = 0xA7;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;

    // Addressing
    pub const LOW_COLUMN_START: u8 = 0x00;
    pub const HIGH_COLUMN_START: u8 = 0x10;
    pub const MEMORY_ADDRESSING_MODE: u8 = 0x20;
    pub const PAGE_START: u8 = 0xB0;

    // Hardware configuration
    pub const START_LINE: u8 = 0x40;
    pub const SEGMENT_REMAP_0: u8 = 0xA0;
    pub const SEGMENT_REMAP_127: u8 = 0xA1;
    pub const MULTIPLEX_RATIO: u8 = 0xA8;
    pub const COM_SCAN_NORMAL: u8 = 0xC0;
    pub const COM_SCAN_REMAPPED: u8 = 0xC8;
    pub const DISPLAY_OFFSET: u8 = 0xD3;
    pub const COM_PINS_CONFIG: u8 = 0xDA;

    // Timing and driving
    pub const CLOCK_DIVIDE: u8 = 0xD5;
    pub const PRE_CHARGE_PERIOD: u8 = 0xD9;
    pub const VCOMH_DESELECT: u8 = 0xDB;
    pub const CHARGE_PUMP: u8 = 0x8D;
}

/*
Page addressing write pointer, per page:
0xB0 | page  - Page Start Address (0..7)
0x00 | low   - Lower nibble of column start
0x10 | high  - Upper nibble of column start
*/
