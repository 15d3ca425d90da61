//! Control bytes and command arguments

/// Control bytes and command parameter values for the SSD1306 controller.
///
/// Every I2C transfer starts with a control byte telling the controller
/// whether the bytes that follow are commands or display RAM data.
pub struct Flag;

#[allow(missing_docs)]
impl Flag {
    // I2C control byte (datasheet 8.1.5.2): Co = 0, D/C# selects the stream
    pub const CONTROL_COMMAND: u8 = 0x00;
    pub const CONTROL_DATA: u8 = 0x40;

    // Memory Addressing Mode (0x20)
    pub const ADDRESSING_HORIZONTAL: u8 = 0x00;
    pub const ADDRESSING_VERTICAL: u8 = 0x01;
    pub const ADDRESSING_PAGE: u8 = 0x02;

    // Contrast Control (0x81)
    pub const CONTRAST_DEFAULT: u8 = 0xAA;

    // Display Offset (0xD3)
    pub const DISPLAY_OFFSET_NONE: u8 = 0x00;

    // Clock Divide Ratio / Oscillator Frequency (0xD5): divide 1, fosc max
    pub const CLOCK_DIVIDE_DEFAULT: u8 = 0xF0;

    // Pre-charge Period (0xD9): phase 1 = 2 DCLK, phase 2 = 2 DCLK
    pub const PRE_CHARGE_DEFAULT: u8 = 0x22;

    // COM Pins Hardware Configuration (0xDA)
    pub const COM_PINS_SEQUENTIAL: u8 = 0x02; // 128x32 panels
    pub const COM_PINS_ALTERNATIVE: u8 = 0x12; // 128x64 panels

    // VCOMH Deselect Level (0xDB)
    pub const VCOMH_065: u8 = 0x00; // 0.65 x Vcc
    pub const VCOMH_077: u8 = 0x20; // 0.77 x Vcc
    pub const VCOMH_083: u8 = 0x30; // 0.83 x Vcc

    // Charge Pump Setting (0x8D)
    pub const CHARGE_PUMP_DISABLE: u8 = 0x10;
    pub const CHARGE_PUMP_ENABLE: u8 = 0x14;
}
