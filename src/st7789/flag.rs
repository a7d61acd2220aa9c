//! Register bits, parameter bytes and timing

/// Register bit patterns and fixed parameter bytes for the ST7789 controller.
///
/// Power and gamma values are the ones used on the common Waveshare/Adafruit 240x320
/// modules; they also work on the 240x240 and 135x240 variants.
pub struct Flag;
#[allow(missing_docs)]
impl Flag {
    // Memory Data Access Control (0x36) bits
    pub const MADCTL_MY: u8 = 0x80; // Page (row) address order, bottom to top
    pub const MADCTL_MX: u8 = 0x40; // Column address order, right to left
    pub const MADCTL_MV: u8 = 0x20; // Page/column exchange
    pub const MADCTL_ML: u8 = 0x10; // Line address order, vertical refresh bottom to top
    pub const MADCTL_RGB: u8 = 0x00;

    // Interface Pixel Format (0x3A): 65K RGB interface, 16 bit/pixel control interface
    pub const COLMOD_16BIT: u8 = 0x55;

    // Porch Setting (0xB2): back, front, separate porch off, idle and partial porches
    pub const PORCH: [u8; 5] = [0x0C, 0x0C, 0x00, 0x33, 0x33];

    // Gate Control (0xB7): VGH=13.26V, VGL=-10.43V
    pub const GATE_VOLTAGE: u8 = 0x35;

    // VCOM Setting (0xBB): 0.725V
    pub const VCOM: u8 = 0x19;

    // LCM Control (0xC0)
    pub const LCM: u8 = 0x2C;

    // VDV and VRH Command Enable (0xC2): values come from the commands, not NVM
    pub const VDV_VRH_ENABLE: [u8; 2] = [0x01, 0xFF];

    // VRH Set (0xC3): 4.45V
    pub const VRH: u8 = 0x12;

    // VDV Set (0xC4): 0V
    pub const VDV: u8 = 0x20;

    // Frame Rate Control in Normal Mode (0xC6): dot inversion, 60Hz
    pub const FRAME_RATE_60HZ: u8 = 0x0F;

    // Power Control 1 (0xD0): AVDD=6.8V, AVCL=-4.8V, VDDS=2.3V
    pub const POWER_CONTROL_1: [u8; 2] = [0xA4, 0xA1];

    // Positive / Negative Voltage Gamma Control (0xE0 / 0xE1)
    pub const POSITIVE_GAMMA: [u8; 14] = [
        0xD0, 0x04, 0x0D, 0x11, 0x13, 0x2B, 0x3F, 0x54, 0x4C, 0x18, 0x0D, 0x0B, 0x1F, 0x23,
    ];
    pub const NEGATIVE_GAMMA: [u8; 14] = [
        0xD0, 0x04, 0x0C, 0x11, 0x13, 0x2C, 0x3F, 0x44, 0x51, 0x2F, 0x1F, 0x1F, 0x20, 0x23,
    ];

    // Delays in milliseconds required after the corresponding commands
    pub const SWRESET_DELAY_MS: u32 = 150;
    pub const SLPOUT_DELAY_MS: u32 = 120;
    pub const SLPIN_DELAY_MS: u32 = 5;
    pub const SHORT_DELAY_MS: u32 = 10;
}
