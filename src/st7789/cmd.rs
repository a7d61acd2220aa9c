//! Command opcodes

/// ST7789 command opcodes, values from the Sitronix ST7789V datasheet (system function
/// and panel function command tables).
pub struct Cmd;
#[allow(missing_docs)]
impl Cmd {
    // System
    pub const SWRESET: u8 = 0x01;
    pub const SLPIN: u8 = 0x10;
    pub const SLPOUT: u8 = 0x11;
    pub const PTLON: u8 = 0x12;
    pub const NORON: u8 = 0x13;
    pub const INVOFF: u8 = 0x20;
    pub const INVON: u8 = 0x21;
    pub const DISPOFF: u8 = 0x28;
    pub const DISPON: u8 = 0x29;

    // Addressing
    pub const CASET: u8 = 0x2A;
    pub const RASET: u8 = 0x2B;
    pub const RAMWR: u8 = 0x2C;
    pub const PTLAR: u8 = 0x30;
    pub const VSCRDEF: u8 = 0x33;
    pub const MADCTL: u8 = 0x36;
    pub const VSCRSADD: u8 = 0x37;
    pub const IDMOFF: u8 = 0x38;
    pub const IDMON: u8 = 0x39;
    pub const COLMOD: u8 = 0x3A;

    // Panel, power and gamma
    pub const PORCTRL: u8 = 0xB2;
    pub const GCTRL: u8 = 0xB7;
    pub const VCOMS: u8 = 0xBB;
    pub const LCMCTRL: u8 = 0xC0;
    pub const VDVVRHEN: u8 = 0xC2;
    pub const VRHS: u8 = 0xC3;
    pub const VDVS: u8 = 0xC4;
    pub const FRCTRL2: u8 = 0xC6;
    pub const PWCTRL1: u8 = 0xD0;
    pub const PVGAMCTRL: u8 = 0xE0;
    pub const NVGAMCTRL: u8 = 0xE1;
}

/*
Init order used by the driver:
0x01 - Software Reset (150 ms)
0x11 - Sleep Out (120 ms)
0x3A - Interface Pixel Format, 16 bit
0x36 - Memory Data Access Control
0xB2 / 0xB7 / 0xBB / 0xC0 / 0xC2 / 0xC3 / 0xC4 / 0xC6 / 0xD0 - porch, gate, VCOM, power
0xE0 / 0xE1 - Gamma
0x21 - Inversion On (most IPS panels need it)
0x13 - Normal Display Mode On
0x29 - Display On
*/
