//! RGB565 colour model
//!
//! Every pixel that reaches the controller is a [`Color`]: 5 bits red, 6 bits green,
//! 5 bits blue, sent high byte first. 24-bit and 1-bit sources are converted here and
//! never transmitted in their native form.
use embedded_graphics::pixelcolor::{raw::RawU16, Rgb565};
use embedded_graphics::prelude::*;

/// Packed 16-bit RGB565 colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(u16);

#[allow(missing_docs)]
impl Color {
    pub const BLACK: Color = Color(0x0000);
    pub const BLUE: Color = Color(0x001F);
    pub const RED: Color = Color(0xF800);
    pub const GREEN: Color = Color(0x07E0);
    pub const CYAN: Color = Color(0x07FF);
    pub const MAGENTA: Color = Color(0xF81F);
    pub const YELLOW: Color = Color(0xFFE0);
    pub const WHITE: Color = Color(0xFFFF);
    pub const TAN: Color = Color(0xED01);
    pub const GREY: Color = Color(0x9CD1);
    pub const BROWN: Color = Color(0x6201);
    pub const DGREEN: Color = Color(0x01C0);
    pub const ORANGE: Color = Color(0xFC00);
}

impl Color {
    /// Wrap an already packed RGB565 value
    pub const fn from_raw(raw: u16) -> Self {
        Color(raw)
    }

    /// Packed RGB565 value
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Truncate 8-bit channels to their high 5/6/5 bits. No dithering.
    pub const fn from_rgb888(red: u8, green: u8, blue: u8) -> Self {
        Color(((red as u16 & 0xF8) << 8) | ((green as u16 & 0xFC) << 3) | (blue as u16 >> 3))
    }

    /// Build from channel values already at 5/6/5 bit depth; excess bits are masked off.
    pub const fn from_rgb565(red: u8, green: u8, blue: u8) -> Self {
        Color(((red as u16 & 0x1F) << 11) | ((green as u16 & 0x3F) << 5) | (blue as u16 & 0x1F))
    }

    /// Pick one of two colours for a 1-bit source pixel
    pub const fn from_bit(set: bool, foreground: Color, background: Color) -> Self {
        if set {
            foreground
        } else {
            background
        }
    }

    /// Wire order: high byte first
    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Red channel, 5 bits
    pub const fn red(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green channel, 6 bits
    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel, 5 bits
    pub const fn blue(self) -> u8 {
        (self.0 & 0x1F) as u8
    }
}

impl From<u16> for Color {
    fn from(raw: u16) -> Self {
        Color(raw)
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl From<Rgb565> for Color {
    fn from(color: Rgb565) -> Self {
        Color(color.into_storage())
    }
}

impl From<Color> for Rgb565 {
    fn from(color: Color) -> Self {
        Rgb565::from(RawU16::new(color.0))
    }
}

/// Foreground/background pair used for every 1-bit source (bitmaps, icons, glyphs)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BiColor {
    /// Colour for set bits
    pub foreground: Color,
    /// Colour for clear bits
    pub background: Color,
}

impl BiColor {
    /// Pair a foreground with a background
    pub const fn new(foreground: Color, background: Color) -> Self {
        BiColor {
            foreground,
            background,
        }
    }

    /// Same pair with the roles exchanged
    pub const fn swapped(self) -> Self {
        BiColor {
            foreground: self.background,
            background: self.foreground,
        }
    }

    /// Colour for one source bit
    pub const fn pick(self, set: bool) -> Color {
        Color::from_bit(set, self.foreground, self.background)
    }
}

impl Default for BiColor {
    fn default() -> Self {
        BiColor::new(Color::WHITE, Color::BLACK)
    }
}
