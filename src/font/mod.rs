//! Fixed-cell bitmap fonts
//!
//! A [`Font`] is pure metadata over a static glyph table: every glyph is a row-major 1 bpp
//! cell, `ceil(width / 8)` bytes per row, leftmost pixel in the most significant bit. Glyph
//! `i` starts at byte `i * stride * height`.
//!
//! Fonts are looked up by name in a [`FontRegistry`]; exactly one of them is active at a
//! time. The registry starts out with the built-in fonts registered under
//! [`FontRegistry::BUILTIN`] names, `"default"` active.
use heapless::LinearMap;

use crate::bitmap::{BitmapSource, PixelDepth, RowOrder};
use crate::color::BiColor;
use crate::error::{Error, Result};

mod default;
mod scaled;
mod seven_seg;

const BUILTIN_FONTS: usize = 5;

/// Fonts a registry can hold, built-ins included
pub const FONT_SLOTS: usize = BUILTIN_FONTS + 3;

static FALLBACK: Font = Font::DEFAULT;

/// Font descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font {
    glyphs: &'static [u8],
    width: u8,
    height: u8,
    first: u8,
    count: u8,
    inverted: bool,
}

impl Font {
    /// 6x8 ASCII font covering 0x20..=0x7E
    pub const DEFAULT: Font = Font::new(
        &default::GLYPHS,
        6,
        8,
        default::FIRST,
        default::COUNT,
    );

    /// 12x8, digits and uppercase only (0x20..=0x5A)
    pub const WIDE: Font = Font::new(
        &scaled::WIDE,
        12,
        8,
        default::FIRST,
        scaled::WIDE_COUNT,
    );

    /// 8x16, the default glyphs at double height
    pub const RETRO: Font = Font::new(&scaled::RETRO, 8, 16, default::FIRST, default::COUNT);

    /// 16x16, the default glyphs at double size
    pub const MEGA: Font = Font::new(&scaled::MEGA, 16, 16, default::FIRST, default::COUNT);

    /// 5x8 seven segment digits plus `-`, `.` and `:`
    pub const SEVEN_SEG: Font = Font::new(
        &seven_seg::GLYPHS,
        5,
        8,
        seven_seg::FIRST,
        seven_seg::COUNT,
    );

    /// Describe a glyph table. `first` is the character code of glyph 0.
    pub const fn new(glyphs: &'static [u8], width: u8, height: u8, first: u8, count: u8) -> Self {
        Font {
            glyphs,
            width,
            height,
            first,
            count,
            inverted: false,
        }
    }

    /// Same font with foreground and background swapped for every glyph
    pub const fn with_inversion(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Cell width in pixels
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Cell height in pixels
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Character code of the first glyph
    pub const fn first(&self) -> u8 {
        self.first
    }

    /// Number of glyphs
    pub const fn count(&self) -> u8 {
        self.count
    }

    /// Whether glyphs are drawn with swapped colours
    pub const fn is_inverted(&self) -> bool {
        self.inverted
    }

    /// Bytes per glyph row
    pub const fn row_stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Bytes per glyph
    pub const fn glyph_len(&self) -> usize {
        self.row_stride() * self.height as usize
    }

    /// Whether `code` falls inside the glyph range
    pub const fn covers(&self, code: u8) -> bool {
        code >= self.first && ((code - self.first) as u16) < self.count as u16
    }

    /// Raw bytes of one glyph
    pub fn glyph(&self, code: u8) -> Result<&'static [u8]> {
        if !self.covers(code) {
            return Err(Error::UnsupportedGlyph(code));
        }
        let start = (code - self.first) as usize * self.glyph_len();
        self.glyphs
            .get(start..start + self.glyph_len())
            .ok_or(Error::UnsupportedGlyph(code))
    }

    /// One glyph as a top-down 1 bpp bitmap
    pub fn glyph_bitmap(&self, code: u8) -> Result<BitmapSource<'static>> {
        let glyph = self.glyph(code)?;
        Ok(
            BitmapSource::new(glyph, self.width as u16, self.height as u16, PixelDepth::Mono)
                .with_row_order(RowOrder::TopDown),
        )
    }

    /// Colours to draw with, honouring the inversion flag
    pub const fn colors(&self, text: BiColor) -> BiColor {
        if self.inverted {
            text.swapped()
        } else {
            text
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::DEFAULT
    }
}

/// Named fonts plus the one currently used for text
#[derive(Debug, Clone)]
pub struct FontRegistry {
    fonts: LinearMap<&'static str, Font, FONT_SLOTS>,
    active: &'static str,
}

impl FontRegistry {
    /// Name the default font is registered under
    pub const DEFAULT_NAME: &'static str = "default";

    /// Fonts every registry starts with
    pub const BUILTIN: [(&'static str, Font); BUILTIN_FONTS] = [
        (Self::DEFAULT_NAME, Font::DEFAULT),
        ("seven_seg", Font::SEVEN_SEG),
        ("wide", Font::WIDE),
        ("retro", Font::RETRO),
        ("mega", Font::MEGA),
    ];

    /// Registry holding the built-in fonts, the default one active
    pub fn new() -> Self {
        let mut fonts = LinearMap::new();
        for (name, font) in Self::BUILTIN {
            // FONT_SLOTS leaves room for every built-in
            let _ = fonts.insert(name, font);
        }
        FontRegistry {
            fonts,
            active: Self::DEFAULT_NAME,
        }
    }

    /// Add a font, or replace the one registered under the same name
    pub fn register(&mut self, name: &'static str, font: Font) -> Result<()> {
        self.fonts
            .insert(name, font)
            .map(|_| ())
            .map_err(|_| Error::FontRegistryFull)
    }

    /// Make the named font active
    pub fn select(&mut self, name: &'static str) -> Result<()> {
        if !self.fonts.contains_key(&name) {
            return Err(Error::UnknownFont);
        }
        log::debug!("Font: {}", name);
        self.active = name;
        Ok(())
    }

    /// Look a font up by name
    pub fn get(&self, name: &str) -> Option<&Font> {
        self.fonts.iter().find(|(key, _)| **key == name).map(|(_, font)| font)
    }

    /// Active font
    pub fn active(&self) -> &Font {
        self.fonts.get(&self.active).unwrap_or(&FALLBACK)
    }

    /// Name of the active font
    pub fn active_name(&self) -> &'static str {
        self.active
    }

    /// Turn colour inversion of the active font on or off
    pub fn set_active_inverted(&mut self, inverted: bool) {
        if let Some(font) = self.fonts.get_mut(&self.active) {
            font.inverted = inverted;
        }
    }

    /// Registered fonts
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Never true; the built-in fonts are always registered
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl Default for FontRegistry {
    fn default() -> Self {
        FontRegistry::new()
    }
}

/// Text insertion point in rotated coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cursor {
    /// Column of the next cell
    pub x: u16,
    /// Row of the next cell
    pub y: u16,
}

impl Cursor {
    /// Cursor at the given position
    pub const fn new(x: u16, y: u16) -> Self {
        Cursor { x, y }
    }

    /// Position of the next cell, then step past it.
    ///
    /// A cell that would cross `line_width` goes to the start of the next line instead.
    pub fn place(&mut self, cell_width: u16, cell_height: u16, line_width: u16) -> (u16, u16) {
        if self.x as u32 + cell_width as u32 > line_width as u32 {
            self.newline(cell_height);
        }
        let at = (self.x, self.y);
        self.x = self.x.saturating_add(cell_width);
        at
    }

    /// Back to column 0, one cell lower
    pub fn newline(&mut self, cell_height: u16) {
        self.x = 0;
        self.y = self.y.saturating_add(cell_height);
    }
}
