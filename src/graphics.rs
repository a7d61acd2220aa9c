//! Drawing façade
//!
//! [`Tft`] owns the controller driver, the font registry, the text cursor and the text
//! colours, and exposes the drawing primitives on top of them. Every primitive resolves
//! to one or more validated address windows followed by a pixel stream; nothing is
//! written when validation fails.
//!
//! `Tft` is also an `embedded-graphics` [`DrawTarget`], so its shapes, fonts and images
//! render through the same window path.
use core::fmt;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};

use crate::bitmap::{BitmapSource, PixelDepth, RowOrder};
use crate::color::{BiColor, Color};
use crate::config::PanelConfig;
use crate::error::{Error, Result};
use crate::font::{Cursor, Font, FontRegistry};
use crate::st7789::driver::St7789;
use crate::st7789::interface::Transport;
use crate::window::{Rect, Rotation};

/// ST7789 panel with drawing and text state
pub struct Tft<T> {
    driver: St7789<T>,
    fonts: FontRegistry,
    cursor: Cursor,
    text_colors: BiColor,
}

impl<T> Tft<T>
where
    T: Transport,
{
    /// Wrap a transport. Call [`initialize`](Self::initialize) before drawing.
    pub fn new(transport: T, panel: PanelConfig) -> Self {
        Tft::from_driver(St7789::new(transport, panel))
    }

    /// Build on an existing driver
    pub fn from_driver(driver: St7789<T>) -> Self {
        Tft {
            driver,
            fonts: FontRegistry::new(),
            cursor: Cursor::default(),
            text_colors: BiColor::default(),
        }
    }

    /// Run the controller init sequence
    pub fn initialize(&mut self) -> Result<()> {
        self.driver.initialize()
    }

    /// Rotate the logical frame
    pub fn set_rotation(&mut self, rotation: Rotation) -> Result<()> {
        self.driver.set_rotation(rotation)
    }

    /// Controller driver, for power, sleep, scroll and mode control
    pub fn driver(&self) -> &St7789<T> {
        &self.driver
    }

    /// Controller driver, mutably
    pub fn driver_mut(&mut self) -> &mut St7789<T> {
        &mut self.driver
    }

    /// Give the transport back
    pub fn release(self) -> T {
        self.driver.release()
    }

    /// Logical width
    pub fn width(&self) -> u16 {
        self.driver.size().0
    }

    /// Logical height
    pub fn height(&self) -> u16 {
        self.driver.size().1
    }

    // ==================== Primitives ====================

    /// One pixel
    pub fn draw_pixel(&mut self, x: u16, y: u16, color: Color) -> Result<()> {
        self.fill_rect(x, y, 1, 1, color)
    }

    /// Horizontal line `w` pixels long
    pub fn draw_fast_hline(&mut self, x: u16, y: u16, w: u16, color: Color) -> Result<()> {
        self.fill_rect(x, y, w, 1, color)
    }

    /// Vertical line `h` pixels long
    pub fn draw_fast_vline(&mut self, x: u16, y: u16, h: u16, color: Color) -> Result<()> {
        self.fill_rect(x, y, 1, h, color)
    }

    /// Solid rectangle
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) -> Result<()> {
        self.driver.fill_rect(&Rect::new(x, y, w, h), color)
    }

    /// Whole screen in one colour
    pub fn fill_screen(&mut self, color: Color) -> Result<()> {
        let screen = self.driver.config().geometry().full_screen();
        self.driver.fill_rect(&screen, color)
    }

    /// Rectangle outline
    pub fn draw_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) -> Result<()> {
        self.check_rect(&Rect::new(x, y, w, h))?;
        self.draw_fast_hline(x, y, w, color)?;
        if h > 1 {
            self.draw_fast_hline(x, y + h - 1, w, color)?;
        }
        if h > 2 {
            self.draw_fast_vline(x, y + 1, h - 2, color)?;
            if w > 1 {
                self.draw_fast_vline(x + w - 1, y + 1, h - 2, color)?;
            }
        }
        Ok(())
    }

    /// Straight line between two points, both ends included
    pub fn draw_line(&mut self, x0: u16, y0: u16, x1: u16, y1: u16, color: Color) -> Result<()> {
        self.check_rect(&Rect::new(x0, y0, 1, 1))?;
        self.check_rect(&Rect::new(x1, y1, 1, 1))?;

        if y0 == y1 {
            let x = x0.min(x1);
            return self.draw_fast_hline(x, y0, x0.abs_diff(x1) + 1, color);
        }
        if x0 == x1 {
            let y = y0.min(y1);
            return self.draw_fast_vline(x0, y, y0.abs_diff(y1) + 1, color);
        }

        // Bresenham
        let (mut x, mut y) = (x0 as i32, y0 as i32);
        let (x1, y1) = (x1 as i32, y1 as i32);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.draw_pixel(x as u16, y as u16, color)?;
            if x == x1 && y == y1 {
                return Ok(());
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// 1 bpp bitmap, row-major, MSB left, rows padded to a byte, first row on top
    pub fn draw_bitmap(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        bitmap: &[u8],
        colors: BiColor,
    ) -> Result<()> {
        let source =
            BitmapSource::new(bitmap, w, h, PixelDepth::Mono).with_row_order(RowOrder::TopDown);
        let pixels = source.decode(colors)?;
        self.driver.draw_pixels(&Rect::new(x, y, w, h), pixels)
    }

    /// Already decoded RGB565 pixels, row-major, first row on top
    pub fn draw_bitmap16(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
        pixels: &[Color],
    ) -> Result<()> {
        let count = w as usize * h as usize;
        if pixels.len() < count {
            return Err(Error::BufferTooSmall {
                needed: count.saturating_mul(2),
                actual: pixels.len().saturating_mul(2),
            });
        }
        self.driver
            .draw_pixels(&Rect::new(x, y, w, h), pixels.iter().copied())
    }

    /// Red, green, blue byte triplets, row-major, first row on top
    pub fn draw_bitmap24(&mut self, x: u16, y: u16, w: u16, h: u16, data: &[u8]) -> Result<()> {
        let needed = (w as usize * h as usize).saturating_mul(3);
        if data.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                actual: data.len(),
            });
        }
        let pixels = data[..needed]
            .chunks_exact(3)
            .map(|rgb| Color::from_rgb888(rgb[0], rgb[1], rgb[2]));
        self.driver.draw_pixels(&Rect::new(x, y, w, h), pixels)
    }

    /// Raw pixel array through the bitmap decoder. 1 bpp sources use the text colours.
    pub fn draw_image(&mut self, x: u16, y: u16, source: &BitmapSource<'_>) -> Result<()> {
        let pixels = source.decode(self.text_colors)?;
        let rect = Rect::new(x, y, source.width(), source.height());
        self.driver.draw_pixels(&rect, pixels)
    }

    /// Icon of `w` columns, 8 pixels tall, one byte per column, bit 0 on top
    pub fn draw_icon(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        icon: &[u8],
        colors: BiColor,
    ) -> Result<()> {
        let columns = w as usize;
        if icon.len() < columns {
            return Err(Error::BufferTooSmall {
                needed: columns,
                actual: icon.len(),
            });
        }
        let icon = &icon[..columns];
        let pixels = (0..8u8).flat_map(move |row| {
            icon.iter()
                .map(move |column| colors.pick(*column & (1u8 << row) != 0))
        });
        self.driver.draw_pixels(&Rect::new(x, y, w, 8), pixels)
    }

    // ==================== Text ====================

    /// Move the text cursor
    pub fn set_cursor(&mut self, x: u16, y: u16) {
        self.cursor = Cursor::new(x, y);
    }

    /// Text cursor
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Foreground and background used for glyphs
    pub fn set_text_color(&mut self, foreground: Color, background: Color) {
        self.text_colors = BiColor::new(foreground, background);
    }

    /// Current text colours
    pub fn text_colors(&self) -> BiColor {
        self.text_colors
    }

    /// Add a font under `name`
    pub fn register_font(&mut self, name: &'static str, font: Font) -> Result<()> {
        self.fonts.register(name, font)
    }

    /// Switch the active font
    pub fn set_font(&mut self, name: &'static str) -> Result<()> {
        self.fonts.select(name)
    }

    /// Swap colours for every glyph of the active font
    pub fn set_font_inverted(&mut self, inverted: bool) {
        self.fonts.set_active_inverted(inverted);
    }

    /// Active font
    pub fn font(&self) -> &Font {
        self.fonts.active()
    }

    /// Font registry
    pub fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// One glyph at a fixed position. The cursor does not move.
    pub fn draw_char(&mut self, x: u16, y: u16, code: u8) -> Result<()> {
        let font = *self.fonts.active();
        self.draw_glyph(&font, x, y, code)
    }

    /// Bytes as character codes, starting at (`x`, `y`).
    ///
    /// Codes the active font has no glyph for are skipped, the cursor still advances one
    /// cell for them.
    pub fn write_char_string(&mut self, x: u16, y: u16, text: &[u8]) -> Result<()> {
        self.set_cursor(x, y);
        text.iter().try_for_each(|code| self.write_code(Some(*code)))
    }

    /// Render anything `Display` at the cursor
    pub fn print<D: fmt::Display>(&mut self, value: D) -> Result<()> {
        let mut writer = TextWriter {
            tft: self,
            error: None,
        };
        // a formatting error without a draw error comes from `value` itself
        let _ = fmt::write(&mut writer, format_args!("{}", value));
        writer.error.map_or(Ok(()), Err)
    }

    fn put_char(&mut self, c: char) -> Result<()> {
        match c {
            '\n' => {
                let height = self.fonts.active().height() as u16;
                self.cursor.newline(height);
                Ok(())
            }
            '\r' => {
                self.cursor.x = 0;
                Ok(())
            }
            _ => self.write_code(u8::try_from(c).ok()),
        }
    }

    fn write_code(&mut self, code: Option<u8>) -> Result<()> {
        let font = *self.fonts.active();
        let width = self.width();
        let mut cursor = self.cursor;
        let (x, y) = cursor.place(font.width() as u16, font.height() as u16, width);
        let drawn = match code {
            Some(code) => self.draw_glyph(&font, x, y, code),
            None => Ok(()),
        };
        // the cursor only moves once the cell is drawn or skipped
        match drawn {
            Ok(()) | Err(Error::UnsupportedGlyph(_)) => {
                self.cursor = cursor;
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    fn draw_glyph(&mut self, font: &Font, x: u16, y: u16, code: u8) -> Result<()> {
        let bitmap = font.glyph_bitmap(code)?;
        let pixels = bitmap.decode(font.colors(self.text_colors))?;
        let rect = Rect::new(x, y, font.width() as u16, font.height() as u16);
        self.driver.draw_pixels(&rect, pixels)
    }

    fn check_rect(&self, rect: &Rect) -> Result<()> {
        self.driver.config().geometry().window(rect).map(|_| ())
    }
}

struct TextWriter<'a, T> {
    tft: &'a mut Tft<T>,
    error: Option<Error>,
}

impl<T: Transport> fmt::Write for TextWriter<'_, T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if let Err(err) = self.tft.put_char(c) {
                self.error = Some(err);
                return Err(fmt::Error);
            }
        }
        Ok(())
    }
}

impl<T: Transport> fmt::Write for Tft<T> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        s.chars()
            .try_for_each(|c| self.put_char(c))
            .map_err(|_| fmt::Error)
    }
}

impl<T: Transport> OriginDimensions for Tft<T> {
    fn size(&self) -> Size {
        let (width, height) = self.driver.size();
        Size::new(width as u32, height as u32)
    }
}

impl<T: Transport> DrawTarget for Tft<T> {
    type Color = Rgb565;
    type Error = Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<()>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = self.bounding_box();
        for Pixel(point, color) in pixels {
            if bounds.contains(point) {
                self.draw_pixel(point.x as u16, point.y as u16, color.into())?;
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<()>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        let drawable = area.intersection(&self.bounding_box());
        if drawable.is_zero_sized() {
            return Ok(());
        }
        if drawable == *area {
            let rect = to_rect(area);
            return self
                .driver
                .draw_pixels(&rect, colors.into_iter().map(Color::from));
        }
        self.draw_iter(
            area.points()
                .zip(colors)
                .map(|(point, color)| Pixel(point, color)),
        )
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<()> {
        let drawable = area.intersection(&self.bounding_box());
        if drawable.is_zero_sized() {
            return Ok(());
        }
        self.driver.fill_rect(&to_rect(&drawable), color.into())
    }

    fn clear(&mut self, color: Self::Color) -> Result<()> {
        self.fill_screen(color.into())
    }
}

// Only called with rectangles already clipped to the screen
fn to_rect(area: &Rectangle) -> Rect {
    Rect::new(
        area.top_left.x as u16,
        area.top_left.y as u16,
        area.size.width as u16,
        area.size.height as u16,
    )
}
