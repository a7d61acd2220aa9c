//! Decoder for raw uncompressed bitmap pixel arrays
//!
//! The caller owns the file handling: it hands over the bytes, the dimensions, the depth
//! and the offset of the first pixel row (e.g. a BMP `bfOffBits`). The decoder checks the
//! buffer covers every row before yielding anything, then produces colours top-down,
//! left-to-right, ready for a single window write.
//!
//! Storage formats:
//! - 1 bpp: row-major, most significant bit is the leftmost pixel, rows padded to a byte
//! - 16 bpp: little-endian RGB565 words
//! - 24 bpp: blue, green, red byte triplets
//!
//! Rows are not padded to 4 bytes.
use core::iter::FusedIterator;

use crate::color::{BiColor, Color};
use crate::error::{Error, Result};

/// Bits per stored pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelDepth {
    /// 1 bit per pixel, two colours
    Mono,
    /// 16 bit RGB565
    Rgb565,
    /// 24 bit true colour
    Rgb888,
}

impl PixelDepth {
    /// Bits per pixel
    pub const fn bits(self) -> u8 {
        match self {
            PixelDepth::Mono => 1,
            PixelDepth::Rgb565 => 16,
            PixelDepth::Rgb888 => 24,
        }
    }

    /// Bytes per stored row for the given width
    pub const fn row_stride(self, width: u16) -> usize {
        match self {
            PixelDepth::Mono => (width as usize).div_ceil(8),
            PixelDepth::Rgb565 => width as usize * 2,
            PixelDepth::Rgb888 => width as usize * 3,
        }
    }
}

/// Order of rows in storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RowOrder {
    /// Last screen row stored first, as in BMP files
    #[default]
    BottomUp,
    /// First screen row stored first
    TopDown,
}

/// Borrowed pixel array plus the metadata needed to read it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitmapSource<'a> {
    data: &'a [u8],
    width: u16,
    height: u16,
    depth: PixelDepth,
    header_offset: usize,
    row_order: RowOrder,
}

impl<'a> BitmapSource<'a> {
    /// Pixel array starting at byte 0, stored bottom-up
    pub const fn new(data: &'a [u8], width: u16, height: u16, depth: PixelDepth) -> Self {
        BitmapSource {
            data,
            width,
            height,
            depth,
            header_offset: 0,
            row_order: RowOrder::BottomUp,
        }
    }

    /// Skip `offset` bytes of header before the first row
    pub const fn with_header_offset(mut self, offset: usize) -> Self {
        self.header_offset = offset;
        self
    }

    /// Set the storage row order
    pub const fn with_row_order(mut self, row_order: RowOrder) -> Self {
        self.row_order = row_order;
        self
    }

    /// Width in pixels
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Stored depth
    pub const fn depth(&self) -> PixelDepth {
        self.depth
    }

    /// Bytes per stored row
    pub const fn stride(&self) -> usize {
        self.depth.row_stride(self.width)
    }

    /// Buffer length needed to cover the header and every row, saturating at `usize::MAX`
    pub const fn required_len(&self) -> usize {
        self.header_offset
            .saturating_add(self.stride().saturating_mul(self.height as usize))
    }

    /// Check the buffer, then iterate the pixels in screen order.
    ///
    /// `colors` only matters for 1 bpp sources.
    pub fn decode(&self, colors: BiColor) -> Result<Pixels<'a>> {
        let needed = self.required_len();
        if self.data.len() < needed {
            return Err(Error::BufferTooSmall {
                needed,
                actual: self.data.len(),
            });
        }
        Ok(Pixels {
            source: *self,
            colors,
            index: 0,
            total: self.width as usize * self.height as usize,
        })
    }
}

/// Decoded pixels of a [`BitmapSource`], top-down, left-to-right
#[derive(Debug, Clone)]
pub struct Pixels<'a> {
    source: BitmapSource<'a>,
    colors: BiColor,
    index: usize,
    total: usize,
}

impl Pixels<'_> {
    fn pixel(&self, row: usize, col: usize) -> Color {
        let src = &self.source;
        let stored_row = match src.row_order {
            RowOrder::TopDown => row,
            RowOrder::BottomUp => src.height as usize - 1 - row,
        };
        let base = src.header_offset + stored_row * src.stride();
        let data = src.data;
        match src.depth {
            PixelDepth::Mono => {
                let byte = data[base + col / 8];
                self.colors.pick(byte & (0x80 >> (col % 8)) != 0)
            }
            PixelDepth::Rgb565 => {
                let at = base + col * 2;
                Color::from_raw(u16::from_le_bytes([data[at], data[at + 1]]))
            }
            PixelDepth::Rgb888 => {
                let at = base + col * 3;
                Color::from_rgb888(data[at + 2], data[at + 1], data[at])
            }
        }
    }
}

impl Iterator for Pixels<'_> {
    type Item = Color;

    fn next(&mut self) -> Option<Color> {
        if self.index >= self.total {
            return None;
        }
        let width = self.source.width as usize;
        let color = self.pixel(self.index / width, self.index % width);
        self.index += 1;
        Some(color)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.total - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pixels<'_> {}
impl FusedIterator for Pixels<'_> {}
