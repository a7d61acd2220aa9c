//! Rotation and address window geometry
//!
//! The MADCTL register mirrors and exchanges the address counters in hardware, so once the
//! right bits are programmed the logical frame and the controller's address frame line up.
//! What is left for software is picking the bound for each axis and the start offsets that
//! place the visible glass inside the 240x320 frame memory.
use crate::config::{PanelConfig, StartOffsets, FRAME_MEMORY_HEIGHT, FRAME_MEMORY_WIDTH};
use crate::error::{Error, Result};
use crate::st7789::flag::Flag;

/// Panel orientation, clockwise from the native portrait position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    /// Native portrait
    #[default]
    Deg0,
    /// Landscape
    Deg90,
    /// Portrait, upside down
    Deg180,
    /// Landscape, upside down
    Deg270,
}

impl Rotation {
    /// All rotations in clockwise order
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// Rotation from quarter turns; anything above 3 wraps around.
    pub const fn from_quarter_turns(turns: u8) -> Self {
        match turns % 4 {
            0 => Rotation::Deg0,
            1 => Rotation::Deg90,
            2 => Rotation::Deg180,
            _ => Rotation::Deg270,
        }
    }

    /// True when logical width and height are the native height and width
    pub const fn swaps_axes(self) -> bool {
        self.orientation().swap_axes
    }

    /// MADCTL bits that put the address counters in this orientation
    pub const fn madctl(self) -> u8 {
        self.orientation().madctl
    }

    const fn orientation(self) -> Orientation {
        ORIENTATIONS[self as usize]
    }
}

/// Which of the four start offsets feeds an axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Start {
    Col,
    Col2,
    Row,
    Row2,
}

impl Start {
    const fn pick(self, offsets: &StartOffsets) -> u16 {
        match self {
            Start::Col => offsets.col_start,
            Start::Col2 => offsets.col_start2,
            Start::Row => offsets.row_start,
            Start::Row2 => offsets.row_start2,
        }
    }
}

#[derive(Clone, Copy)]
struct Orientation {
    madctl: u8,
    swap_axes: bool,
    col: Start,
    row: Start,
}

const ORIENTATIONS: [Orientation; 4] = [
    Orientation {
        madctl: Flag::MADCTL_MX | Flag::MADCTL_MY | Flag::MADCTL_RGB,
        swap_axes: false,
        col: Start::Col,
        row: Start::Row,
    },
    Orientation {
        madctl: Flag::MADCTL_MY | Flag::MADCTL_MV | Flag::MADCTL_RGB,
        swap_axes: true,
        col: Start::Row,
        row: Start::Col2,
    },
    Orientation {
        madctl: Flag::MADCTL_RGB,
        swap_axes: false,
        col: Start::Col2,
        row: Start::Row2,
    },
    Orientation {
        madctl: Flag::MADCTL_MX | Flag::MADCTL_MV | Flag::MADCTL_RGB,
        swap_axes: true,
        col: Start::Row2,
        row: Start::Col,
    },
];

/// Rectangle in rotated (logical) pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left edge
    pub x: u16,
    /// Top edge
    pub y: u16,
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl Rect {
    /// Rectangle from its top-left corner and size
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Number of pixels covered
    pub const fn area(&self) -> u32 {
        self.width as u32 * self.height as u32
    }
}

/// Physical rectangle in controller memory, ends inclusive as CASET/RASET expect them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddressWindow {
    /// First column
    pub col_start: u16,
    /// Last column
    pub col_end: u16,
    /// First row
    pub row_start: u16,
    /// Last row
    pub row_end: u16,
}

impl AddressWindow {
    /// CASET parameter bytes
    pub const fn column_bytes(&self) -> [u8; 4] {
        be_pair(self.col_start, self.col_end)
    }

    /// RASET parameter bytes
    pub const fn row_bytes(&self) -> [u8; 4] {
        be_pair(self.row_start, self.row_end)
    }

    /// Number of pixels the window accepts after RAMWR
    pub const fn pixel_count(&self) -> u32 {
        (self.col_end - self.col_start + 1) as u32 * (self.row_end - self.row_start + 1) as u32
    }
}

const fn be_pair(start: u16, end: u16) -> [u8; 4] {
    let s = start.to_be_bytes();
    let e = end.to_be_bytes();
    [s[0], s[1], e[0], e[1]]
}

/// Panel size, start offsets and current rotation: everything the window transform needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    native_width: u16,
    native_height: u16,
    offsets: StartOffsets,
    rotation: Rotation,
}

impl Geometry {
    /// Geometry of a panel in its native orientation
    pub const fn new(panel: &PanelConfig) -> Self {
        Geometry {
            native_width: panel.width,
            native_height: panel.height,
            offsets: panel.start_offsets(),
            rotation: Rotation::Deg0,
        }
    }

    /// Current rotation
    pub const fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Change rotation. Pure bookkeeping; the driver emits MADCTL.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Native (portrait) width and height
    pub const fn native_size(&self) -> (u16, u16) {
        (self.native_width, self.native_height)
    }

    /// Logical width and height for the current rotation
    pub const fn size(&self) -> (u16, u16) {
        if self.rotation.swaps_axes() {
            (self.native_height, self.native_width)
        } else {
            (self.native_width, self.native_height)
        }
    }

    /// Logical width
    pub const fn width(&self) -> u16 {
        self.size().0
    }

    /// Logical height
    pub const fn height(&self) -> u16 {
        self.size().1
    }

    /// Whole screen in logical coordinates
    pub const fn full_screen(&self) -> Rect {
        let (width, height) = self.size();
        Rect::new(0, 0, width, height)
    }

    /// Column and row offsets for the current rotation
    pub const fn origin(&self) -> (u16, u16) {
        let orientation = self.rotation.orientation();
        (
            orientation.col.pick(&self.offsets),
            orientation.row.pick(&self.offsets),
        )
    }

    /// Map a logical rectangle onto controller memory.
    ///
    /// Fails with [`Error::OutOfBounds`] when the rectangle is empty, sticks out of the
    /// rotated panel, or the offsets push it past the frame memory.
    pub fn window(&self, rect: &Rect) -> Result<AddressWindow> {
        if rect.width == 0 || rect.height == 0 {
            return Err(Error::OutOfBounds);
        }
        let (width, height) = self.size();
        let x_end = rect.x as u32 + rect.width as u32;
        let y_end = rect.y as u32 + rect.height as u32;
        if x_end > width as u32 || y_end > height as u32 {
            return Err(Error::OutOfBounds);
        }

        let (col_origin, row_origin) = self.origin();
        let col_start = rect.x as u32 + col_origin as u32;
        let row_start = rect.y as u32 + row_origin as u32;
        let col_end = col_start + rect.width as u32 - 1;
        let row_end = row_start + rect.height as u32 - 1;

        let (frame_cols, frame_rows) = if self.rotation.swaps_axes() {
            (FRAME_MEMORY_HEIGHT, FRAME_MEMORY_WIDTH)
        } else {
            (FRAME_MEMORY_WIDTH, FRAME_MEMORY_HEIGHT)
        };
        if col_end >= frame_cols as u32 || row_end >= frame_rows as u32 {
            return Err(Error::OutOfBounds);
        }

        Ok(AddressWindow {
            col_start: col_start as u16,
            col_end: col_end as u16,
            row_start: row_start as u16,
            row_end: row_end as u16,
        })
    }
}
