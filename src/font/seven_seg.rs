//! Seven segment 5x8 font
//!
//! Digits plus `-`, `.` and `:` drawn as segments: three-pixel bars on rows 0, 3 and 6,
//! two-pixel uprights in columns 0 and 4. Same row layout as the default table.

/// First character code in the table, `-`
pub const FIRST: u8 = b'-';

/// Glyphs in the table (`-` through `:`)
pub const COUNT: u8 = 14;

/// Glyph bitmaps, 8 bytes each
pub static GLYPHS: [u8; COUNT as usize * 8] = [
    0x00, 0x00, 0x00, 0x70, 0x00, 0x00, 0x00, 0x00, // -
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x00, // .
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // / (blank)
    0x70, 0x88, 0x88, 0x00, 0x88, 0x88, 0x70, 0x00, // 0
    0x00, 0x08, 0x08, 0x00, 0x08, 0x08, 0x00, 0x00, // 1
    0x70, 0x08, 0x08, 0x70, 0x80, 0x80, 0x70, 0x00, // 2
    0x70, 0x08, 0x08, 0x70, 0x08, 0x08, 0x70, 0x00, // 3
    0x00, 0x88, 0x88, 0x70, 0x08, 0x08, 0x00, 0x00, // 4
    0x70, 0x80, 0x80, 0x70, 0x08, 0x08, 0x70, 0x00, // 5
    0x70, 0x80, 0x80, 0x70, 0x88, 0x88, 0x70, 0x00, // 6
    0x70, 0x08, 0x08, 0x00, 0x08, 0x08, 0x00, 0x00, // 7
    0x70, 0x88, 0x88, 0x70, 0x88, 0x88, 0x70, 0x00, // 8
    0x70, 0x88, 0x88, 0x70, 0x08, 0x08, 0x70, 0x00, // 9
    0x00, 0x00, 0x20, 0x00, 0x20, 0x00, 0x00, 0x00, // :
];
