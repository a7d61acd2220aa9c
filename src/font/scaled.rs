//! Larger fonts derived from the 6x8 table at compile time
//!
//! Rows are doubled by repeating each row byte, columns by spreading every bit over two.
//! A doubled row is 12 pixels wide and takes two bytes, so the wide fonts exercise the
//! multi-byte row layout.

use super::default;

const DEFAULT_COUNT: usize = default::COUNT as usize;

/// Glyphs in the wide table, space through `Z`
pub const WIDE_COUNT: u8 = b'Z' - default::FIRST + 1;

/// 8x16: every row twice
pub static RETRO: [u8; DEFAULT_COUNT * 16] = double_rows(&default::GLYPHS);

/// 12x8, two bytes per row: every column twice, no lowercase
pub static WIDE: [u8; WIDE_COUNT as usize * 16] = double_columns(&default::GLYPHS);

/// 16x16, two bytes per row: every pixel as a 2x2 block
pub static MEGA: [u8; DEFAULT_COUNT * 32] = double_both(&default::GLYPHS);

/// Spread the 8 bits of `row` over 16, leftmost pixel still in the top bit
const fn widen(row: u8) -> [u8; 2] {
    let mut out = 0u16;
    let mut bit = 0;
    while bit < 8 {
        if row & (1 << bit) != 0 {
            out |= 0b11 << (bit * 2);
        }
        bit += 1;
    }
    out.to_be_bytes()
}

const fn double_rows<const N: usize, const M: usize>(rows: &[u8; N]) -> [u8; M] {
    let mut out = [0u8; M];
    let mut i = 0;
    while i < M / 2 {
        out[2 * i] = rows[i];
        out[2 * i + 1] = rows[i];
        i += 1;
    }
    out
}

const fn double_columns<const N: usize, const M: usize>(rows: &[u8; N]) -> [u8; M] {
    let mut out = [0u8; M];
    let mut i = 0;
    while i < M / 2 {
        let [high, low] = widen(rows[i]);
        out[2 * i] = high;
        out[2 * i + 1] = low;
        i += 1;
    }
    out
}

const fn double_both<const N: usize, const M: usize>(rows: &[u8; N]) -> [u8; M] {
    let mut out = [0u8; M];
    let mut i = 0;
    while i < M / 4 {
        let [high, low] = widen(rows[i]);
        out[4 * i] = high;
        out[4 * i + 1] = low;
        out[4 * i + 2] = high;
        out[4 * i + 3] = low;
        i += 1;
    }
    out
}
