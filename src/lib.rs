//! ST7789 TFT Display Driver
//!
//! Driver and rendering engine for the Sitronix ST7789 colour TFT controller found on
//! the common 240x320, 240x280, 240x240 and 135x240 SPI modules.
//!
//! The controller protocol lives in [`st7789`]: the opcode and parameter tables, the
//! [`Transport`] port with its `embedded-hal` SPI implementation, and the [`St7789`]
//! state machine. On top of that, [`Tft`] keeps the text state and offers the drawing
//! primitives; it is also an `embedded-graphics` draw target.
//!
//!
//! ### Usage
//! 1. wrap the SPI device, data/command pin, reset pin and a delay in a [`SpiInterface`]
//! 1. create a [`Tft`] with the [`PanelConfig`] matching the module and call
//!    [`Tft::initialize`]
//! 1. draw with the primitives, print text, or hand the display to `embedded-graphics`
//!
//! Every call returns a [`Result`]. Geometry and buffer problems are reported before
//! anything goes out on the bus.
//!
//!
#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![allow(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]

pub mod bitmap;
pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod graphics;
pub mod st7789;
pub mod window;

#[cfg(test)]
mod mocks;

pub use crate::bitmap::{BitmapSource, PixelDepth, RowOrder};
pub use crate::color::{BiColor, Color};
pub use crate::config::PanelConfig;
pub use crate::error::{DisplayError, Error, Result};
pub use crate::font::{Cursor, Font, FontRegistry};
pub use crate::graphics::Tft;
pub use crate::st7789::driver::{PowerState, ScrollDirection, St7789};
pub use crate::st7789::interface::{SpiInterface, Transport};
pub use crate::window::{Rect, Rotation};
