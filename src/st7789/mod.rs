//! ST7789 controller protocol
//!
//! [`cmd`] and [`flag`] hold the datasheet constants, [`interface`] the transport the
//! driver writes through, and [`driver`] the lifecycle and addressing logic.

pub mod cmd;
pub mod driver;
pub mod flag;
pub mod interface;
