//! Error type shared by the controller, decoder and renderer

pub use display_interface::DisplayError;

/// Everything that can go wrong while talking to the panel or preparing pixels for it.
///
/// Validation errors (`OutOfBounds`, `BufferTooSmall`, ...) are always raised before
/// anything is written to the transport, so a failed call leaves the controller untouched.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The transport failed mid-call. The driver instance stays usable, the call may be retried.
    #[error("transport fault: {0:?}")]
    TransportFault(DisplayError),

    /// Requested geometry falls outside the rotated panel.
    #[error("geometry outside the panel bounds")]
    OutOfBounds,

    /// The controller is uninitialized, sleeping or powered down.
    #[error("display is not ready")]
    NotReady,

    /// Character code outside the active font's glyph range.
    #[error("no glyph for character code 0x{0:02X}")]
    UnsupportedGlyph(u8),

    /// Pixel buffer shorter than its declared dimensions need.
    #[error("buffer too small: {needed} bytes needed, {actual} supplied")]
    BufferTooSmall {
        /// Bytes required by the header offset and dimensions
        needed: usize,
        /// Bytes actually supplied
        actual: usize,
    },

    /// No font is registered under the requested name.
    #[error("no font registered under that name")]
    UnknownFont,

    /// The font registry has no free slot left.
    #[error("font registry is full")]
    FontRegistryFull,
}

// DisplayError has no PartialEq, transport faults compare by variant
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::TransportFault(a), Error::TransportFault(b)) => {
                core::mem::discriminant(a) == core::mem::discriminant(b)
            }
            (
                Error::BufferTooSmall { needed, actual },
                Error::BufferTooSmall {
                    needed: other_needed,
                    actual: other_actual,
                },
            ) => needed == other_needed && actual == other_actual,
            (Error::UnsupportedGlyph(a), Error::UnsupportedGlyph(b)) => a == b,
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

impl Eq for Error {}

impl From<DisplayError> for Error {
    fn from(err: DisplayError) -> Self {
        Error::TransportFault(err)
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = Error> = core::result::Result<T, E>;
