//! Panel configuration
//!
//! ST7789 controllers carry a 240x320 frame memory regardless of the glass glued on top.
//! Smaller panels only expose part of it, so every panel size maps to a set of start
//! offsets into that memory. Modules with assembly tolerance can be nudged further with
//! the column/row offsets.

/// Frame memory columns of the controller
pub const FRAME_MEMORY_WIDTH: u16 = 240;

/// Frame memory rows of the controller
pub const FRAME_MEMORY_HEIGHT: u16 = 320;

/// Panel as manufactured, in its native portrait orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelConfig {
    /// Native width in pixels
    pub width: u16,
    /// Native height in pixels
    pub height: u16,
    /// Extra column offset for panels mounted off-centre
    pub col_offset: u16,
    /// Extra row offset for panels mounted off-centre
    pub row_offset: u16,
    /// Send INVON during initialization. IPS panels need it for correct colours.
    pub invert: bool,
}

impl PanelConfig {
    /// 2.0" and 2.4" 240x320 modules
    pub const ST7789_240X320: PanelConfig = PanelConfig::new(240, 320);

    /// 1.3" and 1.54" 240x240 modules
    pub const ST7789_240X240: PanelConfig = PanelConfig::new(240, 240);

    /// 1.14" 135x240 modules
    pub const ST7789_135X240: PanelConfig = PanelConfig::new(135, 240);

    /// 1.69" 240x280 modules
    pub const ST7789_240X280: PanelConfig = PanelConfig::new(240, 280);

    /// Panel of the given native size, no extra offsets, inversion on
    pub const fn new(width: u16, height: u16) -> Self {
        PanelConfig {
            width,
            height,
            col_offset: 0,
            row_offset: 0,
            invert: true,
        }
    }

    /// Same panel with manufacturing offsets
    pub const fn with_offsets(mut self, col_offset: u16, row_offset: u16) -> Self {
        self.col_offset = col_offset;
        self.row_offset = row_offset;
        self
    }

    /// Same panel with inversion on or off at init
    pub const fn with_inversion(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Whether the panel fits the controller's frame memory
    pub const fn fits_frame_memory(&self) -> bool {
        self.width > 0
            && self.height > 0
            && self.width <= FRAME_MEMORY_WIDTH
            && self.height <= FRAME_MEMORY_HEIGHT
    }

    /// Start offsets into the frame memory for this panel size, user offsets included
    pub const fn start_offsets(&self) -> StartOffsets {
        let spare_cols = FRAME_MEMORY_WIDTH.saturating_sub(self.width);
        let spare_rows = FRAME_MEMORY_HEIGHT.saturating_sub(self.height);

        let base = if self.width == 240 && self.height == 240 {
            // Glass sits at the bottom of the memory when scanned in the default direction
            StartOffsets {
                col_start: 0,
                row_start: spare_rows,
                col_start2: 0,
                row_start2: 0,
            }
        } else if self.width == 135 && self.height == 240 {
            StartOffsets {
                col_start: (spare_cols + 1) / 2,
                row_start: spare_rows / 2,
                col_start2: spare_cols / 2,
                row_start2: spare_rows / 2,
            }
        } else {
            StartOffsets {
                col_start: spare_cols / 2,
                row_start: spare_rows / 2,
                col_start2: spare_cols / 2,
                row_start2: spare_rows / 2,
            }
        };

        StartOffsets {
            col_start: base.col_start + self.col_offset,
            row_start: base.row_start + self.row_offset,
            col_start2: base.col_start2 + self.col_offset,
            row_start2: base.row_start2 + self.row_offset,
        }
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        PanelConfig::ST7789_240X320
    }
}

/// Offsets of the visible glass inside the frame memory.
///
/// `col_start`/`row_start` apply when the scan starts from the far edge (mirrored
/// orientations), `col_start2`/`row_start2` when it starts from the near edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StartOffsets {
    /// Columns skipped from the left
    pub col_start: u16,
    /// Rows skipped from the top
    pub row_start: u16,
    /// Columns skipped from the right
    pub col_start2: u16,
    /// Rows skipped from the bottom
    pub row_start2: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_size_panel_has_no_offsets() {
        assert_eq!(
            PanelConfig::ST7789_240X320.start_offsets(),
            StartOffsets::default()
        );
    }

    #[test]
    fn square_panel_sits_at_bottom_of_memory() {
        let offsets = PanelConfig::ST7789_240X240.start_offsets();
        assert_eq!(offsets.row_start, 80);
        assert_eq!(offsets.row_start2, 0);
        assert_eq!(offsets.col_start, 0);
    }

    #[test]
    fn narrow_panel_is_centred() {
        let offsets = PanelConfig::ST7789_135X240.start_offsets();
        assert_eq!(offsets.col_start, 53);
        assert_eq!(offsets.col_start2, 52);
        assert_eq!(offsets.row_start, 40);
        assert_eq!(offsets.row_start2, 40);
    }

    #[test]
    fn user_offsets_are_added() {
        let offsets = PanelConfig::ST7789_240X280.with_offsets(2, 3).start_offsets();
        assert_eq!(offsets.col_start, 2);
        assert_eq!(offsets.row_start, 20 + 3);
    }

    #[test]
    fn oversized_panel_does_not_fit() {
        assert!(!PanelConfig::new(320, 480).fits_frame_memory());
        assert!(!PanelConfig::new(0, 240).fits_frame_memory());
        assert!(PanelConfig::ST7789_135X240.fits_frame_memory());
    }
}
