//! ST7789 controller driver
//!
//! Sequences the controller through its lifecycle and owns the runtime configuration
//! (rotation, power and mode flags, scroll direction).
//!
//! ## States
//!
//! - `Uninitialized` - after construction, a failed init or `power_down()`
//! - `Initializing` - while the init command list is being sent
//! - `Active` - ready for drawing
//! - `Sleeping` - sleep mode, configuration still accepted, drawing refused
//!
//! Inversion, partial, idle and display-on are independent flags inside `Active`, not
//! separate states.
//!
//! ## Pixel path
//!
//! Every pixel write goes through [`St7789::set_window`], which validates the rectangle
//! before anything touches the transport, then streams big-endian RGB565 after RAMWR.
use crate::color::Color;
use crate::config::{PanelConfig, FRAME_MEMORY_HEIGHT};
use crate::error::{Error, Result};
use crate::st7789::interface::Transport;
use crate::st7789::{cmd::Cmd, flag::Flag};
use crate::window::{AddressWindow, Geometry, Rect, Rotation};

/// Pixels staged per `write_data` call while streaming
const PIXEL_CHUNK: usize = 64;

/// Controller lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerState {
    /// Not initialized, or powered down
    Uninitialized,
    /// Init sequence in progress
    Initializing,
    /// Ready for drawing
    Active,
    /// Sleep mode
    Sleeping,
}

/// Vertical refresh order used while scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScrollDirection {
    /// Refresh from the top line down
    #[default]
    TopToBottom,
    /// Refresh from the bottom line up
    BottomToTop,
}

/// Runtime configuration of the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    panel: PanelConfig,
    geometry: Geometry,
    state: PowerState,
    inverted: bool,
    partial: bool,
    idle: bool,
    display_on: bool,
    scroll_direction: ScrollDirection,
}

impl DisplayConfig {
    fn new(panel: PanelConfig) -> Self {
        DisplayConfig {
            panel,
            geometry: Geometry::new(&panel),
            state: PowerState::Uninitialized,
            inverted: panel.invert,
            partial: false,
            idle: false,
            display_on: false,
            scroll_direction: ScrollDirection::TopToBottom,
        }
    }

    /// Panel as configured at construction
    pub fn panel(&self) -> &PanelConfig {
        &self.panel
    }

    /// Rotation-aware geometry
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Lifecycle state
    pub fn state(&self) -> PowerState {
        self.state
    }

    /// Colour inversion on
    pub fn inverted(&self) -> bool {
        self.inverted
    }

    /// Partial display mode on
    pub fn partial(&self) -> bool {
        self.partial
    }

    /// Idle (8 colour) mode on
    pub fn idle(&self) -> bool {
        self.idle
    }

    /// Panel output enabled
    pub fn display_on(&self) -> bool {
        self.display_on
    }

    /// Current scroll direction
    pub fn scroll_direction(&self) -> ScrollDirection {
        self.scroll_direction
    }

    fn madctl(&self) -> u8 {
        let scroll = match self.scroll_direction {
            ScrollDirection::TopToBottom => 0,
            ScrollDirection::BottomToTop => Flag::MADCTL_ML,
        };
        self.geometry.rotation().madctl() | scroll
    }
}

/// ST7789 driver over any [`Transport`]
pub struct St7789<T> {
    transport: T,
    config: DisplayConfig,
}

impl<T> St7789<T>
where
    T: Transport,
{
    /// Wrap a transport. Nothing is sent until [`initialize`](Self::initialize).
    pub fn new(transport: T, panel: PanelConfig) -> Self {
        St7789 {
            transport,
            config: DisplayConfig::new(panel),
        }
    }

    /// Current configuration
    pub fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// Lifecycle state
    pub fn state(&self) -> PowerState {
        self.config.state
    }

    /// Logical width and height for the current rotation
    pub fn size(&self) -> (u16, u16) {
        self.config.geometry.size()
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.config.geometry.rotation()
    }

    /// Borrow the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Borrow the transport mutably
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give the transport back
    pub fn release(self) -> T {
        self.transport
    }

    // ==================== Helper Functions ====================

    fn cmd_data(&mut self, cmd: u8, data: &[u8]) -> Result<()> {
        self.transport.write_command(cmd)?;
        self.transport.write_data(data)?;
        Ok(())
    }

    fn cmd_delay(&mut self, cmd: u8, delay_ms: u32) -> Result<()> {
        self.transport.write_command(cmd)?;
        self.transport.delay_ms(delay_ms);
        Ok(())
    }

    fn ensure_configurable(&self) -> Result<()> {
        match self.config.state {
            PowerState::Active | PowerState::Sleeping => Ok(()),
            _ => Err(Error::NotReady),
        }
    }

    fn ensure_active(&self) -> Result<()> {
        match self.config.state {
            PowerState::Active => Ok(()),
            _ => Err(Error::NotReady),
        }
    }

    fn write_madctl(&mut self) -> Result<()> {
        let madctl = self.config.madctl();
        self.cmd_data(Cmd::MADCTL, &[madctl])
    }

    fn configure_power_settings(&mut self) -> Result<()> {
        self.cmd_data(Cmd::PORCTRL, &Flag::PORCH)?;
        self.cmd_data(Cmd::GCTRL, &[Flag::GATE_VOLTAGE])?;
        self.cmd_data(Cmd::VCOMS, &[Flag::VCOM])?;
        self.cmd_data(Cmd::LCMCTRL, &[Flag::LCM])?;
        self.cmd_data(Cmd::VDVVRHEN, &Flag::VDV_VRH_ENABLE)?;
        self.cmd_data(Cmd::VRHS, &[Flag::VRH])?;
        self.cmd_data(Cmd::VDVS, &[Flag::VDV])?;
        self.cmd_data(Cmd::FRCTRL2, &[Flag::FRAME_RATE_60HZ])?;
        self.cmd_data(Cmd::PWCTRL1, &Flag::POWER_CONTROL_1)
    }

    fn configure_gamma(&mut self) -> Result<()> {
        self.cmd_data(Cmd::PVGAMCTRL, &Flag::POSITIVE_GAMMA)?;
        self.cmd_data(Cmd::NVGAMCTRL, &Flag::NEGATIVE_GAMMA)
    }

    fn init_sequence(&mut self) -> Result<()> {
        self.transport.reset()?;
        self.cmd_delay(Cmd::SWRESET, Flag::SWRESET_DELAY_MS)?;
        self.cmd_delay(Cmd::SLPOUT, Flag::SLPOUT_DELAY_MS)?;

        self.cmd_data(Cmd::COLMOD, &[Flag::COLMOD_16BIT])?;
        self.transport.delay_ms(Flag::SHORT_DELAY_MS);
        self.write_madctl()?;

        self.configure_power_settings()?;
        self.configure_gamma()?;

        let inversion = if self.config.inverted {
            Cmd::INVON
        } else {
            Cmd::INVOFF
        };
        self.transport.write_command(inversion)?;

        self.cmd_delay(Cmd::NORON, Flag::SHORT_DELAY_MS)?;
        self.cmd_delay(Cmd::DISPON, Flag::SHORT_DELAY_MS)
    }

    // ==================== Lifecycle ====================

    /// Run the full init sequence and bring the panel to `Active`.
    ///
    /// Callable from any state; each call is a fresh start. On a transport failure the
    /// driver drops back to `Uninitialized` and the fault is returned without retrying.
    pub fn initialize(&mut self) -> Result<()> {
        if !self.config.panel.fits_frame_memory() {
            return Err(Error::OutOfBounds);
        }
        log::info!(
            "Initializing ST7789 {}x{} panel",
            self.config.panel.width,
            self.config.panel.height
        );

        let rotation = self.config.geometry.rotation();
        self.config = DisplayConfig::new(self.config.panel);
        self.config.geometry.set_rotation(rotation);
        self.config.state = PowerState::Initializing;

        match self.init_sequence() {
            Ok(()) => {
                self.config.display_on = true;
                self.config.state = PowerState::Active;
                log::info!("Display initialized");
                Ok(())
            }
            Err(err) => {
                self.config.state = PowerState::Uninitialized;
                Err(err)
            }
        }
    }

    /// Display off, sleep in, release the transport. Only `initialize` is valid afterwards.
    pub fn power_down(&mut self) -> Result<()> {
        self.ensure_configurable()?;
        log::info!("Powering down display");

        // Whatever happens below, the panel needs a fresh init
        self.config.state = PowerState::Uninitialized;
        self.config.display_on = false;

        self.transport.write_command(Cmd::DISPOFF)?;
        self.cmd_delay(Cmd::SLPIN, Flag::SLPIN_DELAY_MS)?;
        self.transport.release()?;
        Ok(())
    }

    /// Enter (`true`) or leave (`false`) sleep mode
    pub fn sleep(&mut self, enter: bool) -> Result<()> {
        self.ensure_configurable()?;
        log::debug!("Sleep mode: {}", enter);
        if enter {
            self.cmd_delay(Cmd::SLPIN, Flag::SLPIN_DELAY_MS)?;
            self.config.state = PowerState::Sleeping;
        } else {
            self.cmd_delay(Cmd::SLPOUT, Flag::SLPOUT_DELAY_MS)?;
            self.config.state = PowerState::Active;
        }
        Ok(())
    }

    // ==================== Configuration ====================

    /// Rotate the logical frame. Sends exactly one MADCTL write.
    pub fn set_rotation(&mut self, rotation: Rotation) -> Result<()> {
        self.ensure_configurable()?;
        log::debug!("Rotation: {:?}", rotation);
        let previous = self.config.geometry.rotation();
        self.config.geometry.set_rotation(rotation);
        if let Err(err) = self.write_madctl() {
            self.config.geometry.set_rotation(previous);
            return Err(err);
        }
        Ok(())
    }

    /// Colour inversion on or off
    pub fn set_inversion(&mut self, invert: bool) -> Result<()> {
        self.ensure_configurable()?;
        log::debug!("Inversion: {}", invert);
        self.transport
            .write_command(if invert { Cmd::INVON } else { Cmd::INVOFF })?;
        self.config.inverted = invert;
        Ok(())
    }

    /// Partial display mode on, or back to normal mode
    pub fn set_partial_mode(&mut self, partial: bool) -> Result<()> {
        self.ensure_configurable()?;
        self.transport
            .write_command(if partial { Cmd::PTLON } else { Cmd::NORON })?;
        self.config.partial = partial;
        Ok(())
    }

    /// Rows shown in partial mode, both ends inclusive, in frame memory rows
    pub fn set_partial_area(&mut self, start_row: u16, end_row: u16) -> Result<()> {
        self.ensure_configurable()?;
        if start_row > end_row || end_row >= FRAME_MEMORY_HEIGHT {
            return Err(Error::OutOfBounds);
        }
        let s = start_row.to_be_bytes();
        let e = end_row.to_be_bytes();
        self.cmd_data(Cmd::PTLAR, &[s[0], s[1], e[0], e[1]])
    }

    /// Idle mode (reduced colour depth) on or off
    pub fn set_idle_mode(&mut self, idle: bool) -> Result<()> {
        self.ensure_configurable()?;
        self.transport
            .write_command(if idle { Cmd::IDMON } else { Cmd::IDMOFF })?;
        self.config.idle = idle;
        Ok(())
    }

    /// Panel output on or off. Frame memory is kept either way.
    pub fn set_display_enabled(&mut self, on: bool) -> Result<()> {
        self.ensure_configurable()?;
        self.transport
            .write_command(if on { Cmd::DISPON } else { Cmd::DISPOFF })?;
        self.config.display_on = on;
        Ok(())
    }

    /// Leave partial mode
    pub fn set_normal_mode(&mut self) -> Result<()> {
        self.set_partial_mode(false)
    }

    /// Define fixed top and bottom areas with a scrolling band between them
    pub fn set_scroll_region(
        &mut self,
        top_rows: u16,
        bottom_rows: u16,
        direction: ScrollDirection,
    ) -> Result<()> {
        self.ensure_configurable()?;
        let (_, native_height) = self.config.geometry.native_size();
        if top_rows as u32 + bottom_rows as u32 > native_height as u32 {
            return Err(Error::OutOfBounds);
        }
        log::debug!(
            "Scroll region: top {} bottom {} {:?}",
            top_rows,
            bottom_rows,
            direction
        );

        let scroll_rows = FRAME_MEMORY_HEIGHT - top_rows - bottom_rows;
        let t = top_rows.to_be_bytes();
        let s = scroll_rows.to_be_bytes();
        let b = bottom_rows.to_be_bytes();
        self.cmd_data(Cmd::VSCRDEF, &[t[0], t[1], s[0], s[1], b[0], b[1]])?;

        self.config.scroll_direction = direction;
        self.write_madctl()
    }

    /// Set the first frame memory line shown at the top of the scrolling band
    pub fn scroll_to(&mut self, offset: u16) -> Result<()> {
        self.ensure_configurable()?;
        let (_, native_height) = self.config.geometry.native_size();
        if offset >= native_height {
            return Err(Error::OutOfBounds);
        }
        self.cmd_data(Cmd::VSCRSADD, &offset.to_be_bytes())
    }

    // ==================== Pixel Output ====================

    /// Validate `rect`, then send CASET, RASET and RAMWR for it
    pub fn set_window(&mut self, rect: &Rect) -> Result<AddressWindow> {
        self.ensure_active()?;
        let window = self.config.geometry.window(rect)?;
        log::trace!("Window {:?}", window);
        self.cmd_data(Cmd::CASET, &window.column_bytes())?;
        self.cmd_data(Cmd::RASET, &window.row_bytes())?;
        self.transport.write_command(Cmd::RAMWR)?;
        Ok(window)
    }

    /// Stream pixels into the window opened by the last [`set_window`](Self::set_window)
    pub fn write_pixels<I>(&mut self, pixels: I) -> Result<()>
    where
        I: IntoIterator<Item = Color>,
    {
        let mut buffer = [0u8; PIXEL_CHUNK * 2];
        let mut filled = 0;
        for pixel in pixels {
            buffer[filled..filled + 2].copy_from_slice(&pixel.to_be_bytes());
            filled += 2;
            if filled == buffer.len() {
                self.transport.write_data(&buffer)?;
                filled = 0;
            }
        }
        if filled > 0 {
            self.transport.write_data(&buffer[..filled])?;
        }
        Ok(())
    }

    /// Write `count` copies of one colour into the open window
    pub fn write_repeated(&mut self, color: Color, count: u32) -> Result<()> {
        log::trace!("Repeating {:?} over {} pixels", color, count);
        let mut buffer = [0u8; PIXEL_CHUNK * 2];
        for pair in buffer.chunks_exact_mut(2) {
            pair.copy_from_slice(&color.to_be_bytes());
        }
        let mut remaining = count as usize;
        while remaining > 0 {
            let pixels = remaining.min(PIXEL_CHUNK);
            self.transport.write_data(&buffer[..pixels * 2])?;
            remaining -= pixels;
        }
        Ok(())
    }

    /// Fill a rectangle with one colour
    pub fn fill_rect(&mut self, rect: &Rect, color: Color) -> Result<()> {
        let window = self.set_window(rect)?;
        self.write_repeated(color, window.pixel_count())
    }

    /// Write exactly `rect.area()` pixels from `pixels` into `rect`.
    ///
    /// A short iterator leaves the rest of the window untouched; extra items are ignored.
    pub fn draw_pixels<I>(&mut self, rect: &Rect, pixels: I) -> Result<()>
    where
        I: IntoIterator<Item = Color>,
    {
        let window = self.set_window(rect)?;
        self.write_pixels(pixels.into_iter().take(window.pixel_count() as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{Op, RecordingTransport};
    use display_interface::DisplayError;

    fn active(panel: PanelConfig) -> St7789<RecordingTransport> {
        let mut display = St7789::new(RecordingTransport::new(), panel);
        display.initialize().unwrap();
        display.transport_mut().clear();
        display
    }

    #[test]
    fn init_sequence_order() {
        let mut display = St7789::new(RecordingTransport::new(), PanelConfig::ST7789_240X320);
        display.initialize().unwrap();
        assert_eq!(display.state(), PowerState::Active);

        let commands = display.transport().commands();
        assert_eq!(
            commands,
            vec![
                Cmd::SWRESET,
                Cmd::SLPOUT,
                Cmd::COLMOD,
                Cmd::MADCTL,
                Cmd::PORCTRL,
                Cmd::GCTRL,
                Cmd::VCOMS,
                Cmd::LCMCTRL,
                Cmd::VDVVRHEN,
                Cmd::VRHS,
                Cmd::VDVS,
                Cmd::FRCTRL2,
                Cmd::PWCTRL1,
                Cmd::PVGAMCTRL,
                Cmd::NVGAMCTRL,
                Cmd::INVON,
                Cmd::NORON,
                Cmd::DISPON,
            ]
        );
        let ops = display.transport().ops();
        assert_eq!(ops[0], Op::Reset);
        assert_eq!(ops[1], Op::Command(Cmd::SWRESET));
        assert_eq!(ops[2], Op::Delay(150));
        assert_eq!(ops[3], Op::Command(Cmd::SLPOUT));
        assert_eq!(ops[4], Op::Delay(120));
    }

    #[test]
    fn init_without_inversion_sends_invoff() {
        let panel = PanelConfig::ST7789_240X240.with_inversion(false);
        let mut display = St7789::new(RecordingTransport::new(), panel);
        display.initialize().unwrap();
        let commands = display.transport().commands();
        assert!(commands.contains(&Cmd::INVOFF));
        assert!(!commands.contains(&Cmd::INVON));
    }

    #[test]
    fn init_failure_returns_to_uninitialized() {
        let mut display = St7789::new(
            RecordingTransport::failing_after(5),
            PanelConfig::ST7789_240X320,
        );
        assert_eq!(
            display.initialize(),
            Err(Error::TransportFault(DisplayError::BusWriteError))
        );
        assert_eq!(display.state(), PowerState::Uninitialized);
        assert_eq!(
            display.fill_rect(&Rect::new(0, 0, 1, 1), Color::RED),
            Err(Error::NotReady)
        );

        // transport recovered, a fresh init succeeds
        display.transport_mut().never_fail();
        display.initialize().unwrap();
        assert_eq!(display.state(), PowerState::Active);
    }

    #[test]
    fn oversized_panel_is_rejected_before_io() {
        let mut display = St7789::new(RecordingTransport::new(), PanelConfig::new(320, 480));
        assert_eq!(display.initialize(), Err(Error::OutOfBounds));
        assert!(display.transport().ops().is_empty());
    }

    #[test]
    fn setters_before_init_are_not_ready() {
        let mut display = St7789::new(RecordingTransport::new(), PanelConfig::ST7789_240X320);
        assert_eq!(display.set_rotation(Rotation::Deg90), Err(Error::NotReady));
        assert_eq!(display.sleep(true), Err(Error::NotReady));
        assert_eq!(display.scroll_to(0), Err(Error::NotReady));
        assert!(display.transport().ops().is_empty());
    }

    #[test]
    fn rotation_emits_one_madctl_and_swaps_size() {
        let mut display = active(PanelConfig::ST7789_240X320);
        display.set_rotation(Rotation::Deg90).unwrap();
        assert_eq!(
            display.transport().ops(),
            &[Op::Command(Cmd::MADCTL), Op::Data(vec![0xA0])]
        );
        assert_eq!(display.size(), (320, 240));
    }

    #[test]
    fn rotation_survives_reinit() {
        let mut display = active(PanelConfig::ST7789_240X320);
        display.set_rotation(Rotation::Deg270).unwrap();
        display.initialize().unwrap();
        assert_eq!(display.rotation(), Rotation::Deg270);
        assert!(display
            .transport()
            .ops()
            .contains(&Op::Data(vec![Rotation::Deg270.madctl()])));
    }

    #[test]
    fn sleeping_refuses_drawing_but_accepts_config() {
        let mut display = active(PanelConfig::ST7789_240X320);
        display.sleep(true).unwrap();
        assert_eq!(display.state(), PowerState::Sleeping);
        assert_eq!(
            display.fill_rect(&Rect::new(0, 0, 4, 4), Color::RED),
            Err(Error::NotReady)
        );
        display.set_inversion(false).unwrap();
        display.sleep(false).unwrap();
        assert_eq!(display.state(), PowerState::Active);
        display
            .fill_rect(&Rect::new(0, 0, 4, 4), Color::RED)
            .unwrap();
    }

    #[test]
    fn scroll_region_bytes_and_direction() {
        let mut display = active(PanelConfig::ST7789_240X320);
        display
            .set_scroll_region(10, 20, ScrollDirection::BottomToTop)
            .unwrap();
        assert_eq!(
            display.transport().ops(),
            &[
                Op::Command(Cmd::VSCRDEF),
                Op::Data(vec![0x00, 10, 0x01, 0x22, 0x00, 20]),
                Op::Command(Cmd::MADCTL),
                Op::Data(vec![Rotation::Deg0.madctl() | Flag::MADCTL_ML]),
            ]
        );
        assert_eq!(
            display.set_scroll_region(200, 121, ScrollDirection::TopToBottom),
            Err(Error::OutOfBounds)
        );
    }

    #[test]
    fn scroll_offset_is_validated() {
        let mut display = active(PanelConfig::ST7789_240X240);
        display.scroll_to(239).unwrap();
        assert_eq!(
            display.transport().ops(),
            &[Op::Command(Cmd::VSCRSADD), Op::Data(vec![0x00, 0xEF])]
        );
        display.transport_mut().clear();
        assert_eq!(display.scroll_to(240), Err(Error::OutOfBounds));
        assert!(display.transport().ops().is_empty());
    }

    #[test]
    fn power_down_releases_and_requires_reinit() {
        let mut display = active(PanelConfig::ST7789_240X320);
        display.power_down().unwrap();
        assert_eq!(
            display.transport().ops(),
            &[
                Op::Command(Cmd::DISPOFF),
                Op::Command(Cmd::SLPIN),
                Op::Delay(5),
                Op::Release,
            ]
        );
        assert_eq!(display.state(), PowerState::Uninitialized);
        assert_eq!(display.sleep(false), Err(Error::NotReady));

        display.initialize().unwrap();
        display
            .fill_rect(&Rect::new(0, 0, 1, 1), Color::BLUE)
            .unwrap();
    }

    #[test]
    fn mode_toggles() {
        let mut display = active(PanelConfig::ST7789_240X320);
        display.set_partial_mode(true).unwrap();
        display.set_partial_area(16, 47).unwrap();
        display.set_idle_mode(true).unwrap();
        display.set_display_enabled(false).unwrap();
        display.set_normal_mode().unwrap();
        assert_eq!(
            display.transport().commands(),
            vec![Cmd::PTLON, Cmd::PTLAR, Cmd::IDMON, Cmd::DISPOFF, Cmd::NORON]
        );
        let config = display.config();
        assert!(config.idle());
        assert!(!config.partial());
        assert!(!config.display_on());
        assert_eq!(display.set_partial_area(10, 5), Err(Error::OutOfBounds));
    }

    #[test]
    fn window_then_big_endian_pixels() {
        let mut display = active(PanelConfig::ST7789_240X320);
        display
            .draw_pixels(
                &Rect::new(1, 2, 2, 1),
                [Color::RED, Color::BLUE, Color::GREEN],
            )
            .unwrap();
        assert_eq!(
            display.transport().ops(),
            &[
                Op::Command(Cmd::CASET),
                Op::Data(vec![0x00, 0x01, 0x00, 0x02]),
                Op::Command(Cmd::RASET),
                Op::Data(vec![0x00, 0x02, 0x00, 0x02]),
                Op::Command(Cmd::RAMWR),
                Op::Data(vec![0xF8, 0x00, 0x00, 0x1F]),
            ]
        );
    }

    #[test]
    fn repeated_fill_is_chunked() {
        let mut display = active(PanelConfig::ST7789_240X320);
        display.fill_rect(&Rect::new(0, 0, 10, 10), Color::WHITE).unwrap();
        assert_eq!(display.transport().pixel_bytes().len(), 200);
        let chunks: Vec<usize> = display
            .transport()
            .ops()
            .iter()
            .skip(5)
            .map(|op| match op {
                Op::Data(bytes) => bytes.len(),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(chunks, vec![128, 72]);
    }

    #[test]
    fn out_of_bounds_window_writes_nothing() {
        let mut display = active(PanelConfig::ST7789_135X240);
        assert_eq!(
            display.fill_rect(&Rect::new(100, 0, 36, 1), Color::RED),
            Err(Error::OutOfBounds)
        );
        assert!(display.transport().ops().is_empty());
    }

    #[test]
    fn transport_fault_mid_draw_keeps_driver_usable() {
        let mut display = active(PanelConfig::ST7789_240X320);
        display.transport_mut().fail_after(2);
        assert!(matches!(
            display.fill_rect(&Rect::new(0, 0, 2, 2), Color::RED),
            Err(Error::TransportFault(_))
        ));
        assert_eq!(display.state(), PowerState::Active);
        display.transport_mut().never_fail();
        display.fill_rect(&Rect::new(0, 0, 2, 2), Color::RED).unwrap();
    }
}
