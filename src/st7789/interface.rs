//! Transport port and its SPI implementation
//!
//! The driver only ever talks to the panel through [`Transport`]. Chip select, clocking and
//! the electrical side of the bus stay behind the trait; [`SpiInterface`] is the stock
//! implementation over `embedded-hal` SPI + GPIO.
use display_interface::DisplayError;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

const RESET_PULSE_MS: u32 = 10;

/// Command/data port the controller driver writes through.
///
/// Implementations handle the data/command select line themselves: `write_command` frames
/// its byte as a command, `write_data` frames its bytes as parameters or pixel payload.
pub trait Transport {
    /// Send a single command opcode
    fn write_command(&mut self, command: u8) -> Result<(), DisplayError>;

    /// Send parameter or pixel bytes belonging to the last command
    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError>;

    /// Pulse the hardware reset line
    fn reset(&mut self) -> Result<(), DisplayError>;

    /// Block for the given number of milliseconds
    fn delay_ms(&mut self, ms: u32);

    /// Let go of the bus after a power down. Nothing to do by default.
    fn release(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        (**self).write_command(command)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        (**self).write_data(data)
    }

    fn reset(&mut self) -> Result<(), DisplayError> {
        (**self).reset()
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms)
    }

    fn release(&mut self) -> Result<(), DisplayError> {
        (**self).release()
    }
}

/// 4-wire SPI connection: SPI device (with its own chip select), data/command pin and reset pin.
pub struct SpiInterface<SPI, DC, RST, DELAY> {
    /// SPI device
    spi: SPI,
    /// Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Reseting
    rst: RST,
    /// Delay provider for the reset pulse and controller timings
    delay: DELAY,
}

impl<SPI, DC, RST, DELAY> SpiInterface<SPI, DC, RST, DELAY> {
    /// Bundle the bus and pins. Nothing is written until the driver initializes the panel.
    pub fn new(spi: SPI, dc: DC, rst: RST, delay: DELAY) -> Self {
        SpiInterface {
            spi,
            dc,
            rst,
            delay,
        }
    }

    /// Give the bus and pins back
    pub fn release_parts(self) -> (SPI, DC, RST, DELAY) {
        (self.spi, self.dc, self.rst, self.delay)
    }
}

impl<SPI, DC, RST, DELAY> Transport for SpiInterface<SPI, DC, RST, DELAY>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
    DELAY: DelayNs,
{
    fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        // low for commands
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;
        self.spi
            .write(&[command])
            .map_err(|_| DisplayError::BusWriteError)
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        if data.is_empty() {
            return Ok(());
        }
        // high for data
        self.dc.set_high().map_err(|_| DisplayError::DCError)?;
        self.spi
            .write(data)
            .map_err(|_| DisplayError::BusWriteError)
    }

    fn reset(&mut self) -> Result<(), DisplayError> {
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_low().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(RESET_PULSE_MS);
        self.rst.set_high().map_err(|_| DisplayError::RSError)?;
        self.delay.delay_ms(RESET_PULSE_MS);
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn release(&mut self) -> Result<(), DisplayError> {
        self.dc.set_low().map_err(|_| DisplayError::DCError)?;
        self.rst.set_low().map_err(|_| DisplayError::RSError)
    }
}
