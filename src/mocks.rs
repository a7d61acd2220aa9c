//! Recording transport for unit tests
use display_interface::DisplayError;

use crate::st7789::cmd::Cmd;
use crate::st7789::interface::Transport;

/// One call observed on the transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Command(u8),
    Data(Vec<u8>),
    Reset,
    Delay(u32),
    Release,
}

/// Keeps every call in order. Can be told to start failing after a number of writes.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    ops: Vec<Op>,
    fail_after: Option<usize>,
    writes: usize,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Succeeds for `writes` fallible calls, then fails every one after
    pub fn failing_after(writes: usize) -> Self {
        let mut transport = Self::new();
        transport.fail_after(writes);
        transport
    }

    pub fn fail_after(&mut self, writes: usize) {
        self.writes = 0;
        self.fail_after = Some(writes);
    }

    pub fn never_fail(&mut self) {
        self.fail_after = None;
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn ops(&self) -> &[Op] {
        &self.ops
    }

    pub fn commands(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Command(cmd) => Some(*cmd),
                _ => None,
            })
            .collect()
    }

    /// Bytes sent after RAMWR commands, concatenated
    pub fn pixel_bytes(&self) -> Vec<u8> {
        let mut in_ram_write = false;
        let mut bytes = Vec::new();
        for op in &self.ops {
            match op {
                Op::Command(cmd) => in_ram_write = *cmd == Cmd::RAMWR,
                Op::Data(data) if in_ram_write => bytes.extend_from_slice(data),
                _ => {}
            }
        }
        bytes
    }

    /// Pixels sent after RAMWR commands, decoded from big-endian pairs
    pub fn pixels(&self) -> Vec<u16> {
        self.pixel_bytes()
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect()
    }

    fn check(&mut self) -> Result<(), DisplayError> {
        if let Some(limit) = self.fail_after {
            if self.writes >= limit {
                return Err(DisplayError::BusWriteError);
            }
        }
        self.writes += 1;
        Ok(())
    }
}

impl Transport for RecordingTransport {
    fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.check()?;
        self.ops.push(Op::Command(command));
        Ok(())
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        self.check()?;
        self.ops.push(Op::Data(data.to_vec()));
        Ok(())
    }

    fn reset(&mut self) -> Result<(), DisplayError> {
        self.check()?;
        self.ops.push(Op::Reset);
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.ops.push(Op::Delay(ms));
    }

    fn release(&mut self) -> Result<(), DisplayError> {
        self.check()?;
        self.ops.push(Op::Release);
        Ok(())
    }
}
