//! Shared recording transport for the integration tests
#![allow(dead_code)]

use st7789_tft::st7789::cmd::Cmd;
use st7789_tft::{DisplayError, PanelConfig, Tft, Transport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Command(u8),
    Data(Vec<u8>),
    Reset,
    Delay(u32),
    Release,
}

#[derive(Debug, Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn commands(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Command(cmd) => Some(*cmd),
                _ => None,
            })
            .collect()
    }

    /// Parameter bytes sent after each occurrence of `command`
    pub fn params_of(&self, command: u8) -> Vec<Vec<u8>> {
        self.ops
            .windows(2)
            .filter_map(|pair| match pair {
                [Op::Command(cmd), Op::Data(data)] if *cmd == command => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn pixel_count(&self) -> usize {
        let mut in_ram_write = false;
        let mut bytes = 0;
        for op in &self.ops {
            match op {
                Op::Command(cmd) => in_ram_write = *cmd == Cmd::RAMWR,
                Op::Data(data) if in_ram_write => bytes += data.len(),
                _ => {}
            }
        }
        bytes / 2
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl Transport for Recorder {
    fn write_command(&mut self, command: u8) -> Result<(), DisplayError> {
        self.ops.push(Op::Command(command));
        Ok(())
    }

    fn write_data(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        self.ops.push(Op::Data(data.to_vec()));
        Ok(())
    }

    fn reset(&mut self) -> Result<(), DisplayError> {
        self.ops.push(Op::Reset);
        Ok(())
    }

    fn delay_ms(&mut self, ms: u32) {
        self.ops.push(Op::Delay(ms));
    }

    fn release(&mut self) -> Result<(), DisplayError> {
        self.ops.push(Op::Release);
        Ok(())
    }
}

/// Initialized display with an empty log
pub fn ready(panel: PanelConfig) -> anyhow::Result<Tft<Recorder>> {
    let mut tft = Tft::new(Recorder::default(), panel);
    tft.initialize()?;
    tft.driver_mut().transport_mut().ops.clear();
    Ok(tft)
}

pub fn log(tft: &Tft<Recorder>) -> &Recorder {
    tft.driver().transport()
}

pub fn clear(tft: &mut Tft<Recorder>) {
    tft.driver_mut().transport_mut().ops.clear();
}
