use std::time::Duration;

use ev12aq600_core::transport::{Transport, TransportError};
use ev12aq600_firmware_emulator::UartEmulator;

/// A [`Transport`] to an emulated FPGA.
///
/// This transport is mainly used for explanation.
#[derive(Default)]
pub struct Nop {
    is_open: bool,
    uart: UartEmulator,
}

impl Nop {
    /// Creates a new [`Nop`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for Nop {
    fn open(&mut self) -> Result<(), TransportError> {
        self.is_open = true;
        self.uart = UartEmulator::new();
        Ok(())
    }

    fn close(&mut self) -> Result<(), TransportError> {
        self.is_open = false;
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        if !self.is_open {
            return Err(TransportError::closed());
        }
        self.uart.receive(bytes);
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8], _: Duration) -> Result<usize, TransportError> {
        Ok(self.uart.transmit(buf))
    }

    fn bytes_available(&mut self) -> Result<usize, TransportError> {
        Ok(self.uart.pending())
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}
