use std::time::Duration;

use ev12aq600_core::transport::{Transport, TransportError};
use ev12aq600_firmware_emulator::UartEmulator;

#[derive(Default, Clone, Copy)]
#[doc(hidden)]
pub struct AuditOption {
    pub broken: bool,
    pub stall_spi: bool,
    pub initial_status: u32,
}

#[doc(hidden)]
pub struct Audit {
    option: AuditOption,
    is_open: bool,
    uart: UartEmulator,
    sent: Vec<u8>,
    down: bool,
}

impl Audit {
    pub fn new(option: AuditOption) -> Self {
        Self {
            option,
            is_open: false,
            uart: UartEmulator::new(),
            sent: Vec::new(),
            down: false,
        }
    }

    pub fn break_down(&mut self) {
        self.uart.break_down();
    }

    pub fn repair(&mut self) {
        self.uart.repair();
    }

    pub fn emulator(&self) -> &UartEmulator {
        &self.uart
    }

    pub fn emulator_mut(&mut self) -> &mut UartEmulator {
        &mut self.uart
    }

    /// Every byte written since the transport was opened.
    pub fn sent(&self) -> &[u8] {
        &self.sent
    }

    /// Queues bytes that do not answer any frame.
    pub fn inject_rx(&mut self, bytes: &[u8]) {
        self.uart.inject(bytes);
    }

    /// Makes every transport call fail.
    pub fn unplug(&mut self) {
        self.down = true;
    }

    pub fn plug(&mut self) {
        self.down = false;
    }

    fn ensure_plugged(&self) -> Result<(), TransportError> {
        if self.down {
            return Err(TransportError::new("unplugged"));
        }
        Ok(())
    }
}

impl Transport for Audit {
    fn open(&mut self) -> Result<(), TransportError> {
        self.is_open = true;
        self.uart = UartEmulator::new();
        if self.option.broken {
            self.uart.break_down();
        }
        self.uart.fpga_mut().stall_spi(self.option.stall_spi);
        self.uart.fpga_mut().set_status(self.option.initial_status);
        self.sent.clear();
        Ok(())
    }

    fn close(&mut self) -> Result<(), TransportError> {
        self.is_open = false;
        Ok(())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), TransportError> {
        self.ensure_plugged()?;
        if !self.is_open {
            return Err(TransportError::closed());
        }
        self.sent.extend_from_slice(bytes);
        self.uart.receive(bytes);
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8], _: Duration) -> Result<usize, TransportError> {
        self.ensure_plugged()?;
        Ok(self.uart.transmit(buf))
    }

    fn bytes_available(&mut self) -> Result<usize, TransportError> {
        self.ensure_plugged()?;
        Ok(self.uart.pending())
    }

    fn is_open(&self) -> bool {
        self.is_open
    }
}
