use std::time::Duration;

use ev12aq600_core::{sleep::Sleep, transport::Transport};
use itertools::Itertools;

use crate::{
    error::EV12DriverError,
    firmware::{
        fpga::REG_DATA_LENGTH,
        frame::{decode_data, encode_read, encode_write, RegisterAddress},
    },
    option::SessionOption,
    shadow::FpgaRegisterImage,
};

use super::{Ack, AckWaiter};

/// A struct to exchange register frames with the FPGA.
pub struct RegisterEngine<'a, T: Transport, S: Sleep> {
    pub(crate) transport: &'a mut T,
    pub(crate) option: &'a SessionOption<S>,
}

impl<'a, T: Transport, S: Sleep> RegisterEngine<'a, T, S> {
    /// Creates a new [`RegisterEngine`].
    #[must_use]
    pub fn new(transport: &'a mut T, option: &'a SessionOption<S>) -> Self {
        Self { transport, option }
    }

    /// The timing parameters of the session.
    #[must_use]
    pub fn option(&self) -> &SessionOption<S> {
        self.option
    }

    /// Writes `value` to the register at `address` and waits for the acknowledgment.
    ///
    /// Bytes left in the receive buffer by a previous transaction are discarded first. The
    /// shadow image is not touched.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn write_register(
        &mut self,
        address: RegisterAddress,
        value: u32,
    ) -> Result<Ack, EV12DriverError> {
        self.send_write_frame(address, value)?;
        self.wait_ack()
    }

    /// Reads the register at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`EV12DriverError::ShortRead`] if fewer than 4 bytes arrive within the read
    /// timeout. The received bytes are never padded.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn read_register(&mut self, address: RegisterAddress) -> Result<u32, EV12DriverError> {
        self.ensure_open()?;

        let frame = encode_read(address);
        tracing::trace!("send: {:#04X}", frame.iter().format(", "));
        self.transport.write(&frame)?;

        let mut data = [0x00; REG_DATA_LENGTH];
        let received = self.transport.read(&mut data, self.option.read_timeout)?;
        tracing::trace!("recv: {:#04X}", data[..received].iter().format(", "));
        if received < REG_DATA_LENGTH {
            tracing::error!(
                "Read of {} returned {} of {} bytes",
                address,
                received,
                REG_DATA_LENGTH
            );
            return Err(EV12DriverError::ShortRead {
                expected: REG_DATA_LENGTH,
                received,
            });
        }

        self.wait_ack()?;
        Ok(decode_data(data))
    }

    /// Writes `value` to `address` and records it in `image`.
    ///
    /// The image is updated once the frame has been sent, before the acknowledgment arrives.
    pub fn write_shadowed(
        &mut self,
        image: &mut FpgaRegisterImage,
        address: u16,
        value: u32,
    ) -> Result<Ack, EV12DriverError> {
        image.get(address)?;
        self.send_write_frame(RegisterAddress::new(address)?, value)?;
        image.store(address, value)?;
        self.wait_ack()
    }

    /// Sets `bit` of the register at `address` and waits for the settle delay.
    ///
    /// Every other bit is written back from `image`.
    #[tracing::instrument(level = "debug", skip(self, image))]
    pub fn set_bit(
        &mut self,
        image: &mut FpgaRegisterImage,
        address: u16,
        bit: u8,
    ) -> Result<(), EV12DriverError> {
        self.update_bit(image, address, bit, true)
    }

    /// Clears `bit` of the register at `address` and waits for the settle delay.
    ///
    /// Every other bit is written back from `image`.
    #[tracing::instrument(level = "debug", skip(self, image))]
    pub fn unset_bit(
        &mut self,
        image: &mut FpgaRegisterImage,
        address: u16,
        bit: u8,
    ) -> Result<(), EV12DriverError> {
        self.update_bit(image, address, bit, false)
    }

    /// Blocks for `duration` with the session sleeper.
    pub fn hold(&self, duration: Duration) {
        self.option.sleeper.sleep(duration);
    }

    /// Waits for the acknowledgment of the last frame.
    pub fn wait_ack(&mut self) -> Result<Ack, EV12DriverError> {
        AckWaiter::from_option(self.option).wait(&mut *self.transport)
    }

    fn update_bit(
        &mut self,
        image: &mut FpgaRegisterImage,
        address: u16,
        bit: u8,
        value: bool,
    ) -> Result<(), EV12DriverError> {
        let value = image.with_bit(address, bit, value)?;
        self.write_shadowed(image, address, value)?;
        self.hold(self.option.settle_delay);
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), EV12DriverError> {
        if !self.transport.is_open() {
            return Err(EV12DriverError::TransportClosed);
        }
        Ok(())
    }

    fn send_write_frame(
        &mut self,
        address: RegisterAddress,
        value: u32,
    ) -> Result<(), EV12DriverError> {
        self.ensure_open()?;

        let stale = self.transport.drain()?;
        if !stale.is_empty() {
            tracing::debug!("discard: {:#04X}", stale.iter().format(", "));
        }

        let frame = encode_write(address, value);
        tracing::trace!("send: {:#04X}", frame.iter().format(", "));
        self.transport.write(&frame)?;
        Ok(())
    }
}
