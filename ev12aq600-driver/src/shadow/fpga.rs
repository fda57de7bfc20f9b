use crate::{
    error::EV12DriverError,
    firmware::fpga::{SpiSlave, ADDR_SPI_CTL, FPGA_REG_NUM},
};

use super::bit_mask;

/// Last value written to each writable FPGA register.
///
/// This is a write cache, not a mirror: it is never refreshed from the device and silently
/// diverges if a frame is lost on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FpgaRegisterImage {
    regs: [u32; FPGA_REG_NUM],
}

impl FpgaRegisterImage {
    /// Creates a zero-initialized image.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            regs: [0; FPGA_REG_NUM],
        }
    }

    const fn index(address: u16) -> Result<usize, EV12DriverError> {
        if address as usize >= FPGA_REG_NUM {
            return Err(EV12DriverError::ShadowIndexOutOfRange(address));
        }
        Ok(address as usize)
    }

    /// Last value written to `address`.
    pub fn get(&self, address: u16) -> Result<u32, EV12DriverError> {
        Ok(self.regs[Self::index(address)?])
    }

    /// Records `value` as written to `address`.
    pub fn store(&mut self, address: u16, value: u32) -> Result<(), EV12DriverError> {
        self.regs[Self::index(address)?] = value;
        Ok(())
    }

    /// Value of `address` with `bit` set or cleared. The image itself is not modified.
    pub fn with_bit(&self, address: u16, bit: u8, value: bool) -> Result<u32, EV12DriverError> {
        let mask = bit_mask(bit)?;
        let current = self.get(address)?;
        Ok(if value {
            current | mask
        } else {
            current & !mask
        })
    }

    /// SPI slave recorded in the SPI control register.
    #[must_use]
    pub const fn spi_slave(&self) -> SpiSlave {
        SpiSlave::from_spi_ctl(self.regs[ADDR_SPI_CTL as usize])
    }
}
