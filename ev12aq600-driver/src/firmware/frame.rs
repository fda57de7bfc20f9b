//! Frame layer of the UART register protocol.
//!
//! ```text
//! write: host  < 0 | addr[14:8] >< addr[7:0] >< d[31:24] >< d[23:16] >< d[15:8] >< d[7:0] >
//!        slave                                                                              < 0xAC >
//! read:  host  < 1 | addr[14:8] >< addr[7:0] >
//!        slave                                < d[31:24] >< d[23:16] >< d[15:8] >< d[7:0] >< 0xAC >
//! ```

use derive_more::Display;

use crate::error::EV12DriverError;

use super::fpga::{REG_ADDRESS_LENGTH, REG_ADDRESS_MAX, REG_DATA_LENGTH, REG_READ_MODE_ENABLE};

/// Length of a write frame.
pub const WRITE_FRAME_LENGTH: usize = REG_ADDRESS_LENGTH + REG_DATA_LENGTH;
/// Length of a read frame.
pub const READ_FRAME_LENGTH: usize = REG_ADDRESS_LENGTH;

/// A 15-bit FPGA register address.
///
/// Bit 15 of the wire address selects read or write and is never part of the address itself.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display("{:#06X}", _0)]
pub struct RegisterAddress(u16);

impl RegisterAddress {
    /// Creates a new [`RegisterAddress`].
    ///
    /// # Errors
    ///
    /// Returns [`EV12DriverError::AddressOutOfRange`] if `addr` does not fit in 15 bits.
    pub const fn new(addr: u16) -> Result<Self, EV12DriverError> {
        if addr > REG_ADDRESS_MAX {
            return Err(EV12DriverError::AddressOutOfRange(addr));
        }
        Ok(Self(addr))
    }

    /// The raw address.
    #[must_use]
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for RegisterAddress {
    type Error = EV12DriverError;

    fn try_from(addr: u16) -> Result<Self, Self::Error> {
        Self::new(addr)
    }
}

/// Encodes a write command.
#[must_use]
pub const fn encode_write(address: RegisterAddress, data: u32) -> [u8; WRITE_FRAME_LENGTH] {
    let addr = (address.get() & !REG_READ_MODE_ENABLE).to_be_bytes();
    let data = data.to_be_bytes();
    [addr[0], addr[1], data[0], data[1], data[2], data[3]]
}

/// Encodes a read command.
#[must_use]
pub const fn encode_read(address: RegisterAddress) -> [u8; READ_FRAME_LENGTH] {
    (address.get() | REG_READ_MODE_ENABLE).to_be_bytes()
}

/// Decodes the data part of a read response.
#[must_use]
pub const fn decode_data(bytes: [u8; REG_DATA_LENGTH]) -> u32 {
    u32::from_be_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    #[rstest::rstest]
    #[case(Ok(RegisterAddress(0x0000)), 0x0000)]
    #[case(Ok(RegisterAddress(0x00FF)), 0x00FF)]
    #[case(Ok(RegisterAddress(0x7FFF)), 0x7FFF)]
    #[case(Err(EV12DriverError::AddressOutOfRange(0x8000)), 0x8000)]
    #[case(Err(EV12DriverError::AddressOutOfRange(0xFFFF)), 0xFFFF)]
    fn new(#[case] expect: Result<RegisterAddress, EV12DriverError>, #[case] addr: u16) {
        assert_eq!(expect, RegisterAddress::new(addr));
        assert_eq!(expect, RegisterAddress::try_from(addr));
    }

    #[test]
    fn display() -> anyhow::Result<()> {
        assert_eq!("0x00FF", RegisterAddress::new(0xFF)?.to_string());
        Ok(())
    }

    #[rstest::rstest]
    #[case([0x00, 0x02, 0x00, 0x00, 0x00, 0x01], 0x0002, 0x0000_0001)]
    #[case([0x00, 0xFF, 0x12, 0x34, 0x56, 0x78], 0x00FF, 0x1234_5678)]
    #[case([0x7F, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF], 0x7FFF, 0xFFFF_FFFF)]
    fn write_frame(
        #[case] expect: [u8; WRITE_FRAME_LENGTH],
        #[case] addr: u16,
        #[case] data: u32,
    ) -> anyhow::Result<()> {
        assert_eq!(expect, encode_write(RegisterAddress::new(addr)?, data));
        Ok(())
    }

    #[rstest::rstest]
    #[case([0x80, 0x08], 0x0008)]
    #[case([0x80, 0xFF], 0x00FF)]
    #[case([0xFF, 0xFF], 0x7FFF)]
    fn read_frame(#[case] expect: [u8; READ_FRAME_LENGTH], #[case] addr: u16) -> anyhow::Result<()> {
        assert_eq!(expect, encode_read(RegisterAddress::new(addr)?));
        Ok(())
    }

    #[test]
    fn every_address() -> anyhow::Result<()> {
        let mut rng = rand::rng();
        (0..=REG_ADDRESS_MAX).try_for_each(|addr| {
            let address = RegisterAddress::new(addr)?;
            let data = rng.random::<u32>();

            let write = encode_write(address, data);
            assert_eq!(0, write[0] & 0x80);
            assert_eq!(addr, u16::from_be_bytes([write[0], write[1]]));
            assert_eq!(data, decode_data([write[2], write[3], write[4], write[5]]));

            let read = encode_read(address);
            assert_eq!(0x80, read[0] & 0x80);
            assert_eq!(addr, u16::from_be_bytes(read) & REG_ADDRESS_MAX);
            anyhow::Ok(())
        })
    }
}
