#![allow(missing_docs)]

//! EV12AQ600 registers used by the driver.
//!
//! The ADC takes an address word followed by a data word. Bit 15 of the address word selects
//! the operation: set for a write, clear for a read. Register addresses themselves are 15 bits.

use crate::error::EV12DriverError;

/// Address word flag selecting a register write.
pub const ADC_WRITE_OPERATION: u16 = 0x8000;
/// Mask of the register address in an address word.
pub const ADC_ADDRESS_MASK: u16 = 0x7FFF;

/// SYNC sampling edge select.
pub const ADC_ADDR_SYNC_SAMPLING_EDGE: u16 = 0x000C;
/// SYNC timing violation flag.
pub const ADC_ADDR_SYNC_FLAG: u16 = 0x000D;
/// SYNC flag reset.
pub const ADC_ADDR_SYNC_FLAG_RST: u16 = 0x000E;
/// Chip identifier.
pub const ADC_ADDR_CHIP_ID: u16 = 0x0011;
/// Test pattern select.
pub const ADC_ADDR_TEST_PATTERN_SEL: u16 = 0x0B07;
/// Test mode enable.
pub const ADC_ADDR_TEST_MODE_EN: u16 = 0x0B0A;

/// Expected content of [`ADC_ADDR_CHIP_ID`].
pub const ADC_CHIP_ID: u32 = 0x0914;

pub const SYNC_SAMPLING_BIT_NEGATIVE_EDGE: u8 = 0;
pub const SYNC_FLAG_BIT_TIMING_VIOLATION: u8 = 0;
pub const TEST_MODE_BIT_ENABLE: u8 = 0;
pub const TEST_PATTERN_BIT_0: u8 = 0;
pub const TEST_PATTERN_BIT_RAMP: u8 = 1;
pub const TEST_PATTERN_BIT_2: u8 = 2;

/// Checks that `address` fits in the address bits of an address word.
///
/// # Errors
///
/// Returns [`EV12DriverError::AddressOutOfRange`] if bit 15 is set.
pub fn check_address(address: u16) -> Result<u16, EV12DriverError> {
    if address > ADC_ADDRESS_MASK {
        return Err(EV12DriverError::AddressOutOfRange(address));
    }
    Ok(address)
}

/// Builds the address word of a register write.
#[must_use]
pub const fn write_address_word(address: u16) -> u32 {
    ((address & ADC_ADDRESS_MASK) | ADC_WRITE_OPERATION) as u32
}

/// Builds the address word of a register read.
#[must_use]
pub const fn read_address_word(address: u16) -> u32 {
    (address & ADC_ADDRESS_MASK) as u32
}
