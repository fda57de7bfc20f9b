use std::collections::HashMap;

use crate::{
    error::EV12DriverError,
    firmware::adc::{check_address, ADC_ADDRESS_MASK},
};

use super::bit_mask;

/// Last value written to each ADC register.
///
/// Only registers that have been touched are stored; every other register reads as zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AdcRegisterImage {
    regs: HashMap<u16, u32>,
}

impl AdcRegisterImage {
    /// Creates an empty image.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last value written to `address`, or zero.
    #[must_use]
    pub fn get(&self, address: u16) -> u32 {
        self.regs
            .get(&(address & ADC_ADDRESS_MASK))
            .copied()
            .unwrap_or(0)
    }

    /// Records `value` as the content of `address`.
    pub fn store(&mut self, address: u16, value: u32) {
        self.regs.insert(address & ADC_ADDRESS_MASK, value);
    }

    /// Sets `bit` of `address` in the image only.
    ///
    /// Unlike [`Self::store`], `address` must not carry the write flag.
    pub fn set_bit(&mut self, address: u16, bit: u8) -> Result<u32, EV12DriverError> {
        let address = check_address(address)?;
        let value = self.get(address) | bit_mask(bit)?;
        self.store(address, value);
        Ok(value)
    }

    /// Clears `bit` of `address` in the image only.
    pub fn unset_bit(&mut self, address: u16, bit: u8) -> Result<u32, EV12DriverError> {
        let address = check_address(address)?;
        let value = self.get(address) & !bit_mask(bit)?;
        self.store(address, value);
        Ok(value)
    }
}
