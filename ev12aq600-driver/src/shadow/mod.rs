mod adc;
mod fpga;

pub use adc::AdcRegisterImage;
pub use fpga::FpgaRegisterImage;

use crate::error::EV12DriverError;

pub(crate) const fn bit_mask(bit: u8) -> Result<u32, EV12DriverError> {
    if bit > 31 {
        return Err(EV12DriverError::BitIndexOutOfRange(bit));
    }
    Ok(1 << bit)
}
