#![allow(missing_docs)]

mod spi_fifo_flags;
mod spi_slave;

pub use spi_fifo_flags::SpiFifoFlags;
pub use spi_slave::SpiSlave;

/// Number of writable FPGA registers mirrored by the shadow image.
pub const FPGA_REG_NUM: usize = 20;
/// Largest register address that fits in a frame.
pub const REG_ADDRESS_MAX: u16 = 0x7FFF;
/// Acknowledgment byte sent by the UART slave after every frame.
pub const ACK: u8 = 0xAC;

pub const REG_ADDRESS_LENGTH: usize = 2;
pub const REG_DATA_LENGTH: usize = 4;
pub const REG_READ_MODE_ENABLE: u16 = 1 << 15;

pub const ADDR_CHECK_PATTERN: u16 = 0;
pub const ADDR_RX_PRBS: u16 = 1;
pub const ADDR_RESET: u16 = 2;
pub const ADDR_SPI_CTL: u16 = 3;
pub const ADDR_SPI_FIFO_IN: u16 = 4;
pub const ADDR_SYNC_MODE: u16 = 5;
pub const ADDR_SYNC_CTL: u16 = 6;
pub const ADDR_HDL_VERSION: u16 = 8;
pub const ADDR_SPI_FIFO_FLAGS: u16 = 9;
pub const ADDR_SPI_FIFO_OUT: u16 = 10;
pub const ADDR_HW_CTL: u16 = 15;
pub const ADDR_STATUS: u16 = 255;

pub const CHECK_PATTERN_BIT_PATTERN0: u8 = 0;
pub const CHECK_PATTERN_BIT_RAMP: u8 = 1;

pub const RX_PRBS_BIT_ENABLE: u8 = 0;

pub const RESET_BIT_ESISTREAM: u8 = 0;
pub const RESET_BIT_CHECK: u8 = 1;
pub const RESET_BIT_ADC_RSTN: u8 = 2;
pub const RESET_BIT_SYNC_GEN: u8 = 3;

pub const SPI_CTL_BIT_SLAVE_SELECT: u8 = 0;
pub const SPI_CTL_BIT_START: u8 = 1;

pub const SYNC_MODE_BIT_TRAINING: u8 = 0;

pub const SYNC_CTL_BIT_PULSE: u8 = 0;
pub const SYNC_CTL_BIT_MANUAL: u8 = 1;

pub const HW_CTL_BIT_ADC_POWER: u8 = 0;
pub const HW_CTL_BIT_PLL_ENABLE: u8 = 1;
pub const HW_CTL_BIT_EXT_SYNC: u8 = 2;
pub const HW_CTL_BIT_FPGA_SYNC: u8 = 12;

pub const SPI_ADC_WORD_MASK: u32 = 0x0000_FFFF;
pub const SPI_PLL_WORD_MASK: u32 = 0x00FF_FFFF;
