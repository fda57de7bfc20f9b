pub const REG_NUM: usize = 256;

pub const HDL_VERSION: u32 = 0x0001_0200;

pub const SPI_FIFO_DEPTH: usize = 256;
