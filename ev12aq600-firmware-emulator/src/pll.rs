use ev12aq600_driver::firmware::fpga::SPI_PLL_WORD_MASK;

const PLL_REG_NUM: usize = 0x80;
const PLL_READ: u32 = 1 << 23;
const R0_RESET: u16 = 1 << 1;
const R0_FCAL_EN: u16 = 1 << 3;

/// LMX2592 SPI slave.
///
/// Every word is `R/W | addr[22:16] | data[15:0]`.
pub struct PllEmulator {
    regs: [u16; PLL_REG_NUM],
    calibrated: bool,
    num_words: usize,
}

impl PllEmulator {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            regs: [0; PLL_REG_NUM],
            calibrated: false,
            num_words: 0,
        }
    }

    #[must_use]
    pub const fn reg(&self, addr: u8) -> u16 {
        self.regs[addr as usize & (PLL_REG_NUM - 1)]
    }

    #[must_use]
    pub const fn is_calibrated(&self) -> bool {
        self.calibrated
    }

    #[must_use]
    pub const fn num_words(&self) -> usize {
        self.num_words
    }

    pub(crate) fn transfer(&mut self, word: u32) -> Option<u32> {
        let word = word & SPI_PLL_WORD_MASK;
        self.num_words += 1;

        let addr = ((word >> 16) as usize) & (PLL_REG_NUM - 1);
        let data = word as u16;
        if word & PLL_READ != 0 {
            return Some(self.regs[addr] as u32);
        }

        if addr == 0 && data & R0_RESET != 0 {
            self.regs = [0; PLL_REG_NUM];
            self.calibrated = false;
            self.regs[0] = data & !R0_RESET;
            return None;
        }
        if addr == 0 && data & R0_FCAL_EN != 0 {
            self.calibrated = true;
        }
        self.regs[addr] = data;
        None
    }
}

impl Default for PllEmulator {
    fn default() -> Self {
        Self::new()
    }
}
