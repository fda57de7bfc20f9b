use std::collections::HashMap;

use ev12aq600_driver::firmware::{
    adc::{
        ADC_ADDRESS_MASK, ADC_ADDR_CHIP_ID, ADC_ADDR_SYNC_FLAG, ADC_ADDR_SYNC_FLAG_RST,
        ADC_CHIP_ID, ADC_WRITE_OPERATION, SYNC_FLAG_BIT_TIMING_VIOLATION,
    },
    fpga::SPI_ADC_WORD_MASK,
};

/// EV12AQ600 SPI slave.
///
/// Words arrive as address/data pairs. A read pushes the register content back to the SPI
/// master, the data word of the pair is ignored.
pub struct AdcEmulator {
    regs: HashMap<u16, u16>,
    pending_address: Option<u16>,
    sync_timing_violation: bool,
    num_resets: usize,
}

impl AdcEmulator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: HashMap::new(),
            pending_address: None,
            sync_timing_violation: false,
            num_resets: 0,
        }
    }

    pub fn reset(&mut self) {
        self.regs.clear();
        self.pending_address = None;
        self.sync_timing_violation = false;
        self.num_resets += 1;
    }

    #[must_use]
    pub fn num_resets(&self) -> usize {
        self.num_resets
    }

    #[must_use]
    pub fn read(&self, addr: u16) -> u16 {
        match addr & ADC_ADDRESS_MASK {
            ADC_ADDR_CHIP_ID => ADC_CHIP_ID as u16,
            ADC_ADDR_SYNC_FLAG => {
                (self.sync_timing_violation as u16) << SYNC_FLAG_BIT_TIMING_VIOLATION
            }
            addr => self.regs.get(&addr).copied().unwrap_or(0),
        }
    }

    pub fn write(&mut self, addr: u16, data: u16) {
        match addr & ADC_ADDRESS_MASK {
            ADC_ADDR_CHIP_ID | ADC_ADDR_SYNC_FLAG => {}
            ADC_ADDR_SYNC_FLAG_RST => self.sync_timing_violation = false,
            addr => {
                self.regs.insert(addr, data);
            }
        }
    }

    pub fn set_sync_timing_violation(&mut self, violated: bool) {
        self.sync_timing_violation = violated;
    }

    #[must_use]
    pub fn sync_timing_violation(&self) -> bool {
        self.sync_timing_violation
    }

    pub(crate) fn transfer(&mut self, word: u32) -> Option<u32> {
        let word = (word & SPI_ADC_WORD_MASK) as u16;
        let addr = match self.pending_address.take() {
            Some(addr) => addr,
            None => {
                self.pending_address = Some(word);
                return None;
            }
        };
        if addr & ADC_WRITE_OPERATION != 0 {
            self.write(addr, word);
            None
        } else {
            Some(self.read(addr) as u32)
        }
    }
}

impl Default for AdcEmulator {
    fn default() -> Self {
        Self::new()
    }
}
