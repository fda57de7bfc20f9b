use std::collections::VecDeque;

use ev12aq600_driver::firmware::fpga::{
    SpiFifoFlags, SpiSlave, ADDR_HDL_VERSION, ADDR_RESET, ADDR_SPI_CTL, ADDR_SPI_FIFO_FLAGS,
    ADDR_SPI_FIFO_IN, ADDR_SPI_FIFO_OUT, ADDR_STATUS, RESET_BIT_ADC_RSTN, SPI_CTL_BIT_START,
};

use crate::{AdcEmulator, PllEmulator};

use super::params::{HDL_VERSION, REG_NUM, SPI_FIFO_DEPTH};

const SPI_START: u32 = 1 << SPI_CTL_BIT_START;
const ADC_RSTN: u32 = 1 << RESET_BIT_ADC_RSTN;

pub struct FPGAEmulator {
    regs: Vec<u32>,
    spi_fifo_in: VecDeque<u32>,
    spi_fifo_out: VecDeque<u32>,
    adc: AdcEmulator,
    pll: PllEmulator,
    status: u32,
    stall_spi: bool,
}

impl FPGAEmulator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            regs: vec![0x0000_0000; REG_NUM],
            spi_fifo_in: VecDeque::with_capacity(SPI_FIFO_DEPTH),
            spi_fifo_out: VecDeque::with_capacity(SPI_FIFO_DEPTH),
            adc: AdcEmulator::new(),
            pll: PllEmulator::new(),
            status: 0x0000_0000,
            stall_spi: false,
        }
    }

    pub fn write(&mut self, addr: u16, data: u32) {
        let Some(&old) = self.regs.get(addr as usize) else {
            return;
        };
        match addr {
            ADDR_HDL_VERSION | ADDR_SPI_FIFO_FLAGS | ADDR_SPI_FIFO_OUT | ADDR_STATUS => return,
            ADDR_SPI_FIFO_IN => {
                if self.spi_fifo_in.len() < SPI_FIFO_DEPTH {
                    self.spi_fifo_in.push_back(data);
                }
            }
            ADDR_SPI_CTL => {
                if old & SPI_START == 0 && data & SPI_START != 0 {
                    self.spi_transfer(SpiSlave::from_spi_ctl(data));
                }
            }
            ADDR_RESET => {
                if old & ADC_RSTN != 0 && data & ADC_RSTN == 0 {
                    self.adc.reset();
                }
            }
            _ => {}
        }
        self.regs[addr as usize] = data;
    }

    pub fn read(&mut self, addr: u16) -> u32 {
        match addr {
            ADDR_SPI_FIFO_OUT => self.spi_fifo_out.pop_front().unwrap_or(0),
            _ => self.peek(addr),
        }
    }

    #[must_use]
    pub fn peek(&self, addr: u16) -> u32 {
        match addr {
            ADDR_HDL_VERSION => HDL_VERSION,
            ADDR_SPI_FIFO_FLAGS => self.spi_fifo_flags().bits(),
            ADDR_SPI_FIFO_OUT => self.spi_fifo_out.front().copied().unwrap_or(0),
            ADDR_STATUS => self.status,
            _ => self.regs.get(addr as usize).copied().unwrap_or(0),
        }
    }

    #[must_use]
    pub fn spi_fifo_flags(&self) -> SpiFifoFlags {
        let mut flags = SpiFifoFlags::empty();
        flags.set(
            SpiFifoFlags::INPUT_FULL,
            self.spi_fifo_in.len() >= SPI_FIFO_DEPTH,
        );
        flags.set(SpiFifoFlags::OUTPUT_EMPTY, self.spi_fifo_out.is_empty());
        flags
    }

    #[must_use]
    pub fn spi_fifo_in(&self) -> &VecDeque<u32> {
        &self.spi_fifo_in
    }

    #[must_use]
    pub fn spi_fifo_out(&self) -> &VecDeque<u32> {
        &self.spi_fifo_out
    }

    #[must_use]
    pub const fn adc(&self) -> &AdcEmulator {
        &self.adc
    }

    pub fn adc_mut(&mut self) -> &mut AdcEmulator {
        &mut self.adc
    }

    #[must_use]
    pub const fn pll(&self) -> &PllEmulator {
        &self.pll
    }

    pub fn set_status(&mut self, status: u32) {
        self.status = status;
    }

    /// While stalled, a start pulse consumes the input FIFO but nothing reaches the slaves.
    pub fn stall_spi(&mut self, stall: bool) {
        self.stall_spi = stall;
    }

    fn spi_transfer(&mut self, slave: SpiSlave) {
        let words = self.spi_fifo_in.drain(..).collect::<Vec<_>>();
        if self.stall_spi {
            return;
        }
        words.into_iter().for_each(|word| {
            let out = match slave {
                SpiSlave::Adc => self.adc.transfer(word),
                SpiSlave::ExternalPll => self.pll.transfer(word),
            };
            if let Some(out) = out {
                if self.spi_fifo_out.len() < SPI_FIFO_DEPTH {
                    self.spi_fifo_out.push_back(out);
                }
            }
        });
    }
}

impl Default for FPGAEmulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use ev12aq600_driver::firmware::{
        adc::{read_address_word, write_address_word, ADC_ADDR_CHIP_ID},
        fpga::ADDR_HW_CTL,
    };

    use super::*;

    #[test]
    fn register_file() {
        let mut fpga = FPGAEmulator::new();
        fpga.write(ADDR_HW_CTL, 0x0000_1003);
        assert_eq!(0x0000_1003, fpga.read(ADDR_HW_CTL));
        assert_eq!(0x0000_0000, fpga.read(19));
    }

    #[rstest::rstest]
    #[case(HDL_VERSION, ADDR_HDL_VERSION)]
    #[case(0x0000_0002, ADDR_SPI_FIFO_FLAGS)]
    #[case(0x0000_0000, ADDR_SPI_FIFO_OUT)]
    #[case(0x0000_0000, ADDR_STATUS)]
    fn read_only(#[case] expect: u32, #[case] addr: u16) {
        let mut fpga = FPGAEmulator::new();
        fpga.write(addr, 0xFFFF_FFFF);
        assert_eq!(expect, fpga.read(addr));
    }

    #[test]
    fn out_of_range() {
        let mut fpga = FPGAEmulator::new();
        fpga.write(0x7FFF, 0xFFFF_FFFF);
        assert_eq!(0x0000_0000, fpga.read(0x7FFF));
    }

    #[test]
    fn start_on_rising_edge_only() {
        let mut fpga = FPGAEmulator::new();
        fpga.write(ADDR_SPI_FIFO_IN, read_address_word(ADC_ADDR_CHIP_ID));
        fpga.write(ADDR_SPI_FIFO_IN, 0x0000_0000);
        assert_eq!(2, fpga.spi_fifo_in().len());

        fpga.write(ADDR_SPI_CTL, SPI_START);
        assert!(fpga.spi_fifo_in().is_empty());
        assert_eq!(Some(&0x0914), fpga.spi_fifo_out().front());

        fpga.write(ADDR_SPI_FIFO_IN, read_address_word(ADC_ADDR_CHIP_ID));
        fpga.write(ADDR_SPI_FIFO_IN, 0x0000_0000);
        fpga.write(ADDR_SPI_CTL, SPI_START);
        assert_eq!(2, fpga.spi_fifo_in().len());
        assert_eq!(1, fpga.spi_fifo_out().len());

        assert_eq!(0x0000_0000, fpga.read(ADDR_SPI_FIFO_FLAGS));
        assert_eq!(0x0914, fpga.read(ADDR_SPI_FIFO_OUT));
        assert_eq!(0x0000_0002, fpga.read(ADDR_SPI_FIFO_FLAGS));
    }

    #[test]
    fn input_fifo_full() {
        let mut fpga = FPGAEmulator::new();
        (0..SPI_FIFO_DEPTH + 1).for_each(|i| fpga.write(ADDR_SPI_FIFO_IN, i as u32));
        assert_eq!(SPI_FIFO_DEPTH, fpga.spi_fifo_in().len());
        assert!(fpga.spi_fifo_flags().contains(SpiFifoFlags::INPUT_FULL));
    }

    #[test]
    fn pll_slave() {
        let mut fpga = FPGAEmulator::new();
        fpga.write(ADDR_SPI_CTL, 0x0000_0001);
        fpga.write(ADDR_SPI_FIFO_IN, 0x0000_221C);
        fpga.write(ADDR_SPI_CTL, 0x0000_0003);
        assert!(fpga.pll().is_calibrated());
        assert_eq!(0, fpga.adc().num_resets());
    }

    #[test]
    fn stalled() {
        let mut fpga = FPGAEmulator::new();
        fpga.stall_spi(true);
        fpga.write(ADDR_SPI_FIFO_IN, write_address_word(0x0B0A));
        fpga.write(ADDR_SPI_FIFO_IN, 0x0000_0001);
        fpga.write(ADDR_SPI_CTL, SPI_START);
        assert!(fpga.spi_fifo_in().is_empty());
        assert_eq!(0x0000, fpga.adc().read(0x0B0A));
    }

    #[rstest::rstest]
    #[case(1, &[ADC_RSTN, 0])]
    #[case(0, &[0, ADC_RSTN])]
    #[case(2, &[ADC_RSTN, 0, ADC_RSTN, 0])]
    fn adc_reset_on_falling_edge(#[case] expect: usize, #[case] values: &[u32]) {
        let mut fpga = FPGAEmulator::new();
        values.iter().for_each(|&v| fpga.write(ADDR_RESET, v));
        assert_eq!(expect, fpga.adc().num_resets());
    }
}
