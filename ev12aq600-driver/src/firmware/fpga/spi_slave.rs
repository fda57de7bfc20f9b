use super::{SPI_ADC_WORD_MASK, SPI_CTL_BIT_SLAVE_SELECT, SPI_PLL_WORD_MASK};

/// SPI slave behind the FPGA SPI master.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpiSlave {
    /// EV12AQ600 ADC. Takes 16-bit words.
    #[default]
    Adc = 0,
    /// External LMX2592 PLL. Takes 24-bit words.
    ExternalPll = 1,
}

impl SpiSlave {
    /// Decodes the slave from the value of the SPI control register.
    #[must_use]
    pub const fn from_spi_ctl(value: u32) -> Self {
        match (value >> SPI_CTL_BIT_SLAVE_SELECT) & 0x1 {
            0 => SpiSlave::Adc,
            _ => SpiSlave::ExternalPll,
        }
    }

    /// Mask applied to every word queued for this slave.
    #[must_use]
    pub const fn word_mask(self) -> u32 {
        match self {
            SpiSlave::Adc => SPI_ADC_WORD_MASK,
            SpiSlave::ExternalPll => SPI_PLL_WORD_MASK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(SpiSlave::Adc, 0x0000_0000)]
    #[case(SpiSlave::ExternalPll, 0x0000_0001)]
    #[case(SpiSlave::Adc, 0x0000_0002)]
    #[case(SpiSlave::ExternalPll, 0xFFFF_FFFF)]
    fn from_spi_ctl(#[case] expect: SpiSlave, #[case] value: u32) {
        assert_eq!(expect, SpiSlave::from_spi_ctl(value));
    }

    #[rstest::rstest]
    #[case(0x0000_FFFF, SpiSlave::Adc, 0x001F_FFFF)]
    #[case(0x001F_FFFF, SpiSlave::ExternalPll, 0x001F_FFFF)]
    #[case(0x0000_FFFF, SpiSlave::Adc, 0xFFFF_FFFF)]
    #[case(0x00FF_FFFF, SpiSlave::ExternalPll, 0xFFFF_FFFF)]
    fn word_mask(#[case] expect: u32, #[case] slave: SpiSlave, #[case] word: u32) {
        assert_eq!(expect, word & slave.word_mask());
    }
}
