use ev12aq600_core::{sleep::Sleep, transport::Transport};
use ev12aq600_driver::{
    error::EV12DriverError,
    firmware::{
        adc::{
            ADC_ADDR_CHIP_ID, ADC_ADDR_SYNC_FLAG, ADC_ADDR_SYNC_FLAG_RST,
            ADC_ADDR_SYNC_SAMPLING_EDGE, ADC_ADDR_TEST_MODE_EN, ADC_ADDR_TEST_PATTERN_SEL,
            SYNC_SAMPLING_BIT_NEGATIVE_EDGE, TEST_MODE_BIT_ENABLE, TEST_PATTERN_BIT_0,
            TEST_PATTERN_BIT_2, TEST_PATTERN_BIT_RAMP,
        },
        pll::PllPreset,
    },
};

use super::Controller;

impl<T: Transport, S: Sleep> Controller<T, S> {
    /// Sets `bit` of the ADC register at `address` in the shadow image only.
    ///
    /// Call [`Self::queue_adc_register`] and [`Self::spi_start_pulse`] to send it.
    pub fn set_adc_bit(&mut self, address: u16, bit: u8) -> Result<(), EV12DriverError> {
        self.adc_image.set_bit(address, bit)?;
        Ok(())
    }

    /// Clears `bit` of the ADC register at `address` in the shadow image only.
    ///
    /// Like [`Self::set_adc_bit`], this rejects an `address` above `0x7FFF`.
    pub fn unset_adc_bit(&mut self, address: u16, bit: u8) -> Result<(), EV12DriverError> {
        self.adc_image.unset_bit(address, bit)?;
        Ok(())
    }

    /// Queues a write of the shadowed value of the ADC register at `address`.
    pub fn queue_adc_register(&mut self, address: u16) -> Result<(), EV12DriverError> {
        self.spi().queue_adc_register(address)
    }

    /// Queues a write of `data` to the ADC register at `address`.
    ///
    /// Nothing reaches the ADC until [`Self::spi_start_pulse`].
    pub fn write_adc_register(&mut self, address: u16, data: u32) -> Result<(), EV12DriverError> {
        self.spi().write_adc_register(address, data)
    }

    /// Reads the ADC register at `address` through the SPI output FIFO.
    pub fn read_adc_register(&mut self, address: u16) -> Result<u32, EV12DriverError> {
        self.spi().read_adc_register(address)
    }

    fn adc_test_mode(&mut self, enable: bool, ramp: bool) -> Result<(), EV12DriverError> {
        if enable {
            self.set_adc_bit(ADC_ADDR_TEST_MODE_EN, TEST_MODE_BIT_ENABLE)?;
        } else {
            self.unset_adc_bit(ADC_ADDR_TEST_MODE_EN, TEST_MODE_BIT_ENABLE)?;
        }
        self.queue_adc_register(ADC_ADDR_TEST_MODE_EN)?;

        self.set_adc_bit(ADC_ADDR_TEST_PATTERN_SEL, TEST_PATTERN_BIT_0)?;
        if ramp {
            self.set_adc_bit(ADC_ADDR_TEST_PATTERN_SEL, TEST_PATTERN_BIT_RAMP)?;
        } else {
            self.unset_adc_bit(ADC_ADDR_TEST_PATTERN_SEL, TEST_PATTERN_BIT_RAMP)?;
        }
        self.set_adc_bit(ADC_ADDR_TEST_PATTERN_SEL, TEST_PATTERN_BIT_2)?;
        self.queue_adc_register(ADC_ADDR_TEST_PATTERN_SEL)?;

        self.spi_start_pulse()
    }

    /// Makes the ADC output the ramp test pattern.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn adc_configuration_ramp_mode(&mut self) -> Result<(), EV12DriverError> {
        self.adc_test_mode(true, true)
    }

    /// Makes the ADC output converted samples.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn adc_configuration_normal_mode(&mut self) -> Result<(), EV12DriverError> {
        self.adc_test_mode(false, true)
    }

    /// Selects test pattern 0 with the test mode disabled.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn adc_configuration_pattern0_mode(&mut self) -> Result<(), EV12DriverError> {
        self.adc_test_mode(false, false)
    }

    /// Clears the SYNC timing violation flag of the ADC.
    pub fn adc_reset_sync_flag(&mut self) -> Result<(), EV12DriverError> {
        self.queue_adc_register(ADC_ADDR_SYNC_FLAG_RST)?;
        self.spi_start_pulse()
    }

    /// Bit 0 is set if a timing violation occurred on SYNC.
    pub fn adc_sync_flag(&mut self) -> Result<u32, EV12DriverError> {
        self.read_adc_register(ADC_ADDR_SYNC_FLAG)
    }

    /// Makes the ADC sample SYNC on the falling edge of its clock.
    pub fn adc_sync_sampling_on_negative_edge(&mut self) -> Result<(), EV12DriverError> {
        self.set_adc_bit(ADC_ADDR_SYNC_SAMPLING_EDGE, SYNC_SAMPLING_BIT_NEGATIVE_EDGE)?;
        self.queue_adc_register(ADC_ADDR_SYNC_SAMPLING_EDGE)?;
        self.spi_start_pulse()
    }

    /// Makes the ADC sample SYNC on the rising edge of its clock.
    pub fn adc_sync_sampling_on_positive_edge(&mut self) -> Result<(), EV12DriverError> {
        self.unset_adc_bit(ADC_ADDR_SYNC_SAMPLING_EDGE, SYNC_SAMPLING_BIT_NEGATIVE_EDGE)?;
        self.queue_adc_register(ADC_ADDR_SYNC_SAMPLING_EDGE)?;
        self.spi_start_pulse()
    }

    /// Reads the chip ID of the ADC, which is `0x0914` for the EV12AQ600.
    pub fn adc_chip_id(&mut self) -> Result<u32, EV12DriverError> {
        self.read_adc_register(ADC_ADDR_CHIP_ID)
    }

    /// Programs the external PLL with `preset`.
    ///
    /// The SPI master is left routed to the PLL.
    pub fn external_pll_configuration(&mut self, preset: PllPreset) -> Result<(), EV12DriverError> {
        self.spi().configure_pll(preset)
    }
}
