use ev12aq600_core::{sleep::Sleep, transport::Transport};
use ev12aq600_driver::{
    error::EV12DriverError,
    firmware::fpga::{
        SpiFifoFlags, SpiSlave, ADDR_CHECK_PATTERN, ADDR_HDL_VERSION, ADDR_HW_CTL, ADDR_RESET,
        ADDR_RX_PRBS, ADDR_STATUS, ADDR_SYNC_CTL, ADDR_SYNC_MODE, CHECK_PATTERN_BIT_PATTERN0,
        CHECK_PATTERN_BIT_RAMP, HW_CTL_BIT_ADC_POWER, HW_CTL_BIT_EXT_SYNC, HW_CTL_BIT_FPGA_SYNC,
        HW_CTL_BIT_PLL_ENABLE, RESET_BIT_ADC_RSTN, RESET_BIT_CHECK, RESET_BIT_ESISTREAM,
        RESET_BIT_SYNC_GEN, RX_PRBS_BIT_ENABLE, SYNC_CTL_BIT_MANUAL, SYNC_CTL_BIT_PULSE,
        SYNC_MODE_BIT_TRAINING,
    },
};

use super::Controller;

impl<T: Transport, S: Sleep> Controller<T, S> {
    fn pulse(&mut self, address: u16, bit: u8) -> Result<(), EV12DriverError> {
        self.set_bit(address, bit)?;
        self.unset_bit(address, bit)
    }

    /// Makes the RX data check module expect the ramp pattern.
    pub fn ramp_check_enable(&mut self) -> Result<(), EV12DriverError> {
        self.set_bit(ADDR_CHECK_PATTERN, CHECK_PATTERN_BIT_RAMP)?;
        self.unset_bit(ADDR_CHECK_PATTERN, CHECK_PATTERN_BIT_PATTERN0)
    }

    /// Makes the RX data check module expect test pattern 0.
    pub fn pattern0_check_enable(&mut self) -> Result<(), EV12DriverError> {
        self.unset_bit(ADDR_CHECK_PATTERN, CHECK_PATTERN_BIT_RAMP)?;
        self.unset_bit(ADDR_CHECK_PATTERN, CHECK_PATTERN_BIT_PATTERN0)
    }

    /// Enables the PRBS decoding of the ESIstream RX IP.
    pub fn rx_prbs_enable(&mut self) -> Result<(), EV12DriverError> {
        self.set_bit(ADDR_RX_PRBS, RX_PRBS_BIT_ENABLE)
    }

    /// Disables the PRBS decoding of the ESIstream RX IP.
    pub fn rx_prbs_disable(&mut self) -> Result<(), EV12DriverError> {
        self.unset_bit(ADDR_RX_PRBS, RX_PRBS_BIT_ENABLE)
    }

    /// Pulses the global software reset.
    pub fn esistream_reset_pulse(&mut self) -> Result<(), EV12DriverError> {
        self.pulse(ADDR_RESET, RESET_BIT_ESISTREAM)
    }

    /// Resets the RX data check module.
    ///
    /// Use it after a SYNC pulse, once the link is synchronized, to restart the check of the
    /// decoded data. The reset is held for [`SessionOption::check_reset_hold`].
    ///
    /// [`SessionOption::check_reset_hold`]: ev12aq600_driver::option::SessionOption::check_reset_hold
    pub fn rst_check_pulse(&mut self) -> Result<(), EV12DriverError> {
        self.set_bit(ADDR_RESET, RESET_BIT_CHECK)?;
        self.option.sleeper.sleep(self.option.check_reset_hold);
        self.unset_bit(ADDR_RESET, RESET_BIT_CHECK)
    }

    /// Pulses the ADC reset, which is active low.
    pub fn adc_rstn_pulse(&mut self) -> Result<(), EV12DriverError> {
        self.unset_bit(ADDR_RESET, RESET_BIT_ADC_RSTN)?;
        self.set_bit(ADDR_RESET, RESET_BIT_ADC_RSTN)
    }

    /// Holds the ADC in reset.
    pub fn activate_adc_rstn(&mut self) -> Result<(), EV12DriverError> {
        self.unset_bit(ADDR_RESET, RESET_BIT_ADC_RSTN)
    }

    /// Releases the ADC from reset.
    pub fn deactivate_adc_rstn(&mut self) -> Result<(), EV12DriverError> {
        self.set_bit(ADDR_RESET, RESET_BIT_ADC_RSTN)
    }

    /// Pulses the reset of the SYNC generator.
    pub fn rx_sync_rst(&mut self) -> Result<(), EV12DriverError> {
        self.pulse(ADDR_RESET, RESET_BIT_SYNC_GEN)
    }

    /// Routes the SPI master to the ADC.
    pub fn spi_ss_adc(&mut self) -> Result<(), EV12DriverError> {
        self.spi().select_slave(SpiSlave::Adc)
    }

    /// Routes the SPI master to the external PLL.
    pub fn spi_ss_external_pll(&mut self) -> Result<(), EV12DriverError> {
        self.spi().select_slave(SpiSlave::ExternalPll)
    }

    /// Sends every word of the SPI input FIFO to the selected slave.
    pub fn spi_start_pulse(&mut self) -> Result<(), EV12DriverError> {
        self.spi().start()
    }

    /// Puts the SYNC counter in training mode.
    pub fn sync_mode_training(&mut self) -> Result<(), EV12DriverError> {
        self.set_bit(ADDR_SYNC_MODE, SYNC_MODE_BIT_TRAINING)
    }

    /// Puts the SYNC counter in normal mode.
    pub fn sync_mode_normal(&mut self) -> Result<(), EV12DriverError> {
        self.unset_bit(ADDR_SYNC_MODE, SYNC_MODE_BIT_TRAINING)
    }

    /// Sends a SYNC pulse to the ESIstream RX IP and to the ADC.
    pub fn sync_pulse(&mut self) -> Result<(), EV12DriverError> {
        self.pulse(ADDR_SYNC_CTL, SYNC_CTL_BIT_PULSE)
    }

    /// Makes SYNC pulses come only from [`Self::sync_pulse`].
    pub fn set_sync_mode_to_manual(&mut self) -> Result<(), EV12DriverError> {
        self.set_bit(ADDR_SYNC_CTL, SYNC_CTL_BIT_MANUAL)
    }

    /// Lets the FPGA generate SYNC pulses periodically.
    pub fn set_sync_mode_to_auto(&mut self) -> Result<(), EV12DriverError> {
        self.unset_bit(ADDR_SYNC_CTL, SYNC_CTL_BIT_MANUAL)
    }

    /// Powers the ADC on.
    pub fn hw_adc_power_enable(&mut self) -> Result<(), EV12DriverError> {
        self.set_bit(ADDR_HW_CTL, HW_CTL_BIT_ADC_POWER)
    }

    /// Powers the ADC off.
    pub fn hw_adc_power_disable(&mut self) -> Result<(), EV12DriverError> {
        self.unset_bit(ADDR_HW_CTL, HW_CTL_BIT_ADC_POWER)
    }

    /// Enables the external PLL.
    pub fn hw_pll_enable(&mut self) -> Result<(), EV12DriverError> {
        self.set_bit(ADDR_HW_CTL, HW_CTL_BIT_PLL_ENABLE)
    }

    /// Disables the external PLL.
    pub fn hw_pll_disable(&mut self) -> Result<(), EV12DriverError> {
        self.unset_bit(ADDR_HW_CTL, HW_CTL_BIT_PLL_ENABLE)
    }

    /// Takes the SYNC signal from the FPGA instead of the external input.
    pub fn hw_select_sync_fpga(&mut self) -> Result<(), EV12DriverError> {
        self.unset_bit(ADDR_HW_CTL, HW_CTL_BIT_EXT_SYNC)?;
        self.set_bit(ADDR_HW_CTL, HW_CTL_BIT_FPGA_SYNC)
    }

    /// The version of the FPGA design.
    pub fn hdl_version(&mut self) -> Result<u32, EV12DriverError> {
        self.read_register(ADDR_HDL_VERSION)
    }

    /// Reads the SPI FIFO flags.
    pub fn spi_fifo_flags(&mut self) -> Result<SpiFifoFlags, EV12DriverError> {
        self.spi().fifo_flags()
    }

    /// Pops a word from the SPI output FIFO.
    pub fn spi_fifo_out(&mut self) -> Result<u32, EV12DriverError> {
        self.spi().read_fifo_out()
    }

    /// The debug status register.
    pub fn status(&mut self) -> Result<u32, EV12DriverError> {
        self.read_register(ADDR_STATUS)
    }
}
