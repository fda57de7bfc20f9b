use ev12aq600_core::{sleep::Sleep, transport::Transport};

use crate::{
    error::EV12DriverError,
    firmware::{
        adc::{check_address, read_address_word, write_address_word},
        fpga::{
            SpiFifoFlags, SpiSlave, ADDR_SPI_CTL, ADDR_SPI_FIFO_FLAGS, ADDR_SPI_FIFO_IN,
            ADDR_SPI_FIFO_OUT, SPI_CTL_BIT_SLAVE_SELECT, SPI_CTL_BIT_START,
        },
        frame::RegisterAddress,
        pll::PllPreset,
    },
    shadow::{AdcRegisterImage, FpgaRegisterImage},
    transmission::{poll_until, RegisterEngine},
};

/// Tunnels ADC and PLL register accesses through the FPGA SPI master.
///
/// Words are pushed into the input FIFO one register write at a time and are shifted out
/// together on the next start pulse. Read-back data of the ADC lands in the output FIFO.
pub struct SpiProxy<'a, T: Transport, S: Sleep> {
    engine: RegisterEngine<'a, T, S>,
    fpga: &'a mut FpgaRegisterImage,
    adc: &'a mut AdcRegisterImage,
}

impl<'a, T: Transport, S: Sleep> SpiProxy<'a, T, S> {
    /// Creates a new [`SpiProxy`].
    #[must_use]
    pub fn new(
        engine: RegisterEngine<'a, T, S>,
        fpga: &'a mut FpgaRegisterImage,
        adc: &'a mut AdcRegisterImage,
    ) -> Self {
        Self { engine, fpga, adc }
    }

    /// The slave currently recorded in the SPI control register.
    #[must_use]
    pub fn selected_slave(&self) -> SpiSlave {
        self.fpga.spi_slave()
    }

    /// Routes the SPI master to `slave`.
    pub fn select_slave(&mut self, slave: SpiSlave) -> Result<(), EV12DriverError> {
        tracing::debug!("select {:?}", slave);
        match slave {
            SpiSlave::Adc => {
                self.engine
                    .unset_bit(self.fpga, ADDR_SPI_CTL, SPI_CTL_BIT_SLAVE_SELECT)
            }
            SpiSlave::ExternalPll => {
                self.engine
                    .set_bit(self.fpga, ADDR_SPI_CTL, SPI_CTL_BIT_SLAVE_SELECT)
            }
        }
    }

    fn ensure_slave(&mut self, slave: SpiSlave) -> Result<(), EV12DriverError> {
        if self.selected_slave() != slave {
            self.select_slave(slave)?;
        }
        Ok(())
    }

    /// Pushes `word` into the SPI input FIFO.
    ///
    /// The word is truncated to the width `slave` takes. It is the caller's job to have
    /// selected `slave` before the next start pulse.
    pub fn enqueue_word(&mut self, slave: SpiSlave, word: u32) -> Result<(), EV12DriverError> {
        let word = word & slave.word_mask();
        tracing::trace!("enqueue {:#08X} for {:?}", word, slave);
        self.engine
            .write_shadowed(self.fpga, ADDR_SPI_FIFO_IN, word)?;
        Ok(())
    }

    /// Pushes `word` masked for the slave currently selected.
    pub fn enqueue_word_for_selected(&mut self, word: u32) -> Result<(), EV12DriverError> {
        self.enqueue_word(self.selected_slave(), word)
    }

    /// Shifts every queued word out to the selected slave.
    pub fn start(&mut self) -> Result<(), EV12DriverError> {
        self.engine
            .set_bit(self.fpga, ADDR_SPI_CTL, SPI_CTL_BIT_START)?;
        self.engine
            .unset_bit(self.fpga, ADDR_SPI_CTL, SPI_CTL_BIT_START)
    }

    /// Records `data` for the ADC register at `address` and queues the write.
    ///
    /// Nothing is sent to the ADC until [`SpiProxy::start`] is called.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn write_adc_register(&mut self, address: u16, data: u32) -> Result<(), EV12DriverError> {
        let address = check_address(address)?;
        self.adc.store(address, data);
        self.queue_adc_register(address)
    }

    /// Queues a write of the shadowed value of the ADC register at `address`.
    ///
    /// Nothing is sent to the ADC until [`SpiProxy::start`] is called.
    pub fn queue_adc_register(&mut self, address: u16) -> Result<(), EV12DriverError> {
        let address = check_address(address)?;
        self.ensure_slave(SpiSlave::Adc)?;
        self.enqueue_word(SpiSlave::Adc, write_address_word(address))?;
        self.enqueue_word(SpiSlave::Adc, self.adc.get(address))
    }

    /// Reads the ADC register at `address`.
    ///
    /// # Errors
    ///
    /// Returns [`EV12DriverError::SpiFifoTimeout`] if the output FIFO is still empty when the
    /// FIFO timeout elapses.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn read_adc_register(&mut self, address: u16) -> Result<u32, EV12DriverError> {
        let address = check_address(address)?;
        self.ensure_slave(SpiSlave::Adc)?;
        self.enqueue_word(SpiSlave::Adc, read_address_word(address))?;
        self.enqueue_word(SpiSlave::Adc, self.adc.get(address))?;
        self.start()?;
        self.wait_output_fifo()?;
        self.read_fifo_out()
    }

    /// Reads the SPI FIFO flags.
    pub fn fifo_flags(&mut self) -> Result<SpiFifoFlags, EV12DriverError> {
        Ok(SpiFifoFlags::from_bits_truncate(
            self.engine
                .read_register(RegisterAddress::new(ADDR_SPI_FIFO_FLAGS)?)?,
        ))
    }

    /// Pops a word from the SPI output FIFO.
    pub fn read_fifo_out(&mut self) -> Result<u32, EV12DriverError> {
        self.engine
            .read_register(RegisterAddress::new(ADDR_SPI_FIFO_OUT)?)
    }

    fn wait_output_fifo(&mut self) -> Result<(), EV12DriverError> {
        let option = self.engine.option;
        let (sleeper, interval, timeout) = (
            &option.sleeper,
            option.fifo_poll_interval,
            option.fifo_timeout,
        );
        if poll_until(sleeper, interval, timeout, || {
            self.fifo_flags().map(|flags| flags.has_output())
        })? {
            return Ok(());
        }
        tracing::error!("SPI output FIFO is still empty after {:?}", timeout);
        Err(EV12DriverError::SpiFifoTimeout(timeout))
    }

    /// Sends `words` to the external PLL in one burst.
    pub fn write_pll_words(&mut self, words: &[u32]) -> Result<(), EV12DriverError> {
        self.ensure_slave(SpiSlave::ExternalPll)?;
        words
            .iter()
            .try_for_each(|&word| self.enqueue_word(SpiSlave::ExternalPll, word))?;
        self.start()
    }

    /// Programs the external PLL with `preset`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn configure_pll(&mut self, preset: PllPreset) -> Result<(), EV12DriverError> {
        self.write_pll_words(preset.words())
    }
}
