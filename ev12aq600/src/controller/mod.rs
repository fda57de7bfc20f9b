mod adc;
mod fpga;

use ev12aq600_core::{
    sleep::{Sleep, StdSleeper},
    transport::Transport,
};
use ev12aq600_driver::{
    error::EV12DriverError,
    firmware::{fpga::SpiSlave, frame::RegisterAddress},
    option::SessionOption,
    shadow::{AdcRegisterImage, FpgaRegisterImage},
    spi::SpiProxy,
    transmission::{Ack, RegisterEngine},
};
use getset::{Getters, MutGetters};

/// A controller for the EV12AQ600 evaluation FPGA.
///
/// Every register access goes through this struct, which owns the transport and the shadow
/// images. All operations take `&mut self`, so frames of different callers can never
/// interleave on the wire. Wrap the controller in a single `Mutex` to share it between threads.
#[derive(Getters, MutGetters)]
pub struct Controller<T: Transport, S: Sleep = StdSleeper> {
    /// The transport to the FPGA.
    #[getset(get = "pub", get_mut = "pub")]
    transport: T,
    /// Last values written to the FPGA registers.
    #[getset(get = "pub")]
    fpga_image: FpgaRegisterImage,
    /// Last values written to the ADC registers.
    #[getset(get = "pub")]
    adc_image: AdcRegisterImage,
    /// Timing parameters of the session.
    #[getset(get = "pub")]
    option: SessionOption<S>,
}

impl<T: Transport> Controller<T> {
    /// Equivalent to [`Self::open_with_option`] with the default [`SessionOption`].
    pub fn open(transport: T) -> Result<Self, EV12DriverError> {
        Self::open_with_option(transport, SessionOption::default())
    }
}

impl<T: Transport, S: Sleep> Controller<T, S> {
    /// Opens the transport and starts a session with zeroed shadow images.
    #[tracing::instrument(level = "debug", skip(transport))]
    pub fn open_with_option(
        mut transport: T,
        option: SessionOption<S>,
    ) -> Result<Self, EV12DriverError> {
        transport.open()?;
        Ok(Self {
            transport,
            fpga_image: FpgaRegisterImage::new(),
            adc_image: AdcRegisterImage::new(),
            option,
        })
    }

    /// Closes the controller.
    pub fn close(mut self) -> Result<(), EV12DriverError> {
        self.close_impl()
    }

    fn close_impl(&mut self) -> Result<(), EV12DriverError> {
        if !self.transport.is_open() {
            return Ok(());
        }
        tracing::debug!("close transport");
        self.transport.close()?;
        Ok(())
    }

    /// Returns the [`RegisterEngine`] to exchange raw register frames.
    pub fn engine(&mut self) -> RegisterEngine<'_, T, S> {
        RegisterEngine::new(&mut self.transport, &self.option)
    }

    /// Returns the [`SpiProxy`] to access the ADC and the external PLL.
    pub fn spi(&mut self) -> SpiProxy<'_, T, S> {
        SpiProxy::new(
            RegisterEngine::new(&mut self.transport, &self.option),
            &mut self.fpga_image,
            &mut self.adc_image,
        )
    }

    /// Writes `value` to the FPGA register at `address`.
    ///
    /// The shadow image is not updated; use [`Self::set_bit`] and [`Self::unset_bit`] for
    /// registers that are later modified bit by bit.
    pub fn write_register(&mut self, address: u16, value: u32) -> Result<Ack, EV12DriverError> {
        let address = RegisterAddress::new(address)?;
        self.engine().write_register(address, value)
    }

    /// Reads the FPGA register at `address`.
    pub fn read_register(&mut self, address: u16) -> Result<u32, EV12DriverError> {
        let address = RegisterAddress::new(address)?;
        self.engine().read_register(address)
    }

    /// Sets `bit` of the FPGA register at `address`, keeping every other bit of the shadow
    /// image.
    pub fn set_bit(&mut self, address: u16, bit: u8) -> Result<(), EV12DriverError> {
        RegisterEngine::new(&mut self.transport, &self.option).set_bit(
            &mut self.fpga_image,
            address,
            bit,
        )
    }

    /// Clears `bit` of the FPGA register at `address`, keeping every other bit of the shadow
    /// image.
    pub fn unset_bit(&mut self, address: u16, bit: u8) -> Result<(), EV12DriverError> {
        RegisterEngine::new(&mut self.transport, &self.option).unset_bit(
            &mut self.fpga_image,
            address,
            bit,
        )
    }

    /// Pushes `word` into the SPI input FIFO, masked for the slave currently selected.
    pub fn enqueue_word(&mut self, word: u32) -> Result<(), EV12DriverError> {
        self.spi().enqueue_word_for_selected(word)
    }

    /// The SPI slave currently selected.
    #[must_use]
    pub fn spi_slave(&self) -> SpiSlave {
        self.fpga_image.spi_slave()
    }
}

impl<T: Transport, S: Sleep> Drop for Controller<T, S> {
    fn drop(&mut self) {
        if !self.transport.is_open() {
            return;
        }
        let _ = self.close_impl();
    }
}
