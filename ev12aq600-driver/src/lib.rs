#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Register transport and SPI proxy for the EV12AQ600 evaluation FPGA design.
//!
//! The FPGA exposes a flat space of 32-bit registers behind a UART slave. This crate
//! implements the frame layer of that UART protocol, the acknowledgment handshake, the
//! host-side shadow images used for bit-level updates, and the SPI proxy that tunnels ADC and
//! PLL register accesses through the FPGA SPI master FIFOs.

/// Error definitions.
pub mod error;
/// Register map, frame layout and register tables of the attached chips.
pub mod firmware;
/// Timing parameters of a session.
pub mod option;
/// Host-side write caches of register values.
pub mod shadow;
/// SPI proxy to the ADC and the external PLL.
pub mod spi;
/// Register transport engine.
pub mod transmission;

pub use ev12aq600_core as core;

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        error::EV12DriverError,
        firmware::{
            fpga::{SpiFifoFlags, SpiSlave},
            frame::RegisterAddress,
            pll::PllPreset,
        },
        option::SessionOption,
        shadow::{AdcRegisterImage, FpgaRegisterImage},
        spi::SpiProxy,
        transmission::{Ack, AckWaiter, RegisterEngine},
    };
    pub use ev12aq600_core::{
        sleep::{Sleep, SpinSleeper, SpinWaitSleeper, StdSleeper, VirtualSleeper},
        transport::{Transport, TransportError},
    };
}
