#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Host driver for the EV12AQ600 evaluation FPGA design.
//!
//! A [`Controller`] owns the UART transport to the FPGA together with the shadow images of the
//! FPGA and ADC registers, and offers the register-level helpers used to bring up the
//! ESIstream link: resets, SYNC control, test pattern selection and the SPI configuration of
//! the ADC and the external PLL.

/// The [`Controller`] and its register helpers.
pub mod controller;
/// Transports backed by the firmware emulator.
pub mod link;
/// Commonly used types.
pub mod prelude;

pub use ev12aq600_core as core;
pub use ev12aq600_driver as driver;

pub use controller::Controller;
