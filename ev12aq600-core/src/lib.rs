#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::unescaped_backticks)]

//! Core traits and types for the EV12AQ600 register driver.
//!
//! This crate only describes the boundary of the driver: the byte channel to the FPGA UART
//! slave ([`transport::Transport`]) and the sleep primitive every poll loop is built on
//! ([`sleep::Sleep`]).

/// Sleep primitives used by the polling loops.
pub mod sleep;
/// A byte channel to the device.
pub mod transport;
