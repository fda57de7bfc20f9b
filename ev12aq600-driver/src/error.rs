use std::time::Duration;

use ev12aq600_core::transport::TransportError;
use thiserror::Error;

use crate::firmware::fpga::{FPGA_REG_NUM, REG_ADDRESS_MAX};

/// A interface for error handling in ev12aq600-driver.
#[derive(Error, Debug, PartialEq, Clone)]
#[non_exhaustive]
pub enum EV12DriverError {
    /// The acknowledgment marker was not received in time.
    #[error("Acknowledgment {marker:#04X} was not received within {timeout:?}")]
    AckTimeout {
        /// The awaited marker byte.
        marker: u8,
        /// The bound that elapsed.
        timeout: Duration,
    },
    /// The SPI master output FIFO stayed empty.
    #[error("SPI output FIFO is still empty after {0:?}")]
    SpiFifoTimeout(Duration),
    /// Fewer response bytes arrived than the frame requires.
    #[error("Expected {expected} response bytes, but received {received}")]
    ShortRead {
        /// Size of the response.
        expected: usize,
        /// Number of bytes actually received.
        received: usize,
    },

    /// Register address does not fit in 15 bits.
    #[error("Register address ({0:#06X}) is out of range ([0, {max:#06X}])", max = REG_ADDRESS_MAX)]
    AddressOutOfRange(u16),
    /// Register has no entry in the shadow image.
    #[error("Register ({0}) has no shadow entry ([0, {max}])", max = FPGA_REG_NUM - 1)]
    ShadowIndexOutOfRange(u16),
    /// Bit index is greater than 31.
    #[error("Bit index ({0}) is out of range ([0, 31])")]
    BitIndexOutOfRange(u8),

    /// Transport is closed.
    #[error("Transport is closed")]
    TransportClosed,
    /// Error in the transport.
    #[error("{0}")]
    Transport(#[from] TransportError),
}

impl EV12DriverError {
    /// Checks if the error is a timeout of the acknowledgment or of the SPI output FIFO.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(
            self,
            EV12DriverError::AckTimeout { .. } | EV12DriverError::SpiFifoTimeout(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[rstest::rstest]
    #[case(
        "Acknowledgment 0xAC was not received within 1s",
        EV12DriverError::AckTimeout { marker: 0xAC, timeout: Duration::from_secs(1) }
    )]
    #[case(
        "SPI output FIFO is still empty after 5s",
        EV12DriverError::SpiFifoTimeout(Duration::from_secs(5))
    )]
    #[case(
        "Expected 4 response bytes, but received 3",
        EV12DriverError::ShortRead { expected: 4, received: 3 }
    )]
    #[case(
        "Register address (0x8000) is out of range ([0, 0x7FFF])",
        EV12DriverError::AddressOutOfRange(0x8000)
    )]
    #[case(
        "Register (255) has no shadow entry ([0, 19])",
        EV12DriverError::ShadowIndexOutOfRange(255)
    )]
    #[case("Bit index (32) is out of range ([0, 31])", EV12DriverError::BitIndexOutOfRange(32))]
    #[case("Transport is closed", EV12DriverError::TransportClosed)]
    fn display(#[case] expect: &str, #[case] err: EV12DriverError) {
        assert_eq!(expect, err.to_string());
    }

    #[test]
    fn transport_error_source() {
        let err = EV12DriverError::from(TransportError::new("broken"));
        assert!(err.source().is_some());
        assert_eq!("broken", err.to_string());
        assert!(!err.is_timeout());
    }

    #[test]
    fn is_timeout() {
        assert!(EV12DriverError::AckTimeout {
            marker: 0xAC,
            timeout: Duration::ZERO
        }
        .is_timeout());
        assert!(EV12DriverError::SpiFifoTimeout(Duration::ZERO).is_timeout());
        assert!(!EV12DriverError::ShortRead {
            expected: 4,
            received: 0
        }
        .is_timeout());
    }
}
