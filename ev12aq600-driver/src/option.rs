use std::time::Duration;

use ev12aq600_core::sleep::{Sleep, StdSleeper};

use crate::firmware::fpga::ACK;

/// Timing parameters of a session.
///
/// All waits count elapsed time as the sum of the poll intervals slept, so a bound is reached
/// after exactly `timeout / interval` polls regardless of how long each transport call takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOption<S: Sleep> {
    /// Byte that acknowledges a frame.
    pub ack_marker: u8,
    /// The duration between two polls of the acknowledgment.
    pub ack_poll_interval: Duration,
    /// The bound on the acknowledgment wait.
    pub ack_timeout: Duration,
    /// The timeout of the blocking read of a register value.
    pub read_timeout: Duration,
    /// The duration between two polls of the SPI FIFO flags.
    pub fifo_poll_interval: Duration,
    /// The bound on the SPI output FIFO wait.
    pub fifo_timeout: Duration,
    /// The delay after a bit update, which lets the FPGA logic observe the new value.
    pub settle_delay: Duration,
    /// How long the data check module is held in reset.
    pub check_reset_hold: Duration,
    /// The sleeper used by every wait.
    pub sleeper: S,
}

impl<S: Default + Sleep> Default for SessionOption<S> {
    fn default() -> Self {
        Self {
            ack_marker: ACK,
            ack_poll_interval: Duration::from_millis(50),
            ack_timeout: Duration::from_secs(1),
            read_timeout: Duration::from_secs(1),
            fifo_poll_interval: Duration::from_millis(50),
            fifo_timeout: Duration::from_secs(5),
            settle_delay: Duration::from_millis(1),
            check_reset_hold: Duration::from_millis(100),
            sleeper: S::default(),
        }
    }
}

impl SessionOption<StdSleeper> {
    /// Creates the default option with [`StdSleeper`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S: Sleep> SessionOption<S> {
    /// Replaces the sleeper, keeping every other parameter.
    #[must_use]
    pub fn with_sleeper<S2: Sleep>(self, sleeper: S2) -> SessionOption<S2> {
        SessionOption {
            ack_marker: self.ack_marker,
            ack_poll_interval: self.ack_poll_interval,
            ack_timeout: self.ack_timeout,
            read_timeout: self.read_timeout,
            fifo_poll_interval: self.fifo_poll_interval,
            fifo_timeout: self.fifo_timeout,
            settle_delay: self.settle_delay,
            check_reset_hold: self.check_reset_hold,
            sleeper,
        }
    }
}
