use std::time::Duration;

use derive_new::new;
use ev12aq600_core::{sleep::Sleep, transport::Transport};
use getset::{CopyGetters, Getters};
use itertools::Itertools;

use crate::{error::EV12DriverError, option::SessionOption};

use super::poll_until;

/// A received acknowledgment.
#[derive(Debug, Clone, PartialEq, Eq, Getters, CopyGetters)]
pub struct Ack {
    /// The marker that was found.
    #[getset(get_copy = "pub")]
    marker: u8,
    /// Every byte drained while waiting, marker included.
    #[getset(get = "pub")]
    received: Vec<u8>,
}

impl Ack {
    /// Checks if the marker was the only byte received.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.received.as_slice() == [self.marker]
    }
}

/// Waits for the acknowledgment marker of a frame.
///
/// Incoming bytes are accumulated and the marker is searched anywhere in them, so leftovers of a
/// previous transaction or an acknowledgment bundled with data do not break the wait.
#[derive(Debug, Clone, Copy, new)]
pub struct AckWaiter<'a, S: Sleep> {
    marker: u8,
    interval: Duration,
    timeout: Duration,
    sleeper: &'a S,
}

impl<'a, S: Sleep> AckWaiter<'a, S> {
    /// Creates an [`AckWaiter`] from the session parameters.
    #[must_use]
    pub const fn from_option(option: &'a SessionOption<S>) -> Self {
        Self {
            marker: option.ack_marker,
            interval: option.ack_poll_interval,
            timeout: option.ack_timeout,
            sleeper: &option.sleeper,
        }
    }

    /// Polls `transport` until the marker is received.
    ///
    /// # Errors
    ///
    /// Returns [`EV12DriverError::AckTimeout`] if the slept time reaches the timeout first.
    pub fn wait<T: Transport>(&self, transport: &mut T) -> Result<Ack, EV12DriverError> {
        let mut received = Vec::new();
        let found = poll_until(self.sleeper, self.interval, self.timeout, || {
            let bytes = transport.drain()?;
            if !bytes.is_empty() {
                tracing::trace!("recv: {:#04X}", bytes.iter().format(", "));
                received.extend(bytes);
            }
            Ok::<_, EV12DriverError>(received.contains(&self.marker))
        })?;

        if found {
            Ok(Ack {
                marker: self.marker,
                received,
            })
        } else {
            tracing::error!(
                "Acknowledgment {:#04X} was not received within {:?}",
                self.marker,
                self.timeout
            );
            Err(EV12DriverError::AckTimeout {
                marker: self.marker,
                timeout: self.timeout,
            })
        }
    }
}
