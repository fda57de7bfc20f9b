use std::time::Duration;

use ev12aq600_core::sleep::Sleep;

const MIN_POLL_INTERVAL: Duration = Duration::from_micros(1);

/// Sleeps `interval` and evaluates `cond` until it holds or the slept time reaches `timeout`.
///
/// The bound is checked before `cond`, so a condition that would only hold at exactly
/// `timeout` is reported as not satisfied. Returns whether `cond` was satisfied.
pub(crate) fn poll_until<S: Sleep, E>(
    sleeper: &S,
    interval: Duration,
    timeout: Duration,
    mut cond: impl FnMut() -> Result<bool, E>,
) -> Result<bool, E> {
    let interval = interval.max(MIN_POLL_INTERVAL);
    let mut elapsed = Duration::ZERO;
    loop {
        sleeper.sleep(interval);
        elapsed += interval;
        if elapsed >= timeout {
            return Ok(false);
        }
        if cond()? {
            return Ok(true);
        }
        tracing::trace!("...{:?}", elapsed);
    }
}
