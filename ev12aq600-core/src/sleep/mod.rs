use std::{
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
    time::{Duration, Instant},
};

pub use spin_sleep::SpinSleeper;

/// A trait for sleep operations.
pub trait Sleep: std::fmt::Debug {
    /// Sleeps for the specified duration.
    fn sleep(&self, duration: Duration);
}

// GRCOV_EXCL_START
impl Sleep for Box<dyn Sleep + Send> {
    fn sleep(&self, duration: Duration) {
        self.as_ref().sleep(duration);
    }
}
// GRCOV_EXCL_STOP

/// A sleeper that uses [`std::thread::sleep`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StdSleeper;

impl Sleep for StdSleeper {
    fn sleep(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        std::thread::sleep(duration);
    }
}

impl Sleep for SpinSleeper {
    fn sleep(&self, duration: Duration) {
        SpinSleeper::sleep(*self, duration);
    }
}

/// A sleeper that busy-waits until the duration has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpinWaitSleeper;

impl Sleep for SpinWaitSleeper {
    fn sleep(&self, duration: Duration) {
        let deadline = Instant::now() + duration;
        while Instant::now() < deadline {
            std::hint::spin_loop();
        }
    }
}

/// A sleeper that returns immediately and only accumulates the requested durations.
///
/// Clones share the same counter, so a clone kept by the caller observes every sleep issued by
/// the driver. Intended for emulated transports, where the device answers without delay.
#[derive(Debug, Clone, Default)]
pub struct VirtualSleeper {
    elapsed_ns: Arc<AtomicU64>,
}

impl VirtualSleeper {
    /// Creates a new [`VirtualSleeper`] with zero elapsed time.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total time slept so far.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        Duration::from_nanos(self.elapsed_ns.load(Ordering::Relaxed))
    }

    /// Resets the elapsed time to zero.
    pub fn reset(&self) {
        self.elapsed_ns.store(0, Ordering::Relaxed);
    }
}

impl Sleep for VirtualSleeper {
    fn sleep(&self, duration: Duration) {
        self.elapsed_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[rstest::rstest]
    #[case(Duration::from_millis(10))]
    #[case(Duration::ZERO)]
    fn std_sleeper(#[case] duration: Duration) {
        let start = Instant::now();
        StdSleeper.sleep(duration);
        assert!(duration <= start.elapsed());
    }

    #[rstest::rstest]
    #[case(Duration::from_millis(10))]
    #[case(Duration::ZERO)]
    fn spin_sleeper(#[case] duration: Duration) {
        let start = Instant::now();
        Sleep::sleep(&SpinSleeper::default(), duration);
        assert!(duration <= start.elapsed());
    }

    #[rstest::rstest]
    #[case(Duration::from_millis(10))]
    #[case(Duration::ZERO)]
    fn spin_wait_sleeper(#[case] duration: Duration) {
        let start = Instant::now();
        SpinWaitSleeper.sleep(duration);
        assert!(duration <= start.elapsed());
    }

    #[test]
    fn boxed_sleeper() {
        let sleeper: Box<dyn Sleep + Send> = Box::new(StdSleeper);
        let start = Instant::now();
        sleeper.sleep(Duration::from_millis(10));
        assert!(Duration::from_millis(10) <= start.elapsed());
    }

    #[test]
    fn virtual_sleeper() {
        let sleeper = VirtualSleeper::new();
        let observer = sleeper.clone();

        let start = Instant::now();
        sleeper.sleep(Duration::from_secs(5));
        sleeper.sleep(Duration::from_millis(50));
        assert!(start.elapsed() < Duration::from_secs(1));

        assert_eq!(Duration::from_millis(5050), observer.elapsed());
        observer.reset();
        assert_eq!(Duration::ZERO, sleeper.elapsed());
    }
}
