//! Fixed inter-entry pacing.
//!
//! The platform throttles emoji creation per user. Rather than reacting to
//! rate-limit responses, the import waits a fixed interval between
//! consecutive entries, one entry at a time.

use std::time::Duration;

use tracing::trace;

/// Sleeps a fixed interval each time [`pause`](Self::pause) is called.
#[derive(Debug, Clone)]
pub struct Pacer {
    delay: Duration,
    pauses: u32,
    total_paused: Duration,
}

impl Pacer {
    /// Creates a pacer that waits `delay` per pause. A zero delay disables it.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pauses: 0,
            total_paused: Duration::ZERO,
        }
    }

    /// Creates a pacer that never waits.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Whether pauses actually sleep.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.delay.is_zero()
    }

    /// Configured delay per pause.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Waits the configured delay.
    pub async fn pause(&mut self) {
        if self.is_disabled() {
            return;
        }
        trace!(delay = ?self.delay, "pacing");
        tokio::time::sleep(self.delay).await;
        self.pauses += 1;
        self.total_paused += self.delay;
    }

    /// Number of pauses that slept.
    #[must_use]
    pub fn pauses(&self) -> u32 {
        self.pauses
    }

    /// Total time spent sleeping.
    #[must_use]
    pub fn total_paused(&self) -> Duration {
        self.total_paused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_pacer_sleeps_configured_delay() {
        let mut pacer = Pacer::new(Duration::from_millis(200));
        let start = Instant::now();

        pacer.pause().await;
        pacer.pause().await;

        assert!(start.elapsed() >= Duration::from_millis(400));
        assert_eq!(pacer.pauses(), 2);
        assert_eq!(pacer.total_paused(), Duration::from_millis(400));
    }

    #[tokio::test(start_paused = true)]
    async fn test_pacer_disabled_never_sleeps() {
        let mut pacer = Pacer::disabled();
        let start = Instant::now();

        pacer.pause().await;

        assert!(pacer.is_disabled());
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(pacer.pauses(), 0);
    }

    #[test]
    fn test_pacer_zero_delay_is_disabled() {
        assert!(Pacer::new(Duration::ZERO).is_disabled());
        assert!(!Pacer::new(Duration::from_millis(1)).is_disabled());
    }
}
