//! Wall-clock frame limiter
//!
//! The simulation advances one fixed tick per accepted frame, so the gate's
//! threshold sets how fast simulated time runs.

use std::time::{Duration, Instant};

/// Default gate: at most one frame every 1/120 s.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / 120);

#[derive(Debug, Clone)]
pub struct FrameGate {
    threshold: Duration,
    last_frame: Instant,
}

impl FrameGate {
    pub fn new(threshold: Duration, now: Instant) -> Self {
        Self {
            threshold,
            last_frame: now,
        }
    }

    /// Accept a frame if strictly more than the threshold has passed since
    /// the last accepted one. Rejected polls leave the reference point as is.
    pub fn try_advance(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_frame) > self.threshold {
            self.last_frame = now;
            true
        } else {
            false
        }
    }

    pub fn threshold(&self) -> Duration {
        self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn rejects_until_threshold_is_exceeded() {
        let start = Instant::now();
        let mut gate = FrameGate::new(10 * MS, start);

        assert!(!gate.try_advance(start));
        assert!(!gate.try_advance(start + 5 * MS));
        assert!(!gate.try_advance(start + 10 * MS));
        assert!(gate.try_advance(start + 11 * MS));
    }

    #[test]
    fn accepted_frame_resets_reference() {
        let start = Instant::now();
        let mut gate = FrameGate::new(10 * MS, start);

        assert!(gate.try_advance(start + 11 * MS));
        assert!(!gate.try_advance(start + 15 * MS));
        assert!(gate.try_advance(start + 22 * MS));
    }

    #[test]
    fn rejected_polls_do_not_delay_the_next_frame() {
        let start = Instant::now();
        let mut gate = FrameGate::new(10 * MS, start);

        for ms in 1..=10 {
            assert!(!gate.try_advance(start + ms * MS));
        }
        assert!(gate.try_advance(start + 10 * MS + Duration::from_micros(1)));
    }

    #[test]
    fn clock_going_backwards_is_not_a_frame() {
        let start = Instant::now() + 50 * MS;
        let mut gate = FrameGate::new(10 * MS, start);
        assert!(!gate.try_advance(start - 20 * MS));
    }

    #[test]
    fn default_interval_is_120_hz() {
        let hz = 1.0 / DEFAULT_FRAME_INTERVAL.as_secs_f64();
        assert!((hz - 120.0).abs() < 1e-3);
    }
}
