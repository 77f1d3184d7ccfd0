//! Tick pacing and rate measurement.
//!
//! The render loop paces itself with a flat sleep after each simulated tick.
//! There is no deadline scheduling and no frame-time compensation: a slow tick
//! simply makes the whole run slower.
//!
//! # Example
//!
//! ```ignore
//! use starfield::time::TickClock;
//!
//! let mut clock = TickClock::new(Duration::from_millis(100));
//!
//! // In the loop:
//! clock.pace();
//!
//! println!("Tick: {}", clock.ticks());
//! println!("Rate: {:.1}/s", clock.rate());
//! ```

use std::thread;
use std::time::{Duration, Instant};

/// Counts ticks, sleeps between them, and estimates the achieved tick rate.
#[derive(Debug)]
pub struct TickClock {
    /// Sleep applied on every `pace()`.
    interval: Duration,
    /// When the clock was created.
    start: Instant,
    /// Total ticks since start.
    tick_count: u64,
    /// Measured ticks per second (updated periodically).
    rate: f32,
    /// Tick count at last rate update.
    rate_tick_count: u64,
    /// Time of last rate calculation.
    rate_update_time: Instant,
    /// How often to update the rate estimate.
    rate_update_interval: Duration,
}

impl TickClock {
    /// Create a clock that sleeps `interval` per tick.
    pub fn new(interval: Duration) -> Self {
        let now = Instant::now();
        Self {
            interval,
            start: now,
            tick_count: 0,
            rate: 0.0,
            rate_tick_count: 0,
            rate_update_time: now,
            rate_update_interval: Duration::from_millis(1000),
        }
    }

    /// Sleep for the fixed interval, then count the tick.
    pub fn pace(&mut self) {
        if !self.interval.is_zero() {
            thread::sleep(self.interval);
        }
        self.record_tick();
    }

    /// Count a tick without sleeping. Returns `true` when the rate estimate
    /// was refreshed by this call.
    pub fn record_tick(&mut self) -> bool {
        let now = Instant::now();
        self.tick_count += 1;

        let since = now.duration_since(self.rate_update_time);
        if since >= self.rate_update_interval {
            let ticks = self.tick_count - self.rate_tick_count;
            self.rate = ticks as f32 / since.as_secs_f32();
            self.rate_tick_count = self.tick_count;
            self.rate_update_time = now;
            return true;
        }
        false
    }

    /// Fixed sleep per tick.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Total ticks since start.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.tick_count
    }

    /// Measured ticks per second.
    #[inline]
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Wall-clock time since the clock was created.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Change how often the rate estimate refreshes.
    pub fn set_rate_update_interval(&mut self, interval: Duration) {
        self.rate_update_interval = interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_new() {
        let clock = TickClock::new(Duration::from_millis(100));
        assert_eq!(clock.ticks(), 0);
        assert_eq!(clock.rate(), 0.0);
        assert_eq!(clock.interval(), Duration::from_millis(100));
    }

    #[test]
    fn test_pace_sleeps_at_least_interval() {
        let mut clock = TickClock::new(Duration::from_millis(10));
        let before = Instant::now();
        clock.pace();
        clock.pace();

        assert!(before.elapsed() >= Duration::from_millis(20));
        assert_eq!(clock.ticks(), 2);
    }

    #[test]
    fn test_zero_interval_does_not_sleep_long() {
        let mut clock = TickClock::new(Duration::ZERO);
        let before = Instant::now();
        for _ in 0..1000 {
            clock.pace();
        }
        assert_eq!(clock.ticks(), 1000);
        assert!(before.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_rate_updates_after_interval() {
        let mut clock = TickClock::new(Duration::from_millis(5));
        clock.set_rate_update_interval(Duration::from_millis(20));

        let mut refreshed = false;
        for _ in 0..20 {
            clock.pace();
            refreshed |= clock.rate() > 0.0;
        }

        assert!(refreshed);
        // 5 ms sleeps cap the rate at 200/s
        assert!(clock.rate() <= 200.0 + 1.0);
    }
}
