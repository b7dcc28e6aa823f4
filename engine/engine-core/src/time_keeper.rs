//! Wall-clock deadlines for time-bounded searches.
//!
//! Deadlines are advisory: a search that finds its keeper already expired
//! still has to return something, usually `None`.

use std::time::{Duration, Instant};

/// Deadline measured in whole milliseconds from construction.
#[derive(Debug, Clone, Copy)]
pub struct TimeKeeper {
    start: Instant,
    threshold: Duration,
}

impl TimeKeeper {
    pub fn new(threshold_ms: u64) -> Self {
        Self {
            start: Instant::now(),
            threshold: Duration::from_millis(threshold_ms),
        }
    }

    /// Milliseconds elapsed since construction.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// True once elapsed time reaches the threshold.
    #[inline]
    pub fn is_time_over(&self) -> bool {
        self.start.elapsed() >= self.threshold
    }
}

/// Deadline with a cached elapsed-time sample.
///
/// Call [`set_now_time`](Self::set_now_time) once per loop iteration; both
/// [`now_time`](Self::now_time) and [`is_time_over`](Self::is_time_over) read
/// the cached sample instead of the clock.
#[derive(Debug, Clone, Copy)]
pub struct TimeKeeperF64 {
    start: Instant,
    threshold_ms: f64,
    now_ms: f64,
}

impl TimeKeeperF64 {
    pub fn new(threshold_ms: f64) -> Self {
        Self {
            start: Instant::now(),
            threshold_ms,
            now_ms: 0.0,
        }
    }

    /// Sample the clock and cache the elapsed milliseconds.
    #[inline]
    pub fn set_now_time(&mut self) {
        self.now_ms = self.start.elapsed().as_micros() as f64 * 1e-3;
    }

    /// Elapsed milliseconds as of the last `set_now_time` call.
    #[inline]
    pub fn now_time(&self) -> f64 {
        self.now_ms
    }

    #[inline]
    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }

    #[inline]
    pub fn is_time_over(&self) -> bool {
        self.now_ms >= self.threshold_ms
    }
}
