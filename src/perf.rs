//! Lightweight performance instrumentation.
//!
//! RAII-style scoped timers for hot paths (drag handling, rendering).
//! Timers over their threshold log a warning; with the `profiling` feature
//! enabled, every scope logs its duration at trace level.

use std::time::{Duration, Instant};

/// Default threshold before a scope is considered slow (one 60fps frame).
pub const DEFAULT_SLOW_THRESHOLD_MS: u64 = 16;

/// A scoped timer that logs its duration on drop.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold: Duration,
}

impl ScopedTimer {
    /// Create a timer with an explicit slow-warning threshold.
    pub fn new(name: &'static str, threshold_ms: u64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold: Duration::from_millis(threshold_ms),
        }
    }

    /// Create a timer with the default threshold.
    pub fn for_profiling(name: &'static str) -> Self {
        Self::new(name, DEFAULT_SLOW_THRESHOLD_MS)
    }

    /// Elapsed time without stopping the timer.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// The scope's name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed = self.start.elapsed();
        if elapsed > self.threshold {
            tracing::warn!(scope = self.name, ?elapsed, "slow scope");
        } else {
            #[cfg(feature = "profiling")]
            tracing::trace!(scope = self.name, ?elapsed, "scope timing");
        }
    }
}

/// Time the enclosing scope when the `profiling` feature is enabled;
/// compiles to nothing otherwise.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_profiling($name);
    };
}
