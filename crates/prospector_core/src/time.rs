//! Timing for load and save reporting.

use std::time::{Duration, Instant};

/// Measures how long a load or save took.
///
/// ```
/// use prospector_core::Stopwatch;
///
/// let timer = Stopwatch::start();
/// // ... load ...
/// tracing::info!(elapsed_ms = timer.elapsed_ms(), "loaded");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch(Instant);

impl Stopwatch {
    /// Starts timing now.
    #[must_use]
    pub fn start() -> Self {
        Self(Instant::now())
    }

    /// Returns the time since [`start`](Self::start).
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }

    /// Returns the elapsed time in milliseconds, with sub-millisecond precision.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_grows() {
        let timer = Stopwatch::start();
        let first = timer.elapsed();
        std::thread::sleep(Duration::from_millis(2));
        assert!(timer.elapsed() > first);
        assert!(timer.elapsed_ms() >= 2.0);
    }
}
