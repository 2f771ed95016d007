//! Shared infrastructure for Prospector crates.
//!
//! - [`TracingSettings`] - Installs a `tracing` subscriber for hosts without one
//! - [`Stopwatch`] - Timer used to report load and save durations
//!
//! With the `test-utils` feature, [`init_test_tracing`] routes events through
//! the test harness output.

mod logging;
mod time;

#[cfg(any(test, feature = "test-utils"))]
pub use logging::init_test_tracing;
pub use logging::{TracingFormat, TracingSettings};
pub use time::Stopwatch;
