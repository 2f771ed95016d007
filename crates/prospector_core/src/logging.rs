//! Tracing subscriber setup.
//!
//! Prospector crates only emit events through `tracing` macros. The host
//! decides where they go, either with its own subscriber or by calling
//! [`TracingSettings::init`] once at startup.
//!
//! # Example
//!
//! ```
//! use prospector_core::{TracingFormat, TracingSettings};
//! use tracing::Level;
//!
//! TracingSettings::new()
//!     .with_level(Level::DEBUG)
//!     .with_format(TracingFormat::Compact)
//!     .with_env_filter("prospector_store=debug,prospector_generators=info")
//!     .init();
//! ```

use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

// ─────────────────────────────────────────────────────────────────────────────
// TracingFormat
// ─────────────────────────────────────────────────────────────────────────────

/// Tracing output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingFormat {
    /// Human-readable multi-line output (default).
    #[default]
    Pretty,
    /// Compact single-line output.
    Compact,
    /// JSON structured output.
    Json,
}

// ─────────────────────────────────────────────────────────────────────────────
// TracingSettings
// ─────────────────────────────────────────────────────────────────────────────

/// Builder for the global tracing subscriber.
#[derive(Debug, Clone)]
pub struct TracingSettings {
    level: Level,
    format: TracingFormat,
    /// Target directives, e.g. `prospector_store=debug`.
    env_filter: Option<String>,
    span_events: bool,
}

impl Default for TracingSettings {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            format: TracingFormat::Pretty,
            env_filter: None,
            span_events: false,
        }
    }
}

impl TracingSettings {
    /// Creates settings with level `INFO` and pretty output.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum log level.
    #[must_use]
    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Sets the output format.
    #[must_use]
    pub fn with_format(mut self, format: TracingFormat) -> Self {
        self.format = format;
        self
    }

    /// Sets an environment filter directive string.
    ///
    /// Format: `target=level,target=level,...`. An unparseable directive falls
    /// back to the configured level.
    #[must_use]
    pub fn with_env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Enables span enter/exit events in output.
    #[must_use]
    pub fn with_span_events(mut self, enabled: bool) -> Self {
        self.span_events = enabled;
        self
    }

    /// Returns the configured level.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the configured format.
    #[must_use]
    pub fn format(&self) -> TracingFormat {
        self.format
    }

    fn filter(&self) -> EnvFilter {
        match &self.env_filter {
            Some(filter) => {
                EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(self.level.as_str()))
            }
            None => EnvFilter::new(self.level.as_str()),
        }
    }

    fn span_events(&self) -> FmtSpan {
        if self.span_events {
            FmtSpan::ENTER | FmtSpan::EXIT
        } else {
            FmtSpan::NONE
        }
    }

    /// Builds the formatting layer for the configured format.
    fn layer(&self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let span_events = self.span_events();
        match self.format {
            TracingFormat::Pretty => fmt::layer().pretty().with_span_events(span_events).boxed(),
            TracingFormat::Compact => fmt::layer().compact().with_span_events(span_events).boxed(),
            TracingFormat::Json => fmt::layer().json().with_span_events(span_events).boxed(),
        }
    }

    /// Installs the global subscriber.
    ///
    /// Returns `false` and leaves the existing subscriber in place if the host
    /// already installed one.
    pub fn init(&self) -> bool {
        let installed = tracing_subscriber::registry()
            .with(self.layer().with_filter(self.filter()))
            .try_init()
            .is_ok();
        if installed {
            tracing::debug!(level = %self.level, format = ?self.format, "tracing initialized");
        }
        installed
    }
}

/// Installs a compact subscriber that writes through the test harness.
///
/// Safe to call from every test; only the first call installs anything.
/// `RUST_LOG` overrides the default `debug` level.
#[cfg(any(test, feature = "test-utils"))]
pub fn init_test_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_test_writer(),
        )
        .try_init()
        .ok();
}
