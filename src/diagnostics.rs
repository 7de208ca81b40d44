//! Injected diagnostics sinks.
//!
//! Pattern compilation failures are reported through a [`Diagnostics`]
//! collaborator owned by the matcher rather than through process-wide state.
//! [`TracingDiagnostics`] forwards to `tracing`, [`NullDiagnostics`] drops
//! everything, and [`CollectingDiagnostics`] records entries for inspection.
//! Any `Fn(LogLevel, &str)` closure is also a sink.

use std::sync::Mutex;

/// Severity of a diagnostic message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Receiver for diagnostics emitted by matchers and codecs.
pub trait Diagnostics {
    /// Report a message at the given level.
    fn emit(&self, level: LogLevel, message: &str);
}

impl<F> Diagnostics for F
where
    F: Fn(LogLevel, &str),
{
    fn emit(&self, level: LogLevel, message: &str) {
        self(level, message);
    }
}

/// Forwards diagnostics to the `tracing` subscriber.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn emit(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!(target: "richstr", "{message}"),
            LogLevel::Info => tracing::info!(target: "richstr", "{message}"),
            LogLevel::Warn => tracing::warn!(target: "richstr", "{message}"),
            LogLevel::Error => tracing::error!(target: "richstr", "{message}"),
        }
    }
}

/// Discards all diagnostics.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn emit(&self, _level: LogLevel, _message: &str) {}
}

/// Records diagnostics in memory.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    entries: Mutex<Vec<(LogLevel, String)>>,
}

impl CollectingDiagnostics {
    /// Create an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<(LogLevel, String)> {
        self.entries
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().map(|guard| guard.len()).unwrap_or(0)
    }

    /// Check if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all recorded entries.
    pub fn clear(&self) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.clear();
        }
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn emit(&self, level: LogLevel, message: &str) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.push((level, message.to_string()));
        }
    }
}
