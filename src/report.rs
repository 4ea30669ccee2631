//! User-facing progress reporting
//!
//! Operations report through a [`Reporter`] handed to them explicitly; only
//! the binary decides where messages end up.

/// Sink for progress and diagnostic messages
pub trait Reporter: Send + Sync {
    /// Normal progress message
    fn log(&self, message: &str);
    /// Something went wrong but the operation continues
    fn warn(&self, message: &str);
    /// Something failed
    fn error(&self, message: &str);
    /// Detail shown only in verbose mode
    fn debug(&self, message: &str);
}

/// Forwards messages to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn log(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn debug(&self, message: &str) {
        tracing::debug!("{message}");
    }
}
