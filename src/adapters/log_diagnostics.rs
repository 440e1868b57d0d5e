use crate::ports::Diagnostics;

/// Log target used for loader diagnostics.
pub const LOG_TARGET: &str = "artvar::load";

/// Diagnostics adapter that forwards to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogDiagnostics;

impl LogDiagnostics {
    pub fn new() -> Self {
        Self
    }
}

impl Diagnostics for LogDiagnostics {
    fn info(&self, message: &str) {
        log::info!(target: LOG_TARGET, "{}", message);
    }

    fn error(&self, message: &str) {
        log::error!(target: LOG_TARGET, "{}", message);
    }
}
