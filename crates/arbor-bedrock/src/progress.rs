//! Progress reporting for a generation run.

use tracing::info;

/// One progress update from the driver: completed steps out of the run's
/// total (all three passes' iterations).
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    pub step: usize,
    pub total: usize,
    pub message: String,
}

/// Receives driver progress. Implementations decide how to surface it —
/// a log line, a progress bar, a UI event.
pub trait ProgressSink {
    fn report(&mut self, update: ProgressUpdate);
}

/// Logs each update via `tracing`.
#[derive(Debug, Default)]
pub struct TracingProgress;

impl ProgressSink for TracingProgress {
    fn report(&mut self, update: ProgressUpdate) {
        info!(step = update.step, total = update.total, "{}", update.message);
    }
}
