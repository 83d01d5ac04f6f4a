/// Port for user-facing progress messages.
pub trait ProgressReporter {
    /// Report a single pipeline step.
    fn step(&self, message: &str);
}

/// Reporter that discards every message.
pub struct NoopReporter;

impl ProgressReporter for NoopReporter {
    fn step(&self, _message: &str) {}
}
