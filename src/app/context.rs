use crate::ports::{ProgressReporter, ScriptFilesystem};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ScriptFilesystem, R: ProgressReporter> {
    filesystem: F,
    reporter: R,
}

impl<F: ScriptFilesystem, R: ProgressReporter> AppContext<F, R> {
    /// Create a new application context.
    pub fn new(filesystem: F, reporter: R) -> Self {
        Self { filesystem, reporter }
    }

    /// Get a reference to the filesystem port.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the progress reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }
}
