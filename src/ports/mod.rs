mod progress_reporter;
mod script_filesystem;

pub use progress_reporter::{NoopReporter, ProgressReporter};
pub use script_filesystem::ScriptFilesystem;
