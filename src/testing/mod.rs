mod mock_filesystem;
mod recording_reporter;

pub use mock_filesystem::MockFilesystem;
pub use recording_reporter::RecordingReporter;
