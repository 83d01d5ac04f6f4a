use std::io;
use std::path::Path;

/// Port for the file operations runbook generation performs.
///
/// Methods return raw `io::Result`s; callers decide which `AppError`
/// variant a failure maps to, since that depends on the file's role.
pub trait ScriptFilesystem {
    /// Read an entire file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Create or truncate `path` and write `content` to it.
    fn write_script(&self, path: &Path, content: &str) -> io::Result<()>;

    /// Current permission bits of `path`.
    fn mode(&self, path: &Path) -> io::Result<u32>;

    /// Replace the permission bits of `path` without touching its content.
    fn set_mode(&self, path: &Path, mode: u32) -> io::Result<()>;
}
