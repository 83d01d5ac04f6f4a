//! `ScriptFilesystem` backed by the local disk.

use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;

use crate::ports::ScriptFilesystem;

/// Filesystem adapter operating directly on paths as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub fn new() -> Self {
        Self
    }
}

impl ScriptFilesystem for LocalFilesystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_script(&self, path: &Path, content: &str) -> io::Result<()> {
        // The handle is closed on drop, including when write_all fails.
        let mut file = File::create(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()
    }

    #[cfg(unix)]
    fn mode(&self, path: &Path) -> io::Result<u32> {
        use std::os::unix::fs::PermissionsExt;
        Ok(fs::metadata(path)?.permissions().mode())
    }

    #[cfg(not(unix))]
    fn mode(&self, _path: &Path) -> io::Result<u32> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "permission bits require a unix platform"))
    }

    #[cfg(unix)]
    fn set_mode(&self, path: &Path, mode: u32) -> io::Result<()> {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))
    }

    #[cfg(not(unix))]
    fn set_mode(&self, _path: &Path, _mode: u32) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::Unsupported, "permission bits require a unix platform"))
    }
}
