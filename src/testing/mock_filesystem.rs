//! In-memory `ScriptFilesystem` for unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::ports::ScriptFilesystem;

/// Mode given to files created by `write_script`.
const CREATED_MODE: u32 = 0o644;

#[derive(Debug, Clone)]
struct MockFile {
    content: String,
    mode: u32,
}

/// Mock filesystem keyed by path, with switchable write and chmod failures.
#[derive(Default)]
#[allow(dead_code)]
pub struct MockFilesystem {
    files: RefCell<HashMap<PathBuf, MockFile>>,
    fail_writes: bool,
    fail_chmod: bool,
}

#[allow(dead_code)]
impl MockFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.with_file_mode(path, content, CREATED_MODE)
    }

    pub fn with_file_mode(self, path: &str, content: &str, mode: u32) -> Self {
        self.files
            .borrow_mut()
            .insert(PathBuf::from(path), MockFile { content: content.to_string(), mode });
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn failing_chmod(mut self) -> Self {
        self.fail_chmod = true;
        self
    }

    pub fn content(&self, path: &str) -> Option<String> {
        self.files.borrow().get(Path::new(path)).map(|f| f.content.clone())
    }

    pub fn file_mode(&self, path: &str) -> Option<u32> {
        self.files.borrow().get(Path::new(path)).map(|f| f.mode)
    }

    fn not_found(path: &Path) -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, format!("Mock file not found: {}", path.display()))
    }
}

impl ScriptFilesystem for MockFilesystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.borrow().get(path).map(|f| f.content.clone()).ok_or_else(|| Self::not_found(path))
    }

    fn write_script(&self, path: &Path, content: &str) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "Mock write denied"));
        }
        let mut files = self.files.borrow_mut();
        let mode = files.get(path).map_or(CREATED_MODE, |f| f.mode);
        files.insert(path.to_path_buf(), MockFile { content: content.to_string(), mode });
        Ok(())
    }

    fn mode(&self, path: &Path) -> io::Result<u32> {
        self.files.borrow().get(path).map(|f| f.mode).ok_or_else(|| Self::not_found(path))
    }

    fn set_mode(&self, path: &Path, mode: u32) -> io::Result<()> {
        if self.fail_chmod {
            return Err(io::Error::new(io::ErrorKind::Unsupported, "Mock chmod unsupported"));
        }
        let mut files = self.files.borrow_mut();
        let file = files.get_mut(path).ok_or_else(|| Self::not_found(path))?;
        file.mode = mode;
        Ok(())
    }
}
