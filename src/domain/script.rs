//! Rendered scripts and writing them out as executables.

use std::path::Path;

use crate::domain::{AppError, PermissionUpdateWarning};
use crate::ports::ScriptFilesystem;

/// Execute bits for owner, group, and other.
const EXECUTE_BITS: u32 = 0o111;

/// Add execute permission for owner, group, and other to `mode`.
pub fn execute_mode(mode: u32) -> u32 {
    mode | EXECUTE_BITS
}

/// Template text after substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedScript(String);

impl RenderedScript {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

/// Result of the permission update after a script was written.
#[derive(Debug)]
pub enum Executable {
    /// Execute bits were added; `mode` is the new permission set.
    Applied { mode: u32 },
    /// The script was written but its mode could not be changed.
    Skipped(PermissionUpdateWarning),
}

/// Write `script` to `path`, replacing any existing content, then add
/// execute bits to the file's current mode.
///
/// Only the write is fatal. A failed permission update is returned as
/// `Executable::Skipped`.
pub fn emit<F: ScriptFilesystem + ?Sized>(
    fs: &F,
    path: &Path,
    script: &RenderedScript,
) -> Result<Executable, AppError> {
    fs.write_script(path, script.as_str())
        .map_err(|source| AppError::WriteError { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), bytes = script.as_str().len(), "wrote script");

    let applied = fs.mode(path).and_then(|current| {
        let mode = execute_mode(current);
        tracing::debug!("updating mode {:o} -> {:o}", current, mode);
        fs.set_mode(path, mode).map(|()| mode)
    });

    Ok(match applied {
        Ok(mode) => Executable::Applied { mode },
        Err(source) => {
            Executable::Skipped(PermissionUpdateWarning { path: path.to_path_buf(), source })
        }
    })
}
