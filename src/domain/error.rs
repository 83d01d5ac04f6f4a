use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Library-wide error type for runbook generation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Parameter file does not exist.
    #[error("Parameter file not found at '{}': {source}", .path.display())]
    ParameterFileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Template file does not exist.
    #[error("Template file not found at '{}': {source}", .path.display())]
    TemplateNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input file exists but could not be read as text.
    #[error("Could not read {what} file '{}': {source}", .path.display())]
    ReadError {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Parameter file is not valid JSON or not an object.
    #[error("Could not decode JSON from '{}': {details}", .path.display())]
    ParseError { path: PathBuf, details: String },

    /// Output script could not be created or written.
    #[error("Could not write to output file '{}': {source}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub fn parse_error<P: Into<PathBuf>, S: Into<String>>(path: P, details: S) -> Self {
        AppError::ParseError { path: path.into(), details: details.into() }
    }

    /// Map a failure to read the parameter file.
    pub fn parameter_read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            AppError::ParameterFileNotFound { path: path.to_path_buf(), source }
        } else {
            AppError::ReadError { what: "parameter", path: path.to_path_buf(), source }
        }
    }

    /// Map a failure to read the template file.
    pub fn template_read(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            AppError::TemplateNotFound { path: path.to_path_buf(), source }
        } else {
            AppError::ReadError { what: "template", path: path.to_path_buf(), source }
        }
    }

    /// Provide an `io::ErrorKind` view of the failure.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::ParameterFileNotFound { .. } | AppError::TemplateNotFound { .. } => {
                io::ErrorKind::NotFound
            }
            AppError::ParseError { .. } => io::ErrorKind::InvalidData,
            AppError::ReadError { source, .. } | AppError::WriteError { source, .. } => {
                source.kind()
            }
        }
    }
}

/// Non-fatal failure to add execute bits to a written script.
///
/// The script itself exists when this is produced, so callers report it and
/// still treat the run as successful.
#[derive(Debug)]
pub struct PermissionUpdateWarning {
    pub path: PathBuf,
    pub source: io::Error,
}

impl fmt::Display for PermissionUpdateWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Could not make script '{}' executable: {}", self.path.display(), self.source)
    }
}
