//! Options for a single generation run.

use std::path::{Path, PathBuf};

use crate::domain::DEFAULT_TEMPLATE_FILENAME;

/// Paths consumed and produced by one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// JSON parameter file.
    pub parameters_path: PathBuf,
    /// Destination for the rendered script.
    pub output_path: PathBuf,
    /// Template file, relative paths resolve against the working directory.
    pub template_path: PathBuf,
}

impl GenerateOptions {
    /// Options using the default template filename.
    pub fn new(parameters_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            parameters_path: parameters_path.into(),
            output_path: output_path.into(),
            template_path: PathBuf::from(DEFAULT_TEMPLATE_FILENAME),
        }
    }

    pub fn with_template(mut self, template_path: impl Into<PathBuf>) -> Self {
        self.template_path = template_path.into();
        self
    }

    pub fn template_path(&self) -> &Path {
        &self.template_path
    }
}
