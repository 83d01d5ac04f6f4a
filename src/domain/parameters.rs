//! Parameter set loaded from the JSON parameter file.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::domain::AppError;
use crate::ports::ScriptFilesystem;

/// Mapping from placeholder name to the JSON value that fills it.
///
/// Entries iterate in the order they appear in the source document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet {
    entries: Map<String, Value>,
}

impl ParameterSet {
    /// Read and parse the parameter file at `path`.
    pub fn load<F: ScriptFilesystem + ?Sized>(fs: &F, path: &Path) -> Result<Self, AppError> {
        let content =
            fs.read_to_string(path).map_err(|source| AppError::parameter_read(path, source))?;
        let params = Self::from_json_str(&content, path)?;
        tracing::debug!(path = %path.display(), count = params.len(), "loaded parameters");
        Ok(params)
    }

    /// Parse a parameter document. The top level must be a JSON object.
    ///
    /// `path` is only used for error reporting.
    pub fn from_json_str(content: &str, path: &Path) -> Result<Self, AppError> {
        serde_json::from_str(content).map_err(|e| AppError::parse_error(path, e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, textual value)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, String)> + '_ {
        self.entries.iter().map(|(key, value)| (key.as_str(), value_text(value)))
    }
}

impl From<Map<String, Value>> for ParameterSet {
    fn from(entries: Map<String, Value>) -> Self {
        Self { entries }
    }
}

/// Textual form of a parameter value as it appears in the rendered script.
///
/// Strings are inserted raw; every other value uses its compact JSON text.
/// Numbers keep the digits written in the source document.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
