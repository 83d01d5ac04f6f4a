//! Template documents and placeholder substitution.

use std::fmt;
use std::path::Path;

use crate::domain::{AppError, ParameterSet, RenderedScript};
use crate::ports::ScriptFilesystem;

/// Template filename used when no explicit path is configured.
pub const DEFAULT_TEMPLATE_FILENAME: &str = "runbook_template.sh";

/// A `{{key}}` marker in template text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder(String);

impl Placeholder {
    pub fn for_key(key: &str) -> Self {
        Self(format!("{{{{{}}}}}", key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw template text, immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
}

impl Template {
    pub fn new(source: impl Into<String>) -> Self {
        Self { source: source.into() }
    }

    /// Read the template at `path`.
    pub fn load<F: ScriptFilesystem + ?Sized>(fs: &F, path: &Path) -> Result<Self, AppError> {
        let source =
            fs.read_to_string(path).map_err(|source| AppError::template_read(path, source))?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded template");
        Ok(Self::new(source))
    }

    /// Substitute every parameter into the template.
    ///
    /// Keys are applied one at a time in the parameter set's order. Each key
    /// gets a single global literal replacement pass, so its own replacement
    /// text is never rescanned, while text injected by an earlier key is
    /// visible to later keys. Placeholders without a matching key stay
    /// verbatim.
    pub fn render(&self, params: &ParameterSet) -> RenderedScript {
        let mut output = self.source.clone();
        for (key, value) in params.iter() {
            let placeholder = Placeholder::for_key(key);
            if output.contains(placeholder.as_str()) {
                output = output.replace(placeholder.as_str(), &value);
            } else {
                tracing::debug!(%placeholder, "parameter not referenced by template");
            }
        }
        RenderedScript::new(output)
    }
}
