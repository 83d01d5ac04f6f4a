//! runbook-gen: render executable runbook scripts from a template and JSON parameters.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

use adapters::{LocalFilesystem, StdoutReporter};
use app::{AppContext, commands::generate as generate_command};

pub use app::GenerateOptions;
pub use app::commands::GenerateOutcome;
pub use domain::{AppError, DEFAULT_TEMPLATE_FILENAME, PermissionUpdateWarning};

/// Render the template with the parameter file and write the executable script.
///
/// Progress is printed to standard output as each stage starts. A failure to
/// add execute bits does not fail the call; it is returned in the outcome.
pub fn generate(options: &GenerateOptions) -> Result<GenerateOutcome, AppError> {
    let ctx = AppContext::new(LocalFilesystem::new(), StdoutReporter);
    generate_command::execute(&ctx, options)
}
