//! Generate command - renders the runbook template into an executable script.

use std::path::PathBuf;

use crate::app::{AppContext, GenerateOptions};
use crate::domain::{
    AppError, Executable, ParameterSet, PermissionUpdateWarning, Template, emit,
};
use crate::ports::{ProgressReporter, ScriptFilesystem};

/// Result of a successful generation run.
#[derive(Debug)]
pub struct GenerateOutcome {
    pub output_path: PathBuf,
    pub parameter_count: usize,
    pub executable: Executable,
}

impl GenerateOutcome {
    /// Final permission bits, if execute access was granted.
    pub fn mode(&self) -> Option<u32> {
        match self.executable {
            Executable::Applied { mode } => Some(mode),
            Executable::Skipped(_) => None,
        }
    }

    /// Warning for a failed permission update.
    pub fn warning(&self) -> Option<&PermissionUpdateWarning> {
        match &self.executable {
            Executable::Applied { .. } => None,
            Executable::Skipped(warning) => Some(warning),
        }
    }
}

/// Execute the generate command.
///
/// Loads parameters, reads the template, renders it and writes the result
/// to the output path with execute bits added. Nothing is written unless
/// both inputs load successfully.
pub fn execute<F, R>(
    ctx: &AppContext<F, R>,
    options: &GenerateOptions,
) -> Result<GenerateOutcome, AppError>
where
    F: ScriptFilesystem,
    R: ProgressReporter,
{
    let fs = ctx.filesystem();
    let reporter = ctx.reporter();

    reporter.step(&format!("Reading parameters from: {}", options.parameters_path.display()));
    let params = ParameterSet::load(fs, &options.parameters_path)?;

    reporter.step(&format!("Reading template from: {}", options.template_path().display()));
    let template = Template::load(fs, options.template_path())?;

    let script = template.render(&params);

    reporter.step(&format!("Writing generated runbook to: {}", options.output_path.display()));
    let executable = emit(fs, &options.output_path, &script)?;

    if let Executable::Applied { .. } = executable {
        reporter.step(&format!("Made script '{}' executable.", options.output_path.display()));
    }

    Ok(GenerateOutcome {
        output_path: options.output_path.clone(),
        parameter_count: params.len(),
        executable,
    })
}
