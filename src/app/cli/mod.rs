//! CLI Adapter.

use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::app::GenerateOptions;
use crate::app::commands::GenerateOutcome;
use crate::domain::{AppError, DEFAULT_TEMPLATE_FILENAME};

#[derive(Parser, Debug)]
#[command(name = "runbook-gen")]
#[command(version)]
#[command(
    about = "Generate a production runbook script from a template and a JSON parameter file",
    long_about = None
)]
struct Cli {
    /// The path to the input JSON parameter file
    json_file: PathBuf,
    /// The name of the generated output runbook script
    output_file: PathBuf,
    /// Template to render
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_TEMPLATE_FILENAME)]
    template: PathBuf,
    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = GenerateOptions::new(cli.json_file, cli.output_file).with_template(cli.template);

    match crate::generate(&options) {
        Ok(outcome) => report_success(&outcome),
        Err(e) => {
            eprintln!("Error: {}", e);
            if let AppError::TemplateNotFound { .. } = e {
                eprintln!("Please ensure it exists in the working directory or pass --template <PATH>.");
            }
            std::process::exit(1);
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn report_success(outcome: &GenerateOutcome) {
    tracing::debug!(
        parameters = outcome.parameter_count,
        mode = ?outcome.mode().map(|m| format!("{:o}", m)),
        "generated runbook"
    );

    if let Err(e) = write_report(outcome, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        tracing::debug!(error = %e, "failed to print summary");
    }
}

/// Print the success summary to `out` and any permission warning to `err`.
fn write_report<O: Write, E: Write>(
    outcome: &GenerateOutcome,
    out: &mut O,
    err: &mut E,
) -> io::Result<()> {
    if let Some(warning) = outcome.warning() {
        writeln!(err, "Warning: {}", warning)?;
    }

    writeln!(out, "\n✅ Success! Your runbook is ready.")?;
    writeln!(out, "   To review: cat {}", outcome.output_path.display())?;
    writeln!(out, "   To run:    {}", run_hint(&outcome.output_path))
}

/// Command line that executes the generated script from the working directory.
fn run_hint(path: &Path) -> String {
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => format!("./{}", path.display()),
        _ => path.display().to_string(),
    }
}
