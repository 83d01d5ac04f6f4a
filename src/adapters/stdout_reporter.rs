use crate::ports::ProgressReporter;

/// Prints each pipeline step to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutReporter;

impl ProgressReporter for StdoutReporter {
    fn step(&self, message: &str) {
        println!("-> {}", message);
    }
}
