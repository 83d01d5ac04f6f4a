use std::cell::RefCell;

use crate::ports::ProgressReporter;

/// Reporter that keeps every step message for later assertions.
#[derive(Default)]
pub struct RecordingReporter {
    steps: RefCell<Vec<String>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(&self) -> Vec<String> {
        self.steps.borrow().clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.steps.borrow_mut().push(message.to_string());
    }
}
