pub mod generate;

pub use generate::GenerateOutcome;
