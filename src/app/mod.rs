pub mod cli;
pub mod commands;
pub mod config;
pub mod context;

pub use config::GenerateOptions;
pub use context::AppContext;
