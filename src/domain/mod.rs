pub mod error;
pub mod parameters;
pub mod script;
pub mod template;

pub use error::{AppError, PermissionUpdateWarning};
pub use parameters::{ParameterSet, value_text};
pub use script::{Executable, RenderedScript, emit, execute_mode};
pub use template::{DEFAULT_TEMPLATE_FILENAME, Placeholder, Template};
