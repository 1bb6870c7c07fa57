pub mod config;
pub mod error;
pub mod rules;
pub mod telemetry;
pub mod validate;
pub mod validators;

pub use error::{Error, Result};
pub use rules::FormRules;
pub use validate::{Validate, ValidationError, ValidationErrors, ValidationResult, Validators};
pub use validators::{ArrayIncludes, NoWhiteSpace, array_includes, no_white_space};
