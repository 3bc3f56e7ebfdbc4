pub mod config;
pub mod domain;
pub mod observability;
pub mod parser;
pub mod translate;

pub use config::Config;
pub use domain::{ComposedExpression, PortSpec, Rule};
pub use parser::{parse_line, LineOutcome};
pub use translate::{translate_file, TranslateError, Translator};
