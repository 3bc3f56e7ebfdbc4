pub mod expression;
pub mod rule;

pub use expression::ComposedExpression;
pub use rule::{PortSpec, Rule};
