//! Line-level parsing of permit rules.
//!
//! Keywords are matched case-sensitively: `Permit` or `EQ` are not keywords.

pub mod cursor;
pub mod line;

pub use cursor::TokenCursor;
pub use line::{parse_line, LineOutcome, MalformedReason};

/// Leading keyword of every translated line.
pub const PERMIT: &str = "permit";

/// Wildcard keyword. Dropped in network position, terminates a port list.
pub const ANY: &str = "any";

/// Port list operator.
pub const EQ: &str = "eq";

/// Port range operator.
pub const RANGE: &str = "range";
