use std::fmt;

use super::Rule;

/// Separator placed between rule clauses.
pub const DISJUNCTION: &str = " or ";

/// The final filter expression: every rule clause joined by `or`, in the
/// order the rules were read.
///
/// A composed expression always holds at least one clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedExpression {
    text: String,
    clauses: usize,
}

impl ComposedExpression {
    /// Compose rules into a single expression.
    ///
    /// Returns `None` when there are no rules to compose.
    pub fn compose<'a>(rules: impl IntoIterator<Item = &'a Rule>) -> Option<Self> {
        let mut rules = rules.into_iter();
        let first = rules.next()?;

        let mut text = first.to_string();
        let mut clauses = 1;
        for rule in rules {
            text.push_str(DISJUNCTION);
            text.push_str(&rule.to_string());
            clauses += 1;
        }

        Some(ComposedExpression { text, clauses })
    }

    /// Number of top-level clauses.
    pub fn clauses(&self) -> usize {
        self.clauses
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for ComposedExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
