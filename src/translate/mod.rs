pub mod filter;
pub mod io;

pub use filter::FilterFile;
pub use io::{read_rules, translate_file, write_expression};

use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{ComposedExpression, Rule};
use crate::parser::{parse_line, LineOutcome, MalformedReason};

/// A `permit` line that could not be parsed, with its position in the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed rule line {line_number}: {reason}: {line:?}")]
pub struct ParseError {
    /// 1-based line number
    pub line_number: usize,

    /// The offending line, without its line terminator
    pub line: String,

    pub reason: MalformedReason,
}

/// Errors that can occur while translating a rule list.
#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("failed to read rule file {}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write expression file {}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error(transparent)]
    Malformed(#[from] ParseError),

    #[error("{} malformed rule lines:\n{}", .0.len(), join_errors(.0))]
    MalformedLines(Vec<ParseError>),

    #[error("no permit rules found in input")]
    NoRules,
}

fn join_errors(errors: &[ParseError]) -> String {
    errors
        .iter()
        .map(|e| format!("  {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// What to do when a `permit` line does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Abort at the first malformed line.
    #[default]
    FailFast,

    /// Keep going and report every malformed line together.
    Collect,
}

/// Line counters for a completed translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TranslationReport {
    /// Total lines read
    pub lines: usize,

    /// Lines ignored because they are not permit statements
    pub skipped: usize,

    /// Rules parsed and composed
    pub rules: usize,
}

/// Output of a successful translation.
#[derive(Debug, Clone)]
pub struct Translation {
    pub rules: Vec<Rule>,
    pub expression: ComposedExpression,
    pub report: TranslationReport,
}

/// Runs parse, render and compose over an ordered list of rule lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator {
    policy: MalformedPolicy,
}

impl Translator {
    /// Create a translator with the given malformed-line policy.
    pub fn new(policy: MalformedPolicy) -> Self {
        Translator { policy }
    }

    pub fn policy(&self) -> MalformedPolicy {
        self.policy
    }

    /// Translate lines into a composed expression.
    ///
    /// Rules appear in the expression in the order of their source lines.
    /// Fails with [`TranslateError::NoRules`] if no line yields a rule.
    pub fn translate<I, S>(&self, lines: I) -> Result<Translation, TranslateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rules = Vec::new();
        let mut errors = Vec::new();
        let mut report = TranslationReport::default();

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            report.lines += 1;
            debug!(line_number = idx + 1, line, "working with line");

            match parse_line(line) {
                LineOutcome::Skipped => report.skipped += 1,
                LineOutcome::Parsed(rule) => rules.push(rule),
                LineOutcome::Malformed(reason) => {
                    let error = ParseError {
                        line_number: idx + 1,
                        line: line.trim_end_matches(['\r', '\n']).to_string(),
                        reason,
                    };
                    warn!(line_number = error.line_number, reason = %error.reason, "malformed rule line");

                    match self.policy {
                        MalformedPolicy::FailFast => return Err(error.into()),
                        MalformedPolicy::Collect => errors.push(error),
                    }
                }
            }
        }

        if !errors.is_empty() {
            return Err(TranslateError::MalformedLines(errors));
        }

        let expression = ComposedExpression::compose(&rules).ok_or(TranslateError::NoRules)?;
        report.rules = rules.len();

        info!(
            lines = report.lines,
            skipped = report.skipped,
            rules = report.rules,
            "Composed filter expression"
        );

        Ok(Translation {
            rules,
            expression,
            report,
        })
    }
}
