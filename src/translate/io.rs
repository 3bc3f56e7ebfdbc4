use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

use super::{TranslateError, Translation, Translator};
use crate::domain::ComposedExpression;

/// Read every line of a rule file.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn read_rules(path: impl AsRef<Path>) -> Result<Vec<String>, TranslateError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| TranslateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(split_lines(&content))
}

fn split_lines(content: &str) -> Vec<String> {
    let normalized = content.replace("\r\n", "\n");
    let mut lines: Vec<String> = normalized
        .split(['\n', '\r'])
        .map(str::to_string)
        .collect();

    // A terminator on the last line does not start another one.
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Write the composed expression as the entire content of `path`.
///
/// No trailing newline is written. The expression goes to a uniquely named
/// temporary file in the target's directory first and is then renamed into
/// place, so the target never holds a partial expression.
pub fn write_expression(
    path: impl AsRef<Path>,
    expression: &ComposedExpression,
) -> Result<(), TranslateError> {
    let path = path.as_ref();
    let write_error = |source| TranslateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_error)?;
    temp.write_all(expression.as_str().as_bytes()).map_err(write_error)?;
    temp.flush().map_err(write_error)?;

    // On failure the temporary file is removed when it is dropped.
    temp.persist(path).map_err(|e| write_error(e.error))?;

    Ok(())
}

/// Read `input`, translate it and write the expression to `output`.
///
/// Nothing is written when reading or translation fails.
pub fn translate_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    translator: &Translator,
) -> Result<Translation, TranslateError> {
    let (input, output) = (input.as_ref(), output.as_ref());

    info!(path = %input.display(), "Processing file");
    let lines = read_rules(input)?;
    let translation = translator.translate(&lines)?;

    info!(path = %output.display(), clauses = translation.expression.clauses(), "Writing file");
    write_expression(output, &translation.expression)?;

    Ok(translation)
}
