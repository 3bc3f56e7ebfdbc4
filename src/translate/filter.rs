//! Consumer-side loader for written filter expressions.
//!
//! The translator binary never reads its output back; this is for capture
//! processes that embed the library and apply the expression.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::TranslateError;

/// A filter expression loaded from a file written by [`super::write_expression`].
///
/// Capture processes read the expression once at startup and call
/// [`FilterFile::reload`] when the file is regenerated.
#[derive(Debug, Clone)]
pub struct FilterFile {
    path: PathBuf,
    expression: String,
}

impl FilterFile {
    /// Load the expression stored at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TranslateError> {
        let path = path.as_ref().to_path_buf();
        let expression = read_expression(&path)?;

        Ok(FilterFile { path, expression })
    }

    /// Re-read the file. Returns true if the expression changed.
    pub fn reload(&mut self) -> Result<bool, TranslateError> {
        let expression = read_expression(&self.path)?;
        if expression == self.expression {
            return Ok(false);
        }

        info!(path = %self.path.display(), "Filter expression reloaded");
        self.expression = expression;
        Ok(true)
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn read_expression(path: &Path) -> Result<String, TranslateError> {
    let buf = fs::read_to_string(path).map_err(|source| TranslateError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(buf.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::translate::{write_expression, Translator};
    use tempfile::TempDir;

    #[test]
    fn test_load_written_expression() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("filter.bpf");
        let translation = Translator::default()
            .translate(["permit tcp 10.0.0.0/24 eq 80 443"])
            .unwrap();
        write_expression(&path, &translation.expression).unwrap();

        let filter = FilterFile::load(&path).unwrap();
        assert_eq!(filter.expression(), translation.expression.as_str());
        assert_eq!(filter.path(), path.as_path());
    }

    #[test]
    fn test_load_trims_whitespace() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("filter.bpf");
        fs::write(&path, "  tcp and port 22\n").unwrap();

        let filter = FilterFile::load(&path).unwrap();
        assert_eq!(filter.expression(), "tcp and port 22");
    }

    #[test]
    fn test_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("filter.bpf");
        fs::write(&path, "tcp and port 22").unwrap();

        let mut filter = FilterFile::load(&path).unwrap();
        assert!(!filter.reload().unwrap());

        fs::write(&path, "udp and port 53").unwrap();
        assert!(filter.reload().unwrap());
        assert_eq!(filter.expression(), "udp and port 53");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = FilterFile::load(dir.path().join("missing.bpf"));
        assert!(matches!(result, Err(TranslateError::Read { .. })));
    }
}
