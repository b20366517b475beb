//! File helpers for reflowing documents on disk.

use std::{fs, io, ops::Range, path::Path};

use crate::{
    config::ReflowConfig,
    error::ReflowError,
    process::reflow,
    span::{reflow_span, resolve_span},
};

/// Which part of a document to reflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    /// 0-based, half-open line range; takes precedence when not empty.
    pub selection: Option<Range<usize>>,
    /// 0-based line whose paragraph is reflowed when there is no selection.
    pub cursor: Option<usize>,
}

impl Target {
    /// The whole document.
    #[must_use]
    pub fn whole() -> Self {
        Self::default()
    }

    fn is_whole(&self) -> bool {
        self.selection.is_none() && self.cursor.is_none()
    }
}

/// Errors from reading, reflowing or writing a file.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("{path}: {source}")]
    Io { source: io::Error, path: String },

    #[error(transparent)]
    Reflow(#[from] ReflowError),
}

/// Reflow the part of `text` named by `target`.
///
/// A target that resolves to no span (a blank cursor line, an empty
/// selection past the end) leaves the text unchanged.
///
/// # Errors
/// Propagates errors from [`reflow`].
pub fn reflow_target(
    text: &str,
    target: &Target,
    config: &ReflowConfig,
) -> Result<String, ReflowError> {
    if target.is_whole() {
        return reflow(text, config);
    }
    match resolve_span(text, target.selection.clone(), target.cursor) {
        Some(span) => reflow_span(text, span, config),
        None => {
            log::debug!("no span to reflow for {target:?}");
            Ok(text.to_string())
        }
    }
}

/// Read `path` and return its reflowed contents.
///
/// # Errors
/// Returns [`FileError::Io`] if the file cannot be read.
pub fn reflow_file(
    path: &Path,
    target: &Target,
    config: &ReflowConfig,
) -> Result<String, FileError> {
    let text = fs::read_to_string(path).map_err(|source| FileError::Io {
        source,
        path: path.display().to_string(),
    })?;
    Ok(reflow_target(&text, target, config)?)
}

/// Rewrite a file in place with its reflowed contents.
///
/// # Errors
/// Returns an error if reading, reflowing or writing the file fails.
pub fn rewrite(path: &Path, target: &Target, config: &ReflowConfig) -> Result<(), FileError> {
    let fixed = reflow_file(path, target, config)?;
    fs::write(path, fixed).map_err(|source| FileError::Io {
        source,
        path: path.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn rewrite_roundtrip() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "# one two\n# three four\n").unwrap();
        let config = ReflowConfig::default().with_line_width(12);
        rewrite(&file, &Target::whole(), &config).unwrap();
        let out = fs::read_to_string(&file).unwrap();
        assert_eq!(out, "# one two\n# three four\n");
    }

    #[test]
    fn rewrite_cursor_paragraph_only() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("notes.txt");
        fs::write(&file, "keep\nthese\n\njoin\nthese\n").unwrap();
        let target = Target {
            selection: None,
            cursor: Some(4),
        };
        rewrite(&file, &target, &ReflowConfig::default()).unwrap();
        let out = fs::read_to_string(&file).unwrap();
        assert_eq!(out, "keep\nthese\n\njoin these\n");
    }

    #[test]
    fn blank_cursor_is_a_no_op() {
        let target = Target {
            selection: None,
            cursor: Some(1),
        };
        let text = "a\n\nb\nc\n";
        let out = reflow_target(text, &target, &ReflowConfig::default()).unwrap();
        assert_eq!(out, text);
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempdir().unwrap();
        let err = reflow_file(
            &dir.path().join("absent.txt"),
            &Target::whole(),
            &ReflowConfig::default(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("absent.txt"));
    }
}
