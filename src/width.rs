//! Visual-width arithmetic.
//!
//! Columns are counted the way a terminal or editor displays them: a tab
//! advances to the next multiple of the tab width and every other character
//! takes its `unicode-width` display width. All computations take the column
//! at which the fragment starts, because the width of a tab depends on it.

use unicode_width::UnicodeWidthChar;

use crate::error::ReflowError;

/// Columns consumed by a tab that starts at column `start`.
///
/// ```
/// use magic_reflow::width::tab_span;
/// assert_eq!(tab_span(0, 8), 8);
/// assert_eq!(tab_span(3, 8), 5);
/// assert_eq!(tab_span(4, 4), 4);
/// ```
#[must_use]
pub fn tab_span(start: usize, tab_width: usize) -> usize {
    tab_width - (start % tab_width)
}

/// Visual width of a single-line `text` beginning at column `start`.
///
/// # Errors
/// Returns [`ReflowError::InvalidInput`] if `text` contains a line break.
pub fn visual_length(text: &str, start: usize, tab_width: usize) -> Result<usize, ReflowError> {
    let mut col = start;
    for ch in text.chars() {
        col += match ch {
            '\n' | '\r' => {
                return Err(ReflowError::InvalidInput {
                    fragment: text.to_string(),
                });
            }
            '\t' => tab_span(col, tab_width),
            _ => ch.width().unwrap_or(0),
        };
    }
    Ok(col - start)
}

/// Tabs and spaces covering `width` columns from column zero.
#[must_use]
pub fn indent_for_width(width: usize, tab_width: usize) -> String {
    indent_from(0, width, tab_width)
}

/// Tabs and spaces covering `width` columns starting at column `start`.
fn indent_from(start: usize, width: usize, tab_width: usize) -> String {
    let end = start + width;
    let mut col = start;
    let mut out = String::new();
    while col + tab_span(col, tab_width) <= end {
        out.push('\t');
        col += tab_span(col, tab_width);
    }
    out.extend(std::iter::repeat_n(' ', end - col));
    out
}

/// Split a line into its leading run of spaces and tabs and the remainder.
#[must_use]
pub fn split_indent(line: &str) -> (&str, &str) {
    let end = line
        .find(|c: char| c != ' ' && c != '\t')
        .unwrap_or(line.len());
    line.split_at(end)
}

/// Rewrite the leading whitespace of each line as spaces only.
///
/// Lines are assumed to start at column `start`.
///
/// # Errors
/// Returns [`ReflowError::InvalidInput`] if a line contains a line break.
pub fn tabs_to_spaces<S: AsRef<str>>(
    lines: &[S],
    start: usize,
    tab_width: usize,
) -> Result<Vec<String>, ReflowError> {
    lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            let (indent, rest) = split_indent(line);
            if !indent.contains('\t') {
                return Ok(line.to_string());
            }
            let width = visual_length(indent, start, tab_width)?;
            Ok(format!("{}{rest}", " ".repeat(width)))
        })
        .collect()
}

/// Rewrite the leading whitespace of each line using as many tabs as fit.
///
/// # Errors
/// Returns [`ReflowError::InvalidInput`] if a line contains a line break.
pub fn spaces_to_tabs<S: AsRef<str>>(
    lines: &[S],
    start: usize,
    tab_width: usize,
) -> Result<Vec<String>, ReflowError> {
    lines
        .iter()
        .map(|line| {
            let line = line.as_ref();
            let (indent, rest) = split_indent(line);
            if indent.is_empty() || rest.is_empty() {
                return Ok(line.to_string());
            }
            let width = visual_length(indent, start, tab_width)?;
            Ok(format!("{}{rest}", indent_from(start, width, tab_width)))
        })
        .collect()
}
