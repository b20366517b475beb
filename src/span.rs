//! Editor-style span selection and replacement.
//!
//! An editor integration reflows either the current selection or, when the
//! selection is empty, the paragraph under the cursor. These helpers model
//! that on plain text addressed by 0-based line numbers, and splice the
//! reflowed span back without touching the rest of the document.

use std::ops::Range;

use crate::{config::ReflowConfig, error::ReflowError, process::reflow};

/// A half-open range of lines, `start_line..end_line`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start_line: usize,
    pub end_line: usize,
}

/// Byte range of one line's content, and the end of its terminator.
#[derive(Debug, Clone, Copy)]
struct LineBounds {
    start: usize,
    content_end: usize,
}

fn line_bounds(text: &str) -> Vec<LineBounds> {
    let mut bounds = Vec::new();
    let mut start = 0;
    for piece in text.split_inclusive('\n') {
        let content = piece.trim_end_matches('\n').trim_end_matches('\r');
        bounds.push(LineBounds {
            start,
            content_end: start + content.len(),
        });
        start += piece.len();
    }
    bounds
}

/// The paragraph containing `line`: the run of non-blank lines around it.
///
/// Returns `None` when `line` is blank or past the end of the document.
#[must_use]
pub fn paragraph_at(text: &str, line: usize) -> Option<Span> {
    let lines: Vec<&str> = text.lines().collect();
    let is_blank = |i: usize| lines[i].trim().is_empty();
    if line >= lines.len() || is_blank(line) {
        return None;
    }
    let start_line = (0..line).rev().find(|&i| is_blank(i)).map_or(0, |i| i + 1);
    let end_line = (line + 1..lines.len())
        .find(|&i| is_blank(i))
        .unwrap_or(lines.len());
    Some(Span {
        start_line,
        end_line,
    })
}

/// The lines in `range`, clamped to the document; `None` if that is empty.
#[must_use]
pub fn selection(text: &str, range: Range<usize>) -> Option<Span> {
    let count = line_bounds(text).len();
    let end_line = range.end.min(count);
    (range.start < end_line).then_some(Span {
        start_line: range.start,
        end_line,
    })
}

/// Pick the span an editor command would act on: the selection if it is not
/// empty, otherwise the paragraph under the cursor.
#[must_use]
pub fn resolve_span(
    text: &str,
    selected: Option<Range<usize>>,
    cursor: Option<usize>,
) -> Option<Span> {
    selected
        .and_then(|range| selection(text, range))
        .or_else(|| cursor.and_then(|line| paragraph_at(text, line)))
}

/// Reflow the lines of `span` and splice the result back into `text`.
///
/// The line break ending the span's last line stays outside the span, so
/// the document's line structure around it is unchanged.
///
/// # Errors
/// Propagates errors from [`reflow`].
pub fn reflow_span(text: &str, span: Span, config: &ReflowConfig) -> Result<String, ReflowError> {
    let bounds = line_bounds(text);
    let (Some(first), Some(last)) = (
        bounds.get(span.start_line),
        span.end_line.checked_sub(1).and_then(|i| bounds.get(i)),
    ) else {
        return Ok(text.to_string());
    };
    if span.end_line <= span.start_line {
        return Ok(text.to_string());
    }
    let (start, end) = (first.start, last.content_end);
    log::debug!(
        "reflowing lines {}..{} (bytes {start}..{end})",
        span.start_line,
        span.end_line
    );
    let replaced = reflow(&text[start..end], config)?;
    Ok(format!("{}{replaced}{}", &text[..start], &text[end..]))
}
