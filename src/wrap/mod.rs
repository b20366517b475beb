//! Greedy paragraph wrapping.
//!
//! Line breaks inside a paragraph are collapsed to single spaces, except
//! that a break after sentence-ending punctuation becomes two spaces.
//! Whitespace already between words on a line is kept as written. Widths
//! are visual columns, so tabs inside the text advance to the next tab stop.

use std::sync::LazyLock;

use regex::Regex;

use crate::{config::ReflowState, error::ReflowError, width::visual_length};

static SENTENCE_BREAK_RE: LazyLock<Regex> = crate::lazy_regex!(
    r"([.!?])[ \t]*\n\s*",
    "sentence break pattern should compile",
);

static LINE_BREAK_RE: LazyLock<Regex> = crate::lazy_regex!(
    r"[ \t]*\n\s*",
    "line break pattern should compile",
);

static SEGMENT_RE: LazyLock<Regex> = crate::lazy_regex!(
    r"(\s*)(\S+)",
    "segment pattern should compile",
);

/// Join a paragraph's lines into one line of text.
///
/// ```
/// use magic_reflow::wrap::join_lines;
///
/// assert_eq!(join_lines("a long\nline.\nNext"), "a long line.  Next");
/// ```
#[must_use]
pub fn join_lines(text: &str) -> String {
    let text = SENTENCE_BREAK_RE.replace_all(text, "${1}  ");
    LINE_BREAK_RE.replace_all(&text, " ").into_owned()
}

/// Wrap `text` so no line passes column `state.line_width`.
///
/// Continuation lines start at `state.start_column`; the first line starts
/// `first_line_offset` columns further right. A word that does not fit on an
/// empty line is placed there anyway and allowed to overflow.
///
/// # Errors
/// Propagates [`ReflowError::InvalidInput`] from the width computation,
/// which cannot happen once line breaks have been joined.
pub fn wrap_paragraph(
    text: &str,
    state: ReflowState,
    first_line_offset: usize,
) -> Result<Vec<String>, ReflowError> {
    let text = join_lines(text);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut line_start = state.start_column + first_line_offset;
    let mut column = line_start;

    for cap in SEGMENT_RE.captures_iter(&text) {
        let ws = cap.get(1).map_or("", |m| m.as_str());
        let word = cap.get(2).map_or("", |m| m.as_str());
        if current.is_empty() {
            current.push_str(word);
            column = line_start + visual_length(word, line_start, state.tab_width)?;
            continue;
        }
        let ws_width = visual_length(ws, column, state.tab_width)?;
        let next = column + ws_width + visual_length(word, column + ws_width, state.tab_width)?;
        if next > state.line_width {
            lines.push(std::mem::take(&mut current));
            line_start = state.start_column;
            current.push_str(word);
            column = line_start + visual_length(word, line_start, state.tab_width)?;
        } else {
            current.push_str(ws);
            current.push_str(word);
            column = next;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    Ok(lines)
}
