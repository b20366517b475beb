//! Top-level reflow of a text span.

use crate::{
    config::ReflowConfig,
    error::ReflowError,
    segment::reflow_lines,
    width::{spaces_to_tabs, tabs_to_spaces},
};

/// Split `text` into leading blank lines, body and trailing blank lines.
///
/// The head is the leading whitespace up to and including its last line
/// break; the tail starts at the first line break of the trailing
/// whitespace. Both are returned byte-for-byte so the caller can splice them
/// back around the reflowed body.
///
/// ```
/// use magic_reflow::process::head_body_tail;
///
/// assert_eq!(head_body_tail("\n\n  text\n "), ("\n\n", "  text", "\n "));
/// assert_eq!(head_body_tail("text"), ("", "text", ""));
/// ```
#[must_use]
pub fn head_body_tail(text: &str) -> (&str, &str, &str) {
    let lead = text.len() - text.trim_start().len();
    let head_len = text[..lead].rfind(['\n', '\r']).map_or(0, |i| i + 1);
    let (head, rest) = text.split_at(head_len);
    let body_end = rest.trim_end().len();
    let tail_start = rest[body_end..]
        .find(['\n', '\r'])
        .map_or(rest.len(), |i| body_end + i);
    let (body, tail) = rest.split_at(tail_start);
    (head, body, tail)
}

/// Split `body` into lines on `\r\n`, `\r` or `\n`.
#[must_use]
pub fn split_lines(body: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = body;
    while let Some(idx) = rest.find(['\r', '\n']) {
        lines.push(&rest[..idx]);
        let skip = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[idx + skip..];
    }
    lines.push(rest);
    lines
}

/// Reflow `text` to the configured width.
///
/// Leading and trailing blank lines are kept as they are. Lines are joined
/// with `\n` on output. When the body contained tabs and soft tabs are
/// disabled, leading indentation is converted back to tabs.
///
/// # Errors
/// Returns [`ReflowError::InvalidWidth`] for a zero width, and
/// [`ReflowError::NestingTooDeep`] for pathologically nested decorations.
/// Other variants indicate a bug in the segmenter.
///
/// # Examples
///
/// ```
/// use magic_reflow::{ReflowConfig, reflow};
///
/// let config = ReflowConfig::default().with_line_width(40);
/// let text = "- This is a short list item.\n- This is a longer list item, which I expect to wrap across two lines.";
/// assert_eq!(
///     reflow(text, &config).unwrap(),
///     "- This is a short list item.\n- This is a longer list item, which I\n  expect to wrap across two lines."
/// );
/// ```
pub fn reflow(text: &str, config: &ReflowConfig) -> Result<String, ReflowError> {
    let state = config.resolve()?;
    let (head, body, tail) = head_body_tail(text);
    let has_tabs = body.contains('\t');
    log::debug!(
        "reflowing {} bytes (head {}, tail {}) at width {}, tabs: {has_tabs}",
        body.len(),
        head.len(),
        tail.len(),
        state.line_width,
    );

    let lines = tabs_to_spaces(&split_lines(body), state.start_column, state.tab_width)?;
    let mut out = reflow_lines(&lines, state)?;
    if has_tabs && !state.soft_tabs {
        out = spaces_to_tabs(&out, state.start_column, state.tab_width)?;
    }
    Ok(format!("{head}{}{tail}", out.join("\n")))
}
