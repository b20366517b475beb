//! Recursive block segmentation.
//!
//! A run of lines is cut into blocks at blank lines and at structural
//! boundaries inferred from indentation and decorations. Each block is either
//! wrapped as a paragraph or has a decoration stripped and is reflowed again
//! one level down, with the start column moved right by the decoration's
//! width. The decoration is put back on the way out: on every line for
//! repeating markers and shared prefixes, on the first line only (with an
//! equal-width run of spaces below it) for list bullets and comment openers.

use crate::{
    classify::{DecorationKind, classify},
    config::ReflowState,
    error::ReflowError,
    prefix::common_prefix,
    width::visual_length,
    wrap::wrap_paragraph,
};

/// Deepest decoration nesting accepted before giving up.
pub const MAX_DEPTH: usize = 128;

/// How a stripped decoration is put back onto reflowed lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Restore {
    /// The decoration starts every line.
    Repeat,
    /// The decoration starts the first line; the rest are padded with spaces.
    Leading,
}

/// Indentation and decoration kind of one line of a block.
#[derive(Debug, Clone, Copy)]
struct Mark {
    indent: usize,
    kind: DecorationKind,
}

/// Reflow `lines`, returning the replacement lines in order.
///
/// Lines must not contain line breaks and should have their leading tabs
/// expanded (see [`crate::width::tabs_to_spaces`]).
///
/// # Errors
/// Returns [`ReflowError::NestingTooDeep`] for decorations nested beyond
/// [`MAX_DEPTH`] and [`ReflowError::InternalInconsistency`] if a block fails
/// to consume any line.
pub fn reflow_lines<S: AsRef<str>>(
    lines: &[S],
    state: ReflowState,
) -> Result<Vec<String>, ReflowError> {
    let lines: Vec<&str> = lines.iter().map(AsRef::as_ref).collect();
    let mut out = Vec::with_capacity(lines.len());
    reflow_run(&lines, state, 0, &mut out)?;
    Ok(out)
}

fn reflow_run(
    lines: &[&str],
    state: ReflowState,
    depth: usize,
    out: &mut Vec<String>,
) -> Result<(), ReflowError> {
    if depth > MAX_DEPTH {
        return Err(ReflowError::NestingTooDeep { depth: MAX_DEPTH });
    }
    let prefix = common_prefix(lines);
    if !prefix.is_empty() {
        log::trace!("run of {} lines shares prefix {prefix:?}", lines.len());
        return retry_without(prefix, lines, Restore::Repeat, state, depth, out);
    }
    let mut start = 0;
    while start < lines.len() {
        let end = reflow_block(lines, start, state, depth, out)?;
        if end <= start {
            return Err(ReflowError::InternalInconsistency { start, end });
        }
        start = end;
    }
    Ok(())
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn marks(lines: &[&str], state: ReflowState) -> Result<Vec<Mark>, ReflowError> {
    lines
        .iter()
        .map(|line| {
            let m = classify(line);
            Ok(Mark {
                indent: visual_length(m.ws_before, state.start_column, state.tab_width)?,
                kind: m.kind,
            })
        })
        .collect()
}

/// Last line in `marks[from..]` that could end a paragraph begun at
/// `indent`: no deeper indentation and not a list-style line.
fn last_paragraph_line(marks: &[Mark], from: usize, indent: usize) -> Option<usize> {
    (from..marks.len())
        .rev()
        .find(|&i| marks[i].indent <= indent && marks[i].kind != DecorationKind::LeadingOnly)
}

/// Reflow the block starting at `start` and return the index just past it.
fn reflow_block(
    lines: &[&str],
    start: usize,
    state: ReflowState,
    depth: usize,
    out: &mut Vec<String>,
) -> Result<usize, ReflowError> {
    let blank_end = (start..lines.len())
        .find(|&i| is_blank(lines[i]))
        .unwrap_or(lines.len());
    if blank_end == start {
        out.push(lines[start].to_string());
        return Ok(start + 1);
    }

    if blank_end == start + 1 {
        single_line(lines, start, state, depth, out)?;
        return Ok(start + 1);
    }

    let first = classify(lines[start]);

    let block = &lines[start..blank_end];
    let prefix = common_prefix(block);
    if !prefix.is_empty() {
        log::trace!("lines {start}..{blank_end}: shared prefix {prefix:?}");
        retry_without(prefix, block, Restore::Repeat, state, depth, out)?;
        return Ok(blank_end);
    }

    let marks = marks(block, state)?;
    let indent = marks[0].indent;

    if first.kind == DecorationKind::LeadingOnly {
        let item_len = (1..marks.len())
            .find(|&i| marks[i].indent <= indent)
            .unwrap_or(marks.len());
        if item_len > 1 {
            log::trace!("lines {start}..{}: list item with body", start + item_len);
            retry_without(
                first.leading,
                &block[..item_len],
                Restore::Leading,
                state,
                depth,
                out,
            )?;
            return Ok(start + item_len);
        }
        if let Some(last) = last_paragraph_line(&marks, 1, indent) {
            log::trace!("lines {start}..{}: sigil inside a paragraph", start + last + 1);
            paragraph(&block[..=last], state, out)?;
            return Ok(start + last + 1);
        }
        log::trace!("line {start}: list item followed by siblings");
        retry_without(first.leading, &block[..1], Restore::Leading, state, depth, out)?;
        return Ok(start + 1);
    }

    let maybe_end = last_paragraph_line(&marks, 0, indent).unwrap_or(0);
    let para_len = (maybe_end + 1..marks.len())
        .find(|&i| marks[i].kind != DecorationKind::None)
        .unwrap_or(marks.len());
    if para_len == 1 {
        single_line(lines, start, state, depth, out)?;
    } else {
        log::trace!("lines {start}..{}: paragraph", start + para_len);
        paragraph(&block[..para_len], state, out)?;
    }
    Ok(start + para_len)
}

/// Reflow `lines[at]` on its own. Its decoration or indentation is stripped
/// and put back on every wrapped line, except that a list-style sigil keeps
/// a hanging indent.
fn single_line(
    lines: &[&str],
    at: usize,
    state: ReflowState,
    depth: usize,
    out: &mut Vec<String>,
) -> Result<(), ReflowError> {
    let line = &lines[at..=at];
    let first = classify(lines[at]);
    match first.kind {
        DecorationKind::LeadingOnly => {
            log::trace!("line {at}: single list item {:?}", first.token);
            retry_without(first.leading, line, Restore::Leading, state, depth, out)
        }
        DecorationKind::Extending => {
            log::trace!("line {at}: single marked line {:?}", first.token);
            retry_without(first.leading, line, Restore::Repeat, state, depth, out)
        }
        DecorationKind::None if !first.leading.is_empty() => {
            retry_without(first.leading, line, Restore::Repeat, state, depth, out)
        }
        DecorationKind::None => paragraph(line, state, out),
    }
}

/// Wrap `lines` as one paragraph, keeping the first line's indentation on the
/// first output line only.
fn paragraph(lines: &[&str], state: ReflowState, out: &mut Vec<String>) -> Result<(), ReflowError> {
    let first = lines[0];
    let indent = &first[..first.len() - first.trim_start().len()];
    let offset = visual_length(indent, state.start_column, state.tab_width)?;
    let wrapped = wrap_paragraph(&lines.join("\n"), state, offset)?;
    for (i, line) in wrapped.into_iter().enumerate() {
        if i == 0 {
            out.push(format!("{indent}{line}"));
        } else {
            out.push(line);
        }
    }
    Ok(())
}

/// Remove `decoration` from `line`, or failing that up to `width` columns of
/// spaces and tabs.
fn strip<'a>(line: &'a str, decoration: &str, width: usize) -> &'a str {
    if let Some(rest) = line.strip_prefix(decoration) {
        return rest;
    }
    let n = line
        .bytes()
        .take(width)
        .take_while(|b| *b == b' ' || *b == b'\t')
        .count();
    &line[n..]
}

/// Strip `decoration` from every line, reflow what remains one level down,
/// and put the decoration back.
fn retry_without(
    decoration: &str,
    lines: &[&str],
    restore: Restore,
    state: ReflowState,
    depth: usize,
    out: &mut Vec<String>,
) -> Result<(), ReflowError> {
    let width = visual_length(decoration, state.start_column, state.tab_width)?;
    let stripped: Vec<&str> = lines
        .iter()
        .map(|line| strip(line, decoration, width))
        .collect();

    let mut inner = Vec::with_capacity(stripped.len());
    reflow_run(&stripped, state.advanced_by(width), depth + 1, &mut inner)?;
    if inner.is_empty() {
        out.push(decoration.trim_end().to_string());
        return Ok(());
    }

    let pad = " ".repeat(width);
    for (i, line) in inner.into_iter().enumerate() {
        let lead = match restore {
            Restore::Leading if i > 0 => pad.as_str(),
            _ => decoration,
        };
        if line.is_empty() {
            out.push(lead.trim_end().to_string());
        } else {
            out.push(format!("{lead}{line}"));
        }
    }
    Ok(())
}
