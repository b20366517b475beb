//! Line classification.
//!
//! A line is split into leading whitespace, a candidate decoration token, the
//! whitespace after it and the remaining text. The token is then matched
//! against the pattern tables below to decide whether it is a list-style
//! sigil, a repeating comment marker, or plain text.

use std::sync::LazyLock;

use regex::Regex;

/// List-style sigils. A token matching any of these is a leading-only
/// decoration.
pub const LIST_STYLE_PATTERNS: &[&str] = &[
    r"[-+*]",
    r"[0-9]{1,3}\.",
    r"[a-z]{1,2}\.",
    r"[A-Z]{1,2}\.",
    r"\((?:[0-9]{1,3}|[a-z]{1,2}|[A-Z]{1,2})\)",
];

/// Comment openers that appear once, at the start of a block.
pub const NON_EXTENDING_OPENERS: &[&str] = &["<!--", "/*", "(*"];

/// Comment markers that repeat on every line of a block.
pub const EXTENDING_MARKERS: &[&str] = &["#", "//", ";", "--"];

static LIST_STYLE_RE: LazyLock<Regex> = crate::lazy_regex!(
    &format!("^(?:{})$", LIST_STYLE_PATTERNS.join("|")),
    "list style patterns should compile",
);

static TOKEN_RE: LazyLock<Regex> = crate::lazy_regex!(
    r"^(\s*)(\S+)(\s*)(.*)$",
    "token pattern should compile",
);

/// How a line's leading token behaves when its block is rewrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorationKind {
    /// No decoration; the line starts with text.
    None,
    /// Printed on the first wrapped line only; continuation lines get an
    /// equal-width run of spaces.
    LeadingOnly,
    /// Repeated on every wrapped line.
    Extending,
}

/// A single line split into its decoration parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineClassification<'a> {
    pub raw: &'a str,
    /// Whitespace, token and following whitespace, or only the whitespace
    /// when the line has no decoration.
    pub leading: &'a str,
    pub ws_before: &'a str,
    pub token: &'a str,
    pub ws_after: &'a str,
    pub kind: DecorationKind,
    pub remaining: &'a str,
}

/// Returns `true` for characters that may form a decoration token.
#[must_use]
pub fn is_punctuation(c: char) -> bool {
    !c.is_alphanumeric() && !c.is_whitespace() && c != '_'
}

/// Decide the decoration kind of a candidate token.
///
/// ```
/// use magic_reflow::classify::{DecorationKind, decoration_kind};
///
/// assert_eq!(decoration_kind("10."), DecorationKind::LeadingOnly);
/// assert_eq!(decoration_kind("/**"), DecorationKind::LeadingOnly);
/// assert_eq!(decoration_kind(";;"), DecorationKind::Extending);
/// assert_eq!(decoration_kind("word"), DecorationKind::None);
/// ```
#[must_use]
pub fn decoration_kind(token: &str) -> DecorationKind {
    if LIST_STYLE_RE.is_match(token) {
        return DecorationKind::LeadingOnly;
    }
    if token.is_empty() || !token.chars().all(is_punctuation) {
        return DecorationKind::None;
    }
    if NON_EXTENDING_OPENERS.iter().any(|o| token.starts_with(o)) {
        DecorationKind::LeadingOnly
    } else if EXTENDING_MARKERS.iter().any(|m| token.starts_with(m)) || token.chars().count() == 1
    {
        DecorationKind::Extending
    } else {
        DecorationKind::LeadingOnly
    }
}

/// Split `line` into whitespace, decoration and text.
///
/// Never fails: a line without a recognised decoration yields
/// [`DecorationKind::None`] with the first word folded back into
/// `remaining`.
#[must_use]
pub fn classify(line: &str) -> LineClassification<'_> {
    let Some(cap) = TOKEN_RE.captures(line) else {
        return LineClassification {
            raw: line,
            leading: line,
            ws_before: line,
            token: "",
            ws_after: "",
            kind: DecorationKind::None,
            remaining: "",
        };
    };
    let part = |i: usize| cap.get(i).map_or("", |m| m.as_str());
    let ws_before = part(1);
    let token = part(2);
    let ws_after = part(3);
    match decoration_kind(token) {
        DecorationKind::None => LineClassification {
            raw: line,
            leading: ws_before,
            ws_before,
            token: "",
            ws_after: "",
            kind: DecorationKind::None,
            remaining: &line[ws_before.len()..],
        },
        kind => LineClassification {
            raw: line,
            leading: &line[..ws_before.len() + token.len() + ws_after.len()],
            ws_before,
            token,
            ws_after,
            kind,
            remaining: part(4),
        },
    }
}
