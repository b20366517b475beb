//! Detection of decorations shared by every line of a run.
//!
//! A block of `# `-prefixed comment lines can be stripped to plain text,
//! rewrapped, and given its prefix back on every output line. Shared list
//! bullets are not prefixes: two sibling items that both start with `- `
//! must stay separate items.

use crate::classify::{DecorationKind, classify};

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Longest non-word string every line starts with.
fn raw_common_prefix<'a, S: AsRef<str>>(lines: &'a [S]) -> &'a str {
    let Some((first, rest)) = lines.split_first() else {
        return "";
    };
    let first = first.as_ref();
    let mut end = 0;
    for (idx, ch) in first.char_indices() {
        if is_word_char(ch) {
            break;
        }
        let candidate = &first[..idx + ch.len_utf8()];
        if !rest.iter().all(|l| l.as_ref().starts_with(candidate)) {
            break;
        }
        end = candidate.len();
    }
    &first[..end]
}

fn at_token_boundary(line: &str, at: usize) -> bool {
    line[at..].chars().next().is_none_or(char::is_whitespace)
}

/// The decoration shared by all `lines`, or `""` if there is none.
///
/// At least two lines are needed. The shared text may not reach into a word,
/// and a shared marker only counts if it is a whole token on every line:
/// `## a` and `# b` share nothing. When the shared token is a list bullet
/// only its indentation is returned.
///
/// ```
/// use magic_reflow::prefix::common_prefix;
///
/// assert_eq!(common_prefix(&["    ## Hello", "    ## there"]), "    ## ");
/// assert_eq!(common_prefix(&["# one", "#", "# two"]), "#");
/// assert_eq!(common_prefix(&["  - one", "  - two"]), "  ");
/// assert_eq!(common_prefix(&["only one line"]), "");
/// ```
#[must_use]
pub fn common_prefix<S: AsRef<str>>(lines: &[S]) -> &str {
    if lines.len() < 2 {
        return "";
    }
    let raw = raw_common_prefix(lines);
    if raw.is_empty() {
        return raw;
    }
    let m = classify(raw);
    let accepted = match m.kind {
        DecorationKind::Extending => {
            let token_end = m.ws_before.len() + m.token.len();
            if m.ws_after.is_empty()
                && !lines
                    .iter()
                    .all(|l| at_token_boundary(l.as_ref(), token_end))
            {
                m.ws_before
            } else {
                m.leading
            }
        }
        DecorationKind::LeadingOnly => m.ws_before,
        DecorationKind::None => m.leading,
    };
    &raw[..accepted.len()]
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(&["# a", "# b"], "# ")]
    #[case(&["// 1. first", "// 2. second"], "// ")]
    #[case(&[";; a", ";; b", ";;"], ";;")]
    #[case(&["  foo", "  bar"], "  ")]
    #[case(&["    This", "  That"], "  ")]
    #[case(&["## a", "# b"], "")]
    #[case(&["-- a", "--- b"], "")]
    #[case(&["- a", "- b"], "")]
    #[case(&["(1) a", "(1) b"], "")]
    #[case(&["1. a", "1. b"], "")]
    #[case(&["# - a", "# - b"], "# ")]
    #[case(&["foo", "bar"], "")]
    #[case(&["#", ""], "")]
    fn finds_shared_decorations(#[case] lines: &[&str], #[case] want: &str) {
        assert_eq!(common_prefix(lines), want);
    }

    #[test]
    fn empty_input_has_no_prefix() {
        let lines: [&str; 0] = [];
        assert_eq!(common_prefix(&lines), "");
    }

    #[test]
    fn accepts_owned_lines() {
        let lines = vec!["> quoted".to_string(), "> text".to_string()];
        assert_eq!(common_prefix(&lines), "> ");
    }
}
