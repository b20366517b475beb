//! Properties that hold across many inputs: width bounds, word order,
//! idempotence and preserved blank-line boundaries.

#[macro_use]
mod prelude;
use magic_reflow::{ReflowConfig, segment::reflow_lines};
use prelude::*;

const PLAIN: &[&str] = &[
    "This is a much longer line, with more text.",
    "This is a bunch\nof short lines,\nwith some text.",
    "This is a long line, followed by another long\nline.  This is another long line.",
    "First\nparagraph is this.\n\nSecond\nparagraph is this.",
    "\n- This is a short list item.\n- This is a longer list item, which I expect to wrap across two lines.\n",
    "\n- This is a list item.  It's wrapped in a\n very strange way.\n- This is another list\n  item.  It's also wrapped\n  in a slightly different way.\n",
    "1. Mary had a little lamb.\n10. Her fleece was white as snow.",
    "  This is the first line.\n  This is the second line.",
];

const DECORATED: &[&str] = &[
    "\n# This is a comment.  Here is the first paragraph.\n#\n# Here is the second paragraph.  These should be reflowed independently.\n",
    "\n# Here's a comment with a list embedded in it:\n#\n# 1. This is the first item.  It's pretty long.\n# 2. Second short item.\n# 3. Third, excessively long, extremely verbose and very redundant item.\n",
    "\n/* 1. This is the first item.  It's super long.\n   2. This is the second item.  Notice how it's longer. */\n",
    "    ;; Hello, world!  Have another line that keeps going for a while.",
    "\tLeading tab that is a long line.\n\tSecond line that is also rather long.",
    "\t- A tabbed list item that has to wrap more than once here.",
    "日本語の文章 と 漢字 を 含む 行 は 二 列 ずつ 数える 必要 が ある",
    "- 東京 大阪 京都 名古屋 札幌 福岡 神戸 横浜 仙台",
];

#[rstest]
fn lines_fit_the_width(#[values(20, 30, 40, 60)] width: usize) {
    for input in PLAIN.iter().chain(DECORATED) {
        assert_fits(&reflow_at(input, width), width);
    }
}

#[rstest]
fn tab_indented_lines_fit_the_width(#[values(20, 30, 40)] width: usize) {
    for input in DECORATED.iter().filter(|t| t.contains('\t')) {
        let out = reflow_hard_tabs(input, width, 8);
        assert!(out.starts_with('\t'), "tab indent restored in {out:?}");
        assert_fits(&out, width);
    }
}

#[rstest]
fn words_keep_their_order(#[values(12, 24, 40, 80)] width: usize) {
    for input in PLAIN {
        let out = reflow_at(input, width);
        assert_eq!(words(&out), words(input), "reflowing {input:?}");
    }
}

#[rstest]
fn comment_markers_are_the_only_new_words(#[values(16, 24, 40)] width: usize) {
    let input = "# Here is a comment that goes on for a while.\n# It has two lines.";
    let out = reflow_at(input, width);
    let text: Vec<&str> = words(&out).into_iter().filter(|w| *w != "#").collect();
    let expected: Vec<&str> = words(input).into_iter().filter(|w| *w != "#").collect();
    assert_eq!(text, expected);
    assert!(out.lines().all(|l| l.starts_with("# ")));
}

#[rstest]
#[case("This is a long line, followed by another long\nline.  This is another long line.", 30)]
#[case(
    "\n- This is a short list item.\n- This is a longer list item, which I expect to wrap across two lines.\n",
    40
)]
#[case(
    "\n# This is a comment.  Here is the first paragraph.\n#\n# Here is the second paragraph.  These should be reflowed independently.\n",
    40
)]
#[case(".. This is a paragraph\n   with more than\n   two lines.", 24)]
fn reflowing_twice_changes_nothing(#[case] input: &str, #[case] width: usize) {
    let once = reflow_at(input, width);
    assert_eq!(reflow_at(&once, width), once);
}

#[test]
fn blank_lines_are_kept_in_place() {
    let lines = lines_vec![
        "First paragraph that is long enough to wrap.",
        "",
        "   ",
        "Second paragraph.",
    ];
    let state = ReflowConfig::default()
        .with_line_width(20)
        .resolve()
        .expect("valid width");
    let out = reflow_lines(&lines, state).expect("reflow succeeds");
    assert_eq!(
        out,
        lines_vec![
            "First paragraph that",
            "is long enough to",
            "wrap.",
            "",
            "   ",
            "Second paragraph.",
        ]
    );
}

#[rstest]
#[case("-", "  ")]
#[case("1.", "   ")]
#[case("/*", "   ")]
fn leading_decoration_is_restored_once(#[case] sigil: &str, #[case] pad: &str) {
    let out = reflow_at(
        &format!("{sigil} alpha beta gamma delta epsilon zeta eta theta"),
        20,
    );
    let mut lines = out.lines();
    assert!(lines.next().is_some_and(|l| l.starts_with(&format!("{sigil} "))));
    assert!(lines.all(|l| l.starts_with(pad) && !l[pad.len()..].starts_with(' ')));
}
