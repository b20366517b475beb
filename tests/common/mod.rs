//! Utility helpers shared across integration tests.
#![allow(dead_code)]

use magic_reflow::{ReflowConfig, reflow, width::visual_length};

/// Build a `Vec<String>` from a list of string slices.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Reflow `input` at `width` columns with otherwise default settings.
pub fn reflow_at(input: &str, width: usize) -> String {
    let config = ReflowConfig::default().with_line_width(width);
    reflow(input, &config).expect("reflow succeeds")
}

/// Reflow `input` at `width` columns, converting indentation back to tabs.
pub fn reflow_hard_tabs(input: &str, width: usize, tab_width: usize) -> String {
    let config = ReflowConfig::default()
        .with_line_width(width)
        .with_tab_width(tab_width)
        .with_soft_tabs(false);
    reflow(input, &config).expect("reflow succeeds")
}

/// Words of `text` in order, ignoring how they were spaced or broken.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Assert that no line of `text` is wider than `width` visual columns,
/// counting tab stops every eight columns.
pub fn assert_fits(text: &str, width: usize) {
    for line in text.lines() {
        let columns = visual_length(line, 0, 8).expect("single line");
        assert!(
            columns <= width,
            "line {line:?} is {columns} columns, wider than {width}"
        );
    }
}
