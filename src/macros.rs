//! Helper macros used across the crate.

/// Lazily compile a [`Regex`](regex::Regex) with a custom panic message.
///
/// The pattern tables in [`crate::classify`] and [`crate::wrap`] are built
/// with this macro so each table entry is compiled once on first use.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static RE: LazyLock<Regex> = magic_reflow::lazy_regex!(r"^\s*[-+*]\s", "bullet");
/// assert!(RE.is_match("  - item"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        ::std::sync::LazyLock::new(|| ::regex::Regex::new($pattern).expect($msg))
    };
}
