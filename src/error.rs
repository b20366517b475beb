//! Error type shared by the reflow engine.

/// Failures reported by [`crate::reflow`] and its building blocks.
///
/// Arbitrary text never produces an error. Each variant signals either a
/// caller contract violation or a broken internal invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReflowError {
    /// A multi-line fragment reached a single-line width computation.
    #[error("visual width requested for text containing a line break: {fragment:?}")]
    InvalidInput { fragment: String },

    /// The block segmenter returned without consuming any line.
    #[error("block segmenter made no progress (start {start}, end {end})")]
    InternalInconsistency { start: usize, end: usize },

    /// Decorations were nested deeper than the recursion guard allows.
    #[error("decorations nested more than {depth} levels deep")]
    NestingTooDeep { depth: usize },

    /// A line width or tab width of zero was configured.
    #[error("line width and tab width must be positive")]
    InvalidWidth,
}
