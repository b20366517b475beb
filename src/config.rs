//! Reflow configuration and the per-level state derived from it.

use serde::Deserialize;

use crate::error::ReflowError;

/// Target width used when none is configured.
pub const DEFAULT_LINE_WIDTH: usize = 80;
/// Tab stop width used when none is configured.
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// Caller-facing options for a single reflow.
///
/// Every field is optional; [`ReflowConfig::resolve`] fills the gaps with the
/// defaults (80 columns, 8-column tabs, column 0, soft tabs).
///
/// # Examples
///
/// ```
/// use magic_reflow::ReflowConfig;
///
/// let config = ReflowConfig::default().with_line_width(30);
/// let state = config.resolve().unwrap();
/// assert_eq!(state.line_width, 30);
/// assert_eq!(state.tab_width, 8);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ReflowConfig {
    pub line_width: Option<usize>,
    pub tab_width: Option<usize>,
    pub start_column: Option<usize>,
    pub soft_tabs: Option<bool>,
}

impl ReflowConfig {
    #[must_use]
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_tab_width(mut self, width: usize) -> Self {
        self.tab_width = Some(width);
        self
    }

    #[must_use]
    pub fn with_start_column(mut self, column: usize) -> Self {
        self.start_column = Some(column);
        self
    }

    #[must_use]
    pub fn with_soft_tabs(mut self, soft_tabs: bool) -> Self {
        self.soft_tabs = Some(soft_tabs);
        self
    }

    /// Fill unset fields from `other`, keeping values already present.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self {
            line_width: self.line_width.or(other.line_width),
            tab_width: self.tab_width.or(other.tab_width),
            start_column: self.start_column.or(other.start_column),
            soft_tabs: self.soft_tabs.or(other.soft_tabs),
        }
    }

    /// Apply defaults and validate the widths.
    ///
    /// # Errors
    /// Returns [`ReflowError::InvalidWidth`] if the line width or tab width is
    /// zero.
    pub fn resolve(&self) -> Result<ReflowState, ReflowError> {
        let line_width = self.line_width.unwrap_or(DEFAULT_LINE_WIDTH);
        let tab_width = self.tab_width.unwrap_or(DEFAULT_TAB_WIDTH);
        if line_width == 0 || tab_width == 0 {
            return Err(ReflowError::InvalidWidth);
        }
        Ok(ReflowState {
            tab_width,
            line_width,
            start_column: self.start_column.unwrap_or(0),
            soft_tabs: self.soft_tabs.unwrap_or(true),
        })
    }
}

/// Resolved settings handed down through the block segmenter.
///
/// Each recursive level works on a copy; stripping a decoration produces a
/// new state whose `start_column` has moved right by the decoration's width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReflowState {
    pub tab_width: usize,
    pub line_width: usize,
    pub start_column: usize,
    pub soft_tabs: bool,
}

impl ReflowState {
    /// State for text that begins `width` columns further right.
    #[must_use]
    pub fn advanced_by(self, width: usize) -> Self {
        Self {
            start_column: self.start_column + width,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_applies_defaults() {
        let state = ReflowConfig::default().resolve().expect("defaults are valid");
        assert_eq!(
            state,
            ReflowState {
                tab_width: 8,
                line_width: 80,
                start_column: 0,
                soft_tabs: true,
            }
        );
    }

    #[test]
    fn resolve_rejects_zero_widths() {
        assert_eq!(
            ReflowConfig::default().with_line_width(0).resolve(),
            Err(ReflowError::InvalidWidth)
        );
        assert_eq!(
            ReflowConfig::default().with_tab_width(0).resolve(),
            Err(ReflowError::InvalidWidth)
        );
    }

    #[test]
    fn or_prefers_own_values() {
        let merged = ReflowConfig::default()
            .with_line_width(60)
            .or(ReflowConfig::default().with_line_width(72).with_tab_width(4));
        assert_eq!(merged.line_width, Some(60));
        assert_eq!(merged.tab_width, Some(4));
        assert_eq!(merged.soft_tabs, None);
    }

    #[test]
    fn advanced_by_moves_start_column_only() {
        let state = ReflowConfig::default().with_start_column(2).resolve().unwrap();
        let next = state.advanced_by(3);
        assert_eq!(next.start_column, 5);
        assert_eq!(next.line_width, state.line_width);
    }

    #[test]
    fn deserializes_kebab_case_keys() {
        let config: ReflowConfig =
            toml::from_str("line-width = 72\nsoft-tabs = false\n").expect("valid toml");
        assert_eq!(config.line_width, Some(72));
        assert_eq!(config.soft_tabs, Some(false));
        assert_eq!(config.tab_width, None);
    }
}
