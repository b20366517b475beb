//! Scoped settings loaded from a TOML file.
//!
//! ```toml
//! line-width = 72
//! tab-width = 4
//!
//! [[override]]
//! pattern = "*.py"
//! line-width = 79
//!
//! [[override]]
//! pattern = "Makefile"
//! soft-tabs = false
//! ```
//!
//! Overrides whose pattern matches a file are applied in file order over the
//! top-level values, so a later override wins over an earlier one.

use std::{fs, io, path::Path};

use globset::Glob;
use serde::Deserialize;

use crate::config::ReflowConfig;

/// Errors that can occur when loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file could not be read.
    #[error("failed to read settings file at {path}: {source}")]
    Io { source: io::Error, path: String },

    /// The settings file is not valid TOML for [`Settings`].
    #[error("failed to parse settings: {0}")]
    Parse(String),

    /// An override pattern is not a valid glob.
    #[error("invalid override pattern {pattern:?}: {message}")]
    Pattern { pattern: String, message: String },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Override {
    pattern: String,
    line_width: Option<usize>,
    tab_width: Option<usize>,
    soft_tabs: Option<bool>,
}

impl Override {
    fn config(&self) -> ReflowConfig {
        ReflowConfig {
            line_width: self.line_width,
            tab_width: self.tab_width,
            start_column: None,
            soft_tabs: self.soft_tabs,
        }
    }
}

/// Reflow settings with per-file-pattern overrides.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct Settings {
    line_width: Option<usize>,
    tab_width: Option<usize>,
    soft_tabs: Option<bool>,
    #[serde(default, rename = "override")]
    overrides: Vec<Override>,
}

impl Settings {
    /// Read settings from a TOML file.
    ///
    /// # Errors
    /// Returns [`SettingsError::Io`] if the file cannot be read and
    /// [`SettingsError::Parse`] if it is not valid.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
            source,
            path: path.display().to_string(),
        })?;
        let settings = Self::parse(&text)?;
        log::debug!(
            "loaded settings from {} with {} override(s)",
            path.display(),
            settings.overrides.len()
        );
        Ok(settings)
    }

    /// Parse settings from TOML text.
    ///
    /// # Errors
    /// Returns [`SettingsError::Parse`] if the text is not valid.
    pub fn parse(text: &str) -> Result<Self, SettingsError> {
        toml::from_str(text).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Configuration for `path`, or the top-level values when there is no
    /// path (standard input).
    ///
    /// # Errors
    /// Returns [`SettingsError::Pattern`] if an override pattern is invalid.
    pub fn for_path(&self, path: Option<&Path>) -> Result<ReflowConfig, SettingsError> {
        let mut config = ReflowConfig {
            line_width: self.line_width,
            tab_width: self.tab_width,
            start_column: None,
            soft_tabs: self.soft_tabs,
        };
        let Some(path) = path else {
            return Ok(config);
        };
        for entry in &self.overrides {
            let matcher = Glob::new(&entry.pattern)
                .map_err(|e| SettingsError::Pattern {
                    pattern: entry.pattern.clone(),
                    message: e.to_string(),
                })?
                .compile_matcher();
            let file_name_matches = path.file_name().is_some_and(|n| matcher.is_match(n));
            if matcher.is_match(path) || file_name_matches {
                log::debug!("{} matches override {:?}", path.display(), entry.pattern);
                config = entry.config().or(config);
            }
        }
        Ok(config)
    }
}
