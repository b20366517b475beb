//! Reflow plain text while keeping its decorations.
//!
//! Text is rewrapped to a target width the way a careful typist would do it
//! by hand: list bullets and numbers keep a hanging indent, comment markers
//! such as `#`, `//` or `;` are repeated on every line, block comment openers
//! like `/*` stay on the first line, and indentation made of tabs or spaces
//! survives. Structure is inferred from whitespace and punctuation only.
//!
//! ```
//! use magic_reflow::{ReflowConfig, reflow};
//!
//! let config = ReflowConfig::default().with_line_width(24);
//! let out = reflow("# Hello, world!\n# Have another line.", &config).unwrap();
//! assert_eq!(out, "# Hello, world!  Have\n# another line.");
//! ```

mod macros;

pub mod classify;
pub mod config;
pub mod error;
pub mod io;
pub mod prefix;
pub mod process;
pub mod segment;
pub mod settings;
pub mod span;
pub mod width;
pub mod wrap;

pub use config::{ReflowConfig, ReflowState};
pub use error::ReflowError;
pub use io::{FileError, Target, reflow_file, reflow_target, rewrite};
pub use process::reflow;
pub use settings::{Settings, SettingsError};
pub use span::{Span, reflow_span, resolve_span};
