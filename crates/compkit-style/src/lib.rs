//! # compkit Style
//!
//! Line-based validation of CSS module files.
//!
//! Selectors are checked for class naming, id and universal selectors and
//! `!`; every declaration line is checked for `px` values without a
//! relative unit alongside. Files can be validated one at a time, as a
//! directory tree, or continuously in watch mode.

pub mod rules;
pub mod validator;
pub mod watch;

pub use rules::{RULES, RuleCheck, RuleId, RuleVerdict, ValidationRule};
pub use validator::{
    CSS_MODULE_SUFFIX, DirectoryReport, FileReport, ValidationIssue, validate_content,
    validate_directory, validate_file,
};
pub use watch::{Change, ChangeTracker, DEFAULT_WATCH_INTERVAL, WatchEvent, WatchOptions, watch};
