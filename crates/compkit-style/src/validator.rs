//! File and directory validation.

use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use compkit_core::{CompkitError, CompkitResult};

use crate::rules::{RULES, RuleId};

/// Suffix identifying CSS module files.
pub const CSS_MODULE_SUFFIX: &str = ".module.css";

/// A single rule violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// 1-based line number; 0 for file-level issues.
    pub line: usize,
    pub rule: RuleId,
    pub message: String,
    /// The offending line, trimmed.
    pub content: String,
}

/// Issues found in one file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub issues: Vec<ValidationIssue>,
}

impl FileReport {
    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }
}

/// Aggregated result of validating a directory tree.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryReport {
    pub root: PathBuf,
    pub files: Vec<FileReport>,
    pub total_issues: usize,
}

impl DirectoryReport {
    pub fn new(root: PathBuf, files: Vec<FileReport>) -> Self {
        let total_issues = files.iter().map(FileReport::issue_count).sum();
        Self {
            root,
            files,
            total_issues,
        }
    }

    pub fn has_issues(&self) -> bool {
        self.total_issues > 0
    }
}

/// Whether a path names a CSS module file.
pub fn is_css_module(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(CSS_MODULE_SUFFIX))
}

fn is_comment_line(trimmed: &str) -> bool {
    trimmed.starts_with("/*")
        || trimmed.starts_with("//")
        || trimmed.starts_with("*/")
        || (trimmed.starts_with('*') && !trimmed.contains('{'))
}

/// Whether a block comment is still open at the end of `line`.
///
/// `/*` and `*/` inside quoted strings are ignored.
fn ends_in_block_comment(line: &str, mut in_comment: bool) -> bool {
    let bytes = line.as_bytes();
    let mut quote: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let current = bytes[i];
        let next = bytes.get(i + 1).copied();

        if in_comment {
            if current == b'*' && next == Some(b'/') {
                in_comment = false;
                i += 1;
            }
        } else if let Some(q) = quote {
            if current == b'\\' {
                i += 1;
            } else if current == q {
                quote = None;
            }
        } else if current == b'"' || current == b'\'' {
            quote = Some(current);
        } else if current == b'/' && next == Some(b'*') {
            in_comment = true;
            i += 1;
        }

        i += 1;
    }

    in_comment
}

/// Validate CSS text.
///
/// Issues are ordered by line, then by rule order within a line.
pub fn validate_content(content: &str) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    let mut in_block_comment = false;

    for (index, raw) in content.lines().enumerate() {
        let line_number = index + 1;
        let trimmed = raw.trim();

        if in_block_comment {
            in_block_comment = ends_in_block_comment(trimmed, true);
            continue;
        }

        if trimmed.is_empty() {
            continue;
        }

        if is_comment_line(trimmed) {
            in_block_comment = ends_in_block_comment(trimmed, false);
            continue;
        }

        if let Some((selector, _)) = trimmed.split_once('{') {
            let selector = selector.trim();
            for rule in RULES.iter() {
                if let Some(message) = rule.check_selector(selector) {
                    issues.push(ValidationIssue {
                        line: line_number,
                        rule: rule.id,
                        message,
                        content: trimmed.to_string(),
                    });
                }
            }
        }

        for rule in RULES.iter() {
            if let Some(message) = rule.check_line(trimmed) {
                issues.push(ValidationIssue {
                    line: line_number,
                    rule: rule.id,
                    message,
                    content: trimmed.to_string(),
                });
            }
        }

        in_block_comment = ends_in_block_comment(trimmed, false);
    }

    issues
}

/// Validate a single file.
///
/// A read failure is reported as a `fileError` issue rather than an error.
pub fn validate_file(path: &Path) -> Vec<ValidationIssue> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let issues = validate_content(&content);
            tracing::debug!(path = %path.display(), issues = issues.len(), "validated file");
            issues
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to read file");
            vec![file_error(&e.to_string())]
        }
    }
}

fn file_error(reason: &str) -> ValidationIssue {
    ValidationIssue {
        line: 0,
        rule: RuleId::FileError,
        message: format!("Could not read file: {}", reason),
        content: String::new(),
    }
}

/// Validate every CSS module under `dir`, recursively, in path order.
pub fn validate_directory(dir: &Path) -> CompkitResult<DirectoryReport> {
    if !dir.is_dir() {
        return Err(CompkitError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("directory not found: {}", dir.display()),
        )));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() && is_css_module(entry.path()) {
                    let path = entry.path().to_path_buf();
                    let issues = validate_file(&path);
                    files.push(FileReport { path, issues });
                }
            }
            Err(e) => match e.path().map(Path::to_path_buf) {
                Some(path) if is_css_module(&path) => {
                    files.push(FileReport {
                        path,
                        issues: vec![file_error(&e.to_string())],
                    });
                }
                _ => tracing::warn!(error = %e, "skipping unreadable entry"),
            },
        }
    }

    tracing::debug!(dir = %dir.display(), files = files.len(), "validated directory");

    Ok(DirectoryReport::new(dir.to_path_buf(), files))
}
