//! The fixed CSS module rule set.
//!
//! Pattern rules run against the selector (text before `{`); predicate
//! rules run against the whole line.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

/// Identifier of a validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RuleId {
    CamelCase,
    NoIdSelectors,
    NoUniversalSelector,
    NoImportant,
    PreferRelativeUnits,
    /// Synthetic rule for files that could not be read.
    FileError,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::CamelCase => "camelCase",
            RuleId::NoIdSelectors => "noIdSelectors",
            RuleId::NoUniversalSelector => "noUniversalSelector",
            RuleId::NoImportant => "noImportant",
            RuleId::PreferRelativeUnits => "preferRelativeUnits",
            RuleId::FileError => "fileError",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a predicate rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleVerdict {
    pub valid: bool,
    /// Detail appended to the rule message; may be empty.
    pub message: String,
}

/// How a rule inspects its input.
pub enum RuleCheck {
    /// Violated when the regex matches the selector.
    Pattern(Regex),
    /// Violated when the function returns an invalid verdict for the line.
    Predicate(fn(&str) -> RuleVerdict),
}

/// A single validation rule.
pub struct ValidationRule {
    pub id: RuleId,
    pub message: &'static str,
    pub check: RuleCheck,
}

impl ValidationRule {
    /// Check a selector. Returns the issue message when violated.
    ///
    /// Predicate rules never fire here.
    pub fn check_selector(&self, selector: &str) -> Option<String> {
        match &self.check {
            RuleCheck::Pattern(re) if re.is_match(selector) => Some(self.message.to_string()),
            _ => None,
        }
    }

    /// Check a full line. Returns the issue message, with the verdict's
    /// detail appended, when violated.
    ///
    /// Pattern rules never fire here.
    pub fn check_line(&self, line: &str) -> Option<String> {
        match &self.check {
            RuleCheck::Predicate(predicate) => {
                let verdict = predicate(line);
                if verdict.valid {
                    None
                } else if verdict.message.is_empty() {
                    Some(self.message.to_string())
                } else {
                    Some(format!("{} ({})", self.message, verdict.message))
                }
            }
            RuleCheck::Pattern(_) => None,
        }
    }
}

static PX_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\d*\.)?\d+px\b").expect("valid regex"));

static RELATIVE_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\d*\.)?\d+r?em\b").expect("valid regex"));

/// Flag lines with `px` values and no `rem`/`em` value.
pub fn prefer_relative_units(line: &str) -> RuleVerdict {
    let px = PX_VALUE.find_iter(line).count();
    let relative = RELATIVE_VALUE.find_iter(line).count();

    if px > 0 && relative == 0 {
        RuleVerdict {
            valid: false,
            message: format!(
                "{} px value{} found",
                px,
                if px == 1 { "" } else { "s" }
            ),
        }
    } else {
        RuleVerdict {
            valid: true,
            message: String::new(),
        }
    }
}

/// The rule set, in check order.
pub static RULES: Lazy<Vec<ValidationRule>> = Lazy::new(|| {
    vec![
        ValidationRule {
            id: RuleId::CamelCase,
            message:
                "Class names should be camelCase (lowercase first letter, letters and digits only)",
            // A class starting with something other than a lowercase letter,
            // or continuing with `-` or `_`.
            check: RuleCheck::Pattern(
                Regex::new(r"\.(?:[A-Z_-]|[a-z][a-zA-Z0-9]*[_-])").expect("valid regex"),
            ),
        },
        ValidationRule {
            id: RuleId::NoIdSelectors,
            message: "Avoid id selectors in CSS modules; use a class instead",
            check: RuleCheck::Pattern(Regex::new("#").expect("valid regex")),
        },
        ValidationRule {
            id: RuleId::NoUniversalSelector,
            message: "Avoid the universal selector (*)",
            check: RuleCheck::Pattern(Regex::new(r"\*").expect("valid regex")),
        },
        ValidationRule {
            id: RuleId::NoImportant,
            message: "Avoid !important",
            check: RuleCheck::Pattern(Regex::new("!").expect("valid regex")),
        },
        ValidationRule {
            id: RuleId::PreferRelativeUnits,
            message: "Prefer rem/em over px",
            check: RuleCheck::Predicate(prefer_relative_units),
        },
    ]
});
