// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line classification
//!
//! Labels a single raw console line. Classification is stateless; whether a
//! summary line closes a suite is decided by the linear pass, which only looks
//! for one directly after a status line.

use std::sync::LazyLock;

use regex::Regex;

use crate::node::Status;

const SYSTEM_PREFIX: &str = "[System]";
const ERROR_PREFIX: &str = "[Error]";
const DOC_SEPARATOR: &str = " :: ";
const MIN_SEPARATOR_LEN: usize = 10;

static STATUS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\|\s*(PASS|FAIL)\s*\|").unwrap());

static SUITE_SUMMARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+ tests?, \d+ passed, \d+ failed").unwrap());

/// Label of a console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A row of `-` or `=`
    Separator,
    /// A `[System]` message
    SystemMessage,
    /// An `[Error]` message
    ErrorMessage,
    /// `<prefix> | PASS |` or `<prefix> | FAIL |`
    StatusLine {
        /// Trimmed text before the status token
        prefix: &'a str,
        /// Parsed status token
        status: Status,
    },
    /// `N tests, M passed, K failed`
    SuiteSummaryLine,
    /// Anything else
    PlainText,
}

/// Classify a console line
///
/// Precedence: separator, system message, error message, status line, suite
/// summary line, plain text.
#[must_use]
pub fn classify(line: &str) -> LineKind<'_> {
    if is_separator(line) {
        LineKind::Separator
    } else if line.starts_with(SYSTEM_PREFIX) {
        LineKind::SystemMessage
    } else if line.starts_with(ERROR_PREFIX) {
        LineKind::ErrorMessage
    } else if let Some((prefix, status)) = parse_status_line(line) {
        LineKind::StatusLine { prefix, status }
    } else if is_suite_summary(line) {
        LineKind::SuiteSummaryLine
    } else {
        LineKind::PlainText
    }
}

/// Check if a line is a separator (ten or more `-`/`=` after trimming)
#[must_use]
pub fn is_separator(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.len() >= MIN_SEPARATOR_LEN && trimmed.bytes().all(|b| b == b'-' || b == b'=')
}

/// Check if a line is a `[System]` message
#[must_use]
pub fn is_system_message(line: &str) -> bool {
    line.starts_with(SYSTEM_PREFIX)
}

/// Check if a line is a suite summary (`1 test, 1 passed, 0 failed`)
#[must_use]
pub fn is_suite_summary(line: &str) -> bool {
    SUITE_SUMMARY.is_match(line)
}

/// Extract the trimmed prefix and status of a status line
#[must_use]
pub fn parse_status_line(line: &str) -> Option<(&str, Status)> {
    let caps = STATUS_LINE.captures(line)?;
    let prefix = caps.get(1).map_or("", |m| m.as_str().trim());
    let status = caps.get(2).and_then(|m| Status::from_token(m.as_str()))?;
    Some((prefix, status))
}

/// Split `name :: documentation`
///
/// The name is the text before the first ` :: `; everything after it is the
/// documentation, with further separators kept as printed. Both parts are
/// trimmed and an empty documentation is dropped.
#[must_use]
pub fn split_documentation(text: &str) -> (String, Option<String>) {
    match text.split_once(DOC_SEPARATOR) {
        Some((name, doc)) => {
            let doc = doc.trim();
            let doc = (!doc.is_empty()).then(|| doc.to_string());
            (name.trim().to_string(), doc)
        }
        None => (text.trim().to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_separator_lines() {
        assert_eq!(classify(&"=".repeat(78)), LineKind::Separator);
        assert_eq!(classify(&"-".repeat(10)), LineKind::Separator);
        assert_eq!(classify("  ----------  "), LineKind::Separator);
        assert_eq!(classify("---------"), LineKind::PlainText);
        assert_eq!(classify("---- x ----"), LineKind::PlainText);
    }

    #[test]
    fn test_message_prefixes() {
        assert_eq!(classify("[System] Device connected"), LineKind::SystemMessage);
        assert_eq!(classify("[Error] adb not found"), LineKind::ErrorMessage);
        assert_eq!(classify(" [System] indented"), LineKind::PlainText);
    }

    #[test]
    fn test_status_lines() {
        assert_eq!(
            classify("My Test                                  | PASS |"),
            LineKind::StatusLine {
                prefix: "My Test",
                status: Status::Pass
            }
        );
        assert_eq!(
            classify("Login Test :: Verifies login flow|FAIL|  "),
            LineKind::StatusLine {
                prefix: "Login Test :: Verifies login flow",
                status: Status::Fail
            }
        );
        assert_eq!(
            classify("| PASS |"),
            LineKind::StatusLine {
                prefix: "",
                status: Status::Pass
            }
        );
        assert_eq!(classify("My Test | SKIP |"), LineKind::PlainText);
    }

    #[test]
    fn test_system_prefix_wins_over_status() {
        assert_eq!(classify("[System] x | PASS |"), LineKind::SystemMessage);
    }

    #[test]
    fn test_suite_summary() {
        assert_eq!(
            classify("1 test, 1 passed, 0 failed"),
            LineKind::SuiteSummaryLine
        );
        assert_eq!(
            classify("12 tests, 10 passed, 2 failed, 0 skipped"),
            LineKind::SuiteSummaryLine
        );
        assert_eq!(classify("tests, 1 passed, 0 failed"), LineKind::PlainText);
        assert!(!is_suite_summary(" 1 test, 1 passed, 0 failed"));
    }

    #[test]
    fn test_split_documentation() {
        assert_eq!(
            split_documentation("Login Test :: Verifies login flow"),
            (
                "Login Test".to_string(),
                Some("Verifies login flow".to_string())
            )
        );
        assert_eq!(
            split_documentation("A :: b :: c"),
            ("A".to_string(), Some("b :: c".to_string()))
        );
        assert_eq!(split_documentation("Plain"), ("Plain".to_string(), None));
        assert_eq!(split_documentation("Name :: "), ("Name".to_string(), None));
    }
}
