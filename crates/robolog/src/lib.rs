// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! robolog: Structured Robot Framework console output
//!
//! This library crate turns the plain-text console output of a Robot
//! Framework run into a tree of suites and tests with pass/fail status,
//! captured failure detail and documentation, and decides which parts of that
//! tree are shown open.
//!
//! The pipeline is pure and synchronous: lines are classified and folded into
//! a flat list by [`linear::build_linear`], then nested by [`tree::reduce`].
//! Every call is a full reparse, so hosts simply call it again when more
//! output arrives.
//!
//! # Example
//!
//! ```
//! use robolog::{CollapseState, LogNode, parse_lines, render};
//!
//! let forest = parse_lines(&[
//!     "Smoke",
//!     "Opens App | FAIL |",
//!     "Element 'id=home' not found",
//!     "------------------------------",
//!     "Smoke | FAIL |",
//!     "1 test, 0 passed, 1 failed",
//! ]);
//! assert_eq!(forest.len(), 1);
//! assert!(matches!(forest[0], LogNode::Suite(_)));
//!
//! let rows = render(&forest, &CollapseState::new());
//! assert!(!rows.is_empty());
//! ```

use std::io::BufRead;

pub mod capture;
pub mod classify;
pub mod error;
pub mod linear;
pub mod link;
pub mod node;
pub mod presentation;
pub mod resolve;
pub mod session;
pub mod summary;
pub mod tree;

pub use error::RobologError;
pub use link::{Link, PathOpener};
pub use node::{LinearNode, LogNode, NodeId, Status, Suite, SuiteEnd, TestCase, Walk};
pub use presentation::{
    CollapseState, Content, RenderOptions, RenderRow, RowKind, render, render_with,
};
pub use session::LogSession;
pub use summary::{FailingTest, RunSummary, failing_tests, links};

/// Structure a sequence of console lines into a forest
#[must_use]
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> Vec<LogNode> {
    tree::reduce(linear::build_linear(lines))
}

/// Structure console output held in a single string
#[must_use]
pub fn parse_str(output: &str) -> Vec<LogNode> {
    let lines: Vec<&str> = output.lines().collect();
    parse_lines(&lines)
}

/// Read console output line by line and structure it
///
/// Invalid UTF-8 is replaced with `U+FFFD`.
///
/// # Errors
///
/// Returns `RobologError::Io` if reading fails.
pub fn parse_reader<R: BufRead>(mut reader: R) -> Result<Vec<LogNode>, RobologError> {
    let mut lines = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
        let line = line.strip_suffix(b"\r").unwrap_or(line);
        lines.push(String::from_utf8_lossy(line).into_owned());
    }
    tracing::debug!(lines = lines.len(), "read console output");
    Ok(parse_lines(&lines))
}

/// Serialize a forest as pretty-printed JSON
///
/// # Errors
///
/// Returns `RobologError::Json` if serialization fails.
pub fn to_json(forest: &[LogNode]) -> Result<String, RobologError> {
    serde_json::to_string_pretty(forest).map_err(RobologError::from)
}

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::RobologError;
    pub use crate::node::{LogNode, NodeId, Status, TestCase};
    pub use crate::presentation::{CollapseState, render};
    pub use crate::session::LogSession;
    pub use crate::{parse_lines, parse_str};
}
