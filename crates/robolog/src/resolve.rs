// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Test name and documentation resolution
//!
//! The runner may print a test's name twice: once on its own line before the
//! test's console output and once on the status line, where long names get
//! truncated to fit the console width. Either source can be the better one.

use crate::classify::{is_separator, is_system_message, split_documentation};

/// Result of merging a status line's name with the buffered candidate line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Resolved test name (may be empty)
    pub name: String,
    /// Resolved documentation
    pub documentation: Option<String>,
    /// Buffer position of the candidate name line, if one was found
    pub candidate: Option<usize>,
    /// Whether the candidate's name replaced the status line name
    pub adopted: bool,
}

impl Resolution {
    /// Buffer position where the test's own logs begin
    #[must_use]
    pub fn logs_start(&self) -> usize {
        self.candidate.map_or(0, |pos| pos + 1)
    }
}

/// Find the first buffered line that can name a test
#[must_use]
pub fn find_candidate<S: AsRef<str>>(buffer: &[S]) -> Option<usize> {
    buffer.iter().position(|line| {
        let line = line.as_ref();
        !line.trim().is_empty() && !is_system_message(line) && !is_separator(line)
    })
}

/// Check whether the candidate name should replace the status line name
///
/// True when the status line carries no name, or when one name contains the
/// other (truncation can happen on either side).
#[must_use]
pub fn prefers_candidate(status_name: &str, candidate_name: &str) -> bool {
    status_name.is_empty()
        || candidate_name.contains(status_name)
        || status_name.contains(candidate_name)
}

/// Resolve a test's name and documentation
pub fn resolve<S: AsRef<str>>(
    status_name: &str,
    status_doc: Option<&str>,
    buffer: &[S],
) -> Resolution {
    let Some(pos) = find_candidate(buffer) else {
        return Resolution {
            name: status_name.to_string(),
            documentation: status_doc.map(str::to_string),
            candidate: None,
            adopted: false,
        };
    };

    let (candidate_name, candidate_doc) = split_documentation(buffer[pos].as_ref());
    let adopted = prefers_candidate(status_name, &candidate_name);
    let name = if adopted {
        candidate_name
    } else {
        status_name.to_string()
    };
    let documentation = status_doc.map(str::to_string).or(candidate_doc);

    tracing::trace!(test = %name, adopted, candidate = pos, "resolved test name");

    Resolution {
        name,
        documentation,
        candidate: Some(pos),
        adopted,
    }
}
