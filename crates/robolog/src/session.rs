// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Incremental collection of console output
//!
//! A host reading the runner's stdout receives arbitrary chunks. [`LogSession`]
//! splits them into lines and reparses the whole sequence whenever the forest
//! is requested after new input arrived. Node ids are line positions, so a
//! view's [`crate::presentation::CollapseState`] stays valid as output grows.

use crate::linear::build_linear;
use crate::node::LogNode;
use crate::tree::reduce;

/// Accumulates console lines and caches the structured forest
#[derive(Debug, Default)]
pub struct LogSession {
    lines: Vec<String>,
    pending: String,
    forest: Option<Vec<LogNode>>,
}

impl LogSession {
    /// Create an empty session
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one complete line
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
        self.forest = None;
    }

    /// Append several complete lines
    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.lines.len();
        self.lines.extend(lines.into_iter().map(Into::into));
        if self.lines.len() != before {
            self.forest = None;
        }
    }

    /// Append a raw output chunk
    ///
    /// Complete lines are added immediately; a trailing partial line is held
    /// until the next chunk or [`LogSession::finish`]. Returns the number of
    /// lines added.
    pub fn push_chunk(&mut self, chunk: &str) -> usize {
        self.pending.push_str(chunk);
        let Some(last_newline) = self.pending.rfind('\n') else {
            return 0;
        };

        let rest = self.pending.split_off(last_newline + 1);
        let complete = std::mem::replace(&mut self.pending, rest);
        let before = self.lines.len();
        self.extend(
            complete
                .split_terminator('\n')
                .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string()),
        );
        self.lines.len() - before
    }

    /// Flush a pending partial line, if any
    pub fn finish(&mut self) {
        if !self.pending.is_empty() {
            let last = std::mem::take(&mut self.pending);
            let last = last.strip_suffix('\r').unwrap_or(&last).to_string();
            self.push_line(last);
        }
    }

    /// Lines collected so far
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of complete lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if no complete line has been collected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Structured forest for the lines collected so far
    pub fn forest(&mut self) -> &[LogNode] {
        let lines = &self.lines;
        self.forest
            .get_or_insert_with(|| reduce(build_linear(lines)))
            .as_slice()
    }

    /// Drop all collected output
    pub fn clear(&mut self) {
        self.lines.clear();
        self.pending.clear();
        self.forest = None;
    }
}
