// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Fail-capture tracking
//!
//! After a test fails, the runner prints the failure message and any traceback
//! on the following lines. Those lines belong to the failing test until the
//! next separator, global message, or test/suite boundary.

use crate::node::TestCase;

/// Holds the most recently emitted failing test while its detail is captured
#[derive(Debug, Default)]
pub struct FailCapture {
    active: Option<TestCase>,
}

impl FailCapture {
    /// Create a tracker with no active test
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a failing test is currently capturing lines
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Start capturing for a failing test
    ///
    /// Returns the previously active test, if any, so the caller can emit it.
    pub fn begin(&mut self, test: TestCase) -> Option<TestCase> {
        self.active.replace(test)
    }

    /// Append a line to the active test's logs
    ///
    /// Returns the line back when nothing is capturing.
    pub fn absorb(&mut self, line: String) -> Result<(), String> {
        match self.active.as_mut() {
            Some(test) => {
                test.logs.push(line);
                Ok(())
            }
            None => Err(line),
        }
    }

    /// End capture and hand back the completed test
    pub fn finish(&mut self) -> Option<TestCase> {
        self.active.take()
    }
}
