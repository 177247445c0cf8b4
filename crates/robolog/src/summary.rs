// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Aggregate counts over a structured forest

use serde::{Deserialize, Serialize};

use crate::link::Link;
use crate::node::{LogNode, TestCase, Walk};

/// A failing test together with the suites enclosing it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailingTest<'a> {
    /// Enclosing suite names, outermost first
    pub suite_path: Vec<&'a str>,
    /// The failing test
    pub test: &'a TestCase,
}

/// Counts of tests and suites in a forest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Tests found
    pub tests: usize,
    /// Tests passed
    pub tests_passed: usize,
    /// Tests failed
    pub tests_failed: usize,
    /// Suites found
    pub suites: usize,
    /// Suites passed
    pub suites_passed: usize,
    /// Suites failed
    pub suites_failed: usize,
}

impl RunSummary {
    /// Count every test and suite in the forest
    #[must_use]
    pub fn from_forest(forest: &[LogNode]) -> Self {
        let mut summary = Self::default();
        for (_, node) in Walk::new(forest) {
            match node {
                LogNode::Text { .. } => {}
                LogNode::Test(test) => {
                    summary.tests += 1;
                    if test.failed() {
                        summary.tests_failed += 1;
                    } else {
                        summary.tests_passed += 1;
                    }
                }
                LogNode::Suite(suite) => {
                    summary.suites += 1;
                    if suite.status.is_fail() {
                        summary.suites_failed += 1;
                    } else {
                        summary.suites_passed += 1;
                    }
                }
            }
        }
        summary
    }

    /// Check if nothing failed
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.tests_failed == 0 && self.suites_failed == 0
    }
}

/// Collect failing tests with their suite path, in order
#[must_use]
pub fn failing_tests(forest: &[LogNode]) -> Vec<FailingTest<'_>> {
    let mut out = Vec::new();
    let mut path: Vec<&str> = Vec::new();

    for (depth, node) in Walk::new(forest) {
        path.truncate(depth);
        match node {
            LogNode::Test(test) if test.failed() => out.push(FailingTest {
                suite_path: path.clone(),
                test,
            }),
            LogNode::Suite(suite) => path.push(&suite.name),
            _ => {}
        }
    }
    out
}

/// Collect every result-file link, in order, from text lines and test logs
#[must_use]
pub fn links(forest: &[LogNode]) -> Vec<Link> {
    let mut out = Vec::new();
    for (_, node) in Walk::new(forest) {
        match node {
            LogNode::Text { content, .. } => out.extend(Link::detect(content)),
            LogNode::Test(test) => out.extend(test.logs.iter().filter_map(|l| Link::detect(l))),
            LogNode::Suite(_) => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_lines;
    use similar_asserts::assert_eq;

    const RUN: &[&str] = &[
        "==============================================================================",
        "Mobile",
        "==============================================================================",
        "Mobile.Login",
        "==============================================================================",
        "Valid Login                                                           | PASS |",
        "------------------------------------------------------------------------------",
        "Invalid Login                                                         | FAIL |",
        "Element 'id=error' did not appear in 5 seconds.",
        "------------------------------------------------------------------------------",
        "Mobile.Login                                                          | FAIL |",
        "2 tests, 1 passed, 1 failed",
        "==============================================================================",
        "Mobile                                                                | FAIL |",
        "2 tests, 1 passed, 1 failed",
        "==============================================================================",
        "Output:  /tmp/results/output.xml",
        "Log:     /tmp/results/log.html",
        "Report:  /tmp/results/report.html",
    ];

    #[test]
    fn test_summary_counts() {
        let forest = parse_lines(RUN);
        let summary = RunSummary::from_forest(&forest);
        assert_eq!(
            summary,
            RunSummary {
                tests: 2,
                tests_passed: 1,
                tests_failed: 1,
                suites: 2,
                suites_passed: 0,
                suites_failed: 2,
            }
        );
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_failing_tests_with_path() {
        let forest = parse_lines(RUN);
        let failing = failing_tests(&forest);
        assert_eq!(failing.len(), 1);
        assert_eq!(failing[0].suite_path, vec!["Mobile", "Login"]);
        assert_eq!(failing[0].test.name, "Invalid Login");
        assert_eq!(
            failing[0].test.logs,
            vec![RUN[7], "Element 'id=error' did not appear in 5 seconds."]
        );
    }

    #[test]
    fn test_links_in_order() {
        let forest = parse_lines(RUN);
        let labels: Vec<String> = links(&forest).into_iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Output", "Log", "Report"]);
    }

    #[test]
    fn test_empty_forest() {
        let summary = RunSummary::from_forest(&[]);
        assert!(summary.all_passed());
        assert_eq!(summary.tests, 0);
    }
}
