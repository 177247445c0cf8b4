// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Node types for structured console output
//!
//! [`LinearNode`] is the flat form produced by the linear pass, [`LogNode`] is
//! the nested form handed to renderers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Position-derived node identifier
///
/// The value is the zero-based index of the input line that produced the node:
/// the line itself for text, the status line for tests and suites. Ids are
/// therefore stable for an unchanged prefix of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// Outcome printed on a status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Status {
    /// `| PASS |`
    Pass,
    /// `| FAIL |`
    Fail,
}

impl Status {
    /// Parse the status token of a status line
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "PASS" => Some(Self::Pass),
            "FAIL" => Some(Self::Fail),
            _ => None,
        }
    }

    /// Check if this is a failure
    #[must_use]
    pub fn is_fail(self) -> bool {
        self == Self::Fail
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => f.write_str("PASS"),
            Self::Fail => f.write_str("FAIL"),
        }
    }
}

/// A fully parsed test case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Id of the test's status line
    pub id: NodeId,
    /// Resolved test name (may be empty)
    pub name: String,
    /// Documentation from the status line or the name line
    pub documentation: Option<String>,
    /// Test status
    pub status: Status,
    /// Console lines belonging to the test, including its status line
    pub logs: Vec<String>,
}

impl TestCase {
    /// Check if the test passed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == Status::Pass
    }

    /// Check if the test failed
    #[must_use]
    pub fn failed(&self) -> bool {
        self.status == Status::Fail
    }
}

/// Marker for a suite status line and its summary, before nesting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteEnd {
    /// Id of the suite's status line
    pub id: NodeId,
    /// Raw suite name as printed, possibly dotted (`Parent.Child`)
    pub name: String,
    /// Documentation from the status line
    pub documentation: Option<String>,
    /// Suite status
    pub status: Status,
    /// Summary line verbatim (`N tests, M passed, K failed`)
    pub summary: String,
}

/// A suite with its nested children
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    /// Id of the suite's status line
    pub id: NodeId,
    /// Last dotted segment of the suite name
    pub name: String,
    /// Documentation from the status line
    pub documentation: Option<String>,
    /// Suite status
    pub status: Status,
    /// Summary line verbatim
    pub summary: String,
    /// Everything between the suite declaration and its status line, in order
    pub children: Vec<LogNode>,
}

/// One unit produced by the linear pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinearNode {
    /// A line outside any test body
    Text {
        /// Line id
        id: NodeId,
        /// Line content
        content: String,
    },
    /// A completed test
    Test(TestCase),
    /// A suite status line
    SuiteEnd(SuiteEnd),
}

impl LinearNode {
    /// Get the node id
    #[must_use]
    pub fn id(&self) -> NodeId {
        match self {
            Self::Text { id, .. } => *id,
            Self::Test(test) => test.id,
            Self::SuiteEnd(end) => end.id,
        }
    }
}

/// A node of the structured tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LogNode {
    /// A bare console line
    Text {
        /// Line id
        id: NodeId,
        /// Line content
        content: String,
    },
    /// A test case
    Test(TestCase),
    /// A suite and its children
    Suite(Suite),
}

impl LogNode {
    /// Get the node id
    #[must_use]
    pub fn id(&self) -> NodeId {
        match self {
            Self::Text { id, .. } => *id,
            Self::Test(test) => test.id,
            Self::Suite(suite) => suite.id,
        }
    }

    /// Get the status of a test or suite
    #[must_use]
    pub fn status(&self) -> Option<Status> {
        match self {
            Self::Text { .. } => None,
            Self::Test(test) => Some(test.status),
            Self::Suite(suite) => Some(suite.status),
        }
    }

    /// Get the children of a suite (empty for other nodes)
    #[must_use]
    pub fn children(&self) -> &[LogNode] {
        match self {
            Self::Suite(suite) => &suite.children,
            _ => &[],
        }
    }

    /// Get the text content if this is a text node
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { content, .. } => Some(content),
            _ => None,
        }
    }
}

impl From<LinearNode> for LogNode {
    /// Text and tests carry over unchanged; a bare suite end becomes an empty suite.
    fn from(node: LinearNode) -> Self {
        match node {
            LinearNode::Text { id, content } => Self::Text { id, content },
            LinearNode::Test(test) => Self::Test(test),
            LinearNode::SuiteEnd(end) => Self::Suite(Suite {
                id: end.id,
                name: end.name,
                documentation: end.documentation,
                status: end.status,
                summary: end.summary,
                children: Vec::new(),
            }),
        }
    }
}

/// Preorder traversal of a forest with each node's depth
///
/// Uses an explicit stack, so arbitrarily deep suite nesting is fine.
#[derive(Debug, Clone)]
pub struct Walk<'a> {
    stack: Vec<std::slice::Iter<'a, LogNode>>,
    descended: bool,
}

impl<'a> Walk<'a> {
    /// Start a walk over `forest`
    #[must_use]
    pub fn new(forest: &'a [LogNode]) -> Self {
        Self {
            stack: vec![forest.iter()],
            descended: false,
        }
    }

    /// Do not visit the children of the suite just returned by `next`
    pub fn skip_children(&mut self) {
        if self.descended {
            self.stack.pop();
            self.descended = false;
        }
    }
}

impl<'a> Iterator for Walk<'a> {
    type Item = (usize, &'a LogNode);

    fn next(&mut self) -> Option<Self::Item> {
        self.descended = false;
        loop {
            let depth = self.stack.len().checked_sub(1)?;
            match self.stack[depth].next() {
                Some(node) => {
                    if let LogNode::Suite(suite) = node {
                        self.stack.push(suite.children.iter());
                        self.descended = true;
                    }
                    return Some((depth, node));
                }
                None => {
                    self.stack.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_status_from_token() {
        assert_eq!(Status::from_token("PASS"), Some(Status::Pass));
        assert_eq!(Status::from_token("FAIL"), Some(Status::Fail));
        assert_eq!(Status::from_token("SKIP"), None);
        assert!(Status::Fail.is_fail());
    }

    #[test]
    fn test_log_node_serializes_with_kind_tag() {
        let node = LogNode::Test(TestCase {
            id: NodeId(3),
            name: "My Test".to_string(),
            documentation: None,
            status: Status::Fail,
            logs: vec!["My Test | FAIL |".to_string()],
        });

        let json = serde_json::to_value(&node).expect("Should serialize");
        assert_eq!(json["kind"], "test");
        assert_eq!(json["id"], 3);
        assert_eq!(json["status"], "FAIL");
    }

    #[test]
    fn test_log_node_accessors() {
        let text = LogNode::Text {
            id: NodeId(0),
            content: "hello".to_string(),
        };
        assert_eq!(text.as_text(), Some("hello"));
        assert_eq!(text.status(), None);
        assert!(text.children().is_empty());
    }

    fn nested(depth: usize) -> Vec<LogNode> {
        let mut forest = vec![LogNode::Text {
            id: NodeId(0),
            content: "leaf".to_string(),
        }];
        for level in 1..=depth {
            forest = vec![LogNode::Suite(Suite {
                id: NodeId(level),
                name: format!("S{level}"),
                documentation: None,
                status: Status::Pass,
                summary: "1 test, 1 passed, 0 failed".to_string(),
                children: forest,
            })];
        }
        forest
    }

    #[test]
    fn test_walk_preorder_with_depth() {
        let forest = nested(2);
        let visited: Vec<(usize, NodeId)> = Walk::new(&forest).map(|(d, n)| (d, n.id())).collect();
        assert_eq!(
            visited,
            vec![(0, NodeId(2)), (1, NodeId(1)), (2, NodeId(0))]
        );
    }

    #[test]
    fn test_walk_skip_children() {
        let mut forest = nested(2);
        forest.push(LogNode::Text {
            id: NodeId(9),
            content: "after".to_string(),
        });

        let mut walk = Walk::new(&forest);
        let (_, first) = walk.next().expect("root suite");
        assert_eq!(first.id(), NodeId(2));
        walk.skip_children();
        // Skipping twice must not drop the outer level
        walk.skip_children();
        let rest: Vec<(usize, NodeId)> = walk.map(|(d, n)| (d, n.id())).collect();
        assert_eq!(rest, vec![(0, NodeId(9))]);
    }

    #[test]
    fn test_walk_deep_nesting() {
        let forest = nested(20_000);
        let max_depth = Walk::new(&forest).map(|(d, _)| d).max();
        assert_eq!(max_depth, Some(20_000));
        // Unwind without recursing through every level
        let mut pending = forest;
        while let Some(node) = pending.pop() {
            if let LogNode::Suite(suite) = node {
                pending.extend(suite.children);
            }
        }
    }
}
