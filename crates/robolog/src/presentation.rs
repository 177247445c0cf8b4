// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Collapse state and the render step
//!
//! Failed tests start open, passed tests start closed, suites start open. The
//! user's toggles are kept in a [`CollapseState`] owned by the view and passed
//! in explicitly, so one forest can be rendered by several views at once.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::classify::parse_status_line;
use crate::link::Link;
use crate::node::{LogNode, NodeId, Status, Walk};

/// Set of node ids the user has toggled away from their default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollapseState {
    toggled: HashSet<NodeId>,
}

impl CollapseState {
    /// Create an empty state (every node at its default)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a node away from (or back to) its default
    ///
    /// Returns `true` if the node is now toggled.
    pub fn toggle(&mut self, id: NodeId) -> bool {
        if self.toggled.remove(&id) {
            false
        } else {
            self.toggled.insert(id);
            true
        }
    }

    /// Check if a node has been toggled
    #[must_use]
    pub fn is_toggled(&self, id: NodeId) -> bool {
        self.toggled.contains(&id)
    }

    /// Reset every node to its default
    pub fn clear(&mut self) {
        self.toggled.clear();
    }

    /// Number of toggled nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.toggled.len()
    }

    /// Check if no node is toggled
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toggled.is_empty()
    }

    /// Whether a node is shown open
    ///
    /// Tests: `failed XOR toggled`. Suites: `!toggled`. Text is never
    /// collapsible and yields `None`.
    #[must_use]
    pub fn is_open(&self, node: &LogNode) -> Option<bool> {
        match node {
            LogNode::Text { .. } => None,
            LogNode::Test(test) => Some(test.failed() ^ self.is_toggled(test.id)),
            LogNode::Suite(suite) => Some(!self.is_toggled(suite.id)),
        }
    }
}

impl FromIterator<NodeId> for CollapseState {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            toggled: iter.into_iter().collect(),
        }
    }
}

/// What a rendered row stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowKind {
    /// Header line of a suite
    SuiteHeader,
    /// Header line of a test
    TestHeader,
    /// A console line (bare text or part of a test's logs)
    Line,
}

/// Displayed content of a row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Content {
    /// Plain text
    Text {
        /// Text to display
        text: String,
    },
    /// An activatable link to a result file
    Link(Link),
}

impl Content {
    /// Classify a console line for display
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        match Link::detect(line) {
            Some(link) => Self::Link(link),
            None => Self::Text {
                text: line.to_string(),
            },
        }
    }

    /// Get the link if this content is one
    #[must_use]
    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Self::Link(link) => Some(link),
            Self::Text { .. } => None,
        }
    }
}

/// One visible row of the rendered tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRow {
    /// Id of the node the row belongs to
    pub id: NodeId,
    /// Nesting depth (0 for roots)
    pub depth: usize,
    /// Row kind
    pub kind: RowKind,
    /// Open state of a header row; `None` for lines
    pub open: Option<bool>,
    /// Pass/fail colouring
    pub tone: Option<Status>,
    /// Displayed content
    pub content: Content,
    /// Documentation of a test, or summary of a suite
    pub detail: Option<String>,
}

/// Options for the render step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Only show failing tests and the suites containing them
    pub failed_only: bool,
}

/// Flatten the visible part of a forest into rows
#[must_use]
pub fn render(forest: &[LogNode], state: &CollapseState) -> Vec<RenderRow> {
    render_with(forest, state, RenderOptions::default())
}

/// Flatten the visible part of a forest into rows with options
#[must_use]
pub fn render_with(
    forest: &[LogNode],
    state: &CollapseState,
    options: RenderOptions,
) -> Vec<RenderRow> {
    let failing = options.failed_only.then(|| failing_ids(forest));
    let mut rows = Vec::new();
    let mut walk = Walk::new(forest);

    while let Some((depth, node)) = walk.next() {
        if failing.as_ref().is_some_and(|ids| !ids.contains(&node.id())) {
            walk.skip_children();
            continue;
        }
        let open = state.is_open(node);
        match node {
            LogNode::Text { id, content } => rows.push(line_row(*id, depth, content)),
            LogNode::Test(test) => {
                rows.push(RenderRow {
                    id: test.id,
                    depth,
                    kind: RowKind::TestHeader,
                    open,
                    tone: Some(test.status),
                    content: Content::Text {
                        text: test.name.clone(),
                    },
                    detail: test.documentation.clone(),
                });
                if open == Some(true) {
                    rows.extend(test.logs.iter().map(|l| line_row(test.id, depth + 1, l)));
                }
            }
            LogNode::Suite(suite) => {
                rows.push(RenderRow {
                    id: suite.id,
                    depth,
                    kind: RowKind::SuiteHeader,
                    open,
                    tone: Some(suite.status),
                    content: Content::Text {
                        text: suite.name.clone(),
                    },
                    detail: Some(suite.summary.clone()),
                });
                if open != Some(true) {
                    walk.skip_children();
                }
            }
        }
    }
    rows
}

fn line_row(id: NodeId, depth: usize, line: &str) -> RenderRow {
    RenderRow {
        id,
        depth,
        kind: RowKind::Line,
        open: None,
        tone: parse_status_line(line).map(|(_, status)| status),
        content: Content::from_line(line),
        detail: None,
    }
}

/// Ids of failed tests and of suites that failed or contain a failure
fn failing_ids(forest: &[LogNode]) -> HashSet<NodeId> {
    let mut failing = HashSet::new();
    // Suite ids from the root down to the current node
    let mut ancestors: Vec<NodeId> = Vec::new();

    for (depth, node) in Walk::new(forest) {
        ancestors.truncate(depth);
        if node.status().is_some_and(Status::is_fail) {
            failing.insert(node.id());
            // Once an ancestor is marked, everything above it already is
            for id in ancestors.iter().rev() {
                if !failing.insert(*id) {
                    break;
                }
            }
        }
        if let LogNode::Suite(suite) = node {
            ancestors.push(suite.id);
        }
    }
    failing
}
