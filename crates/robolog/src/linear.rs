// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Linear pass over console output
//!
//! Walks the lines once, left to right, and emits a flat list of text lines,
//! completed tests, and suite status markers. Nesting is recovered later by
//! [`crate::tree::reduce`].
//!
//! # Example
//!
//! ```
//! use robolog::linear::build_linear;
//! use robolog::node::LinearNode;
//!
//! let nodes = build_linear(&["Smoke", "Opens App | PASS |"]);
//! assert_eq!(nodes.len(), 2);
//! assert!(matches!(nodes[1], LinearNode::Test(_)));
//! ```

use std::mem;

use tracing::debug;

use crate::capture::FailCapture;
use crate::classify::{LineKind, classify, is_suite_summary, split_documentation};
use crate::node::{LinearNode, NodeId, Status, SuiteEnd, TestCase};
use crate::resolve::resolve;

/// Build the linear node list for a sequence of console lines
#[must_use]
pub fn build_linear<S: AsRef<str>>(lines: &[S]) -> Vec<LinearNode> {
    let mut builder = LinearBuilder::default();
    let mut index = 0;

    while index < lines.len() {
        let line = lines[index].as_ref();
        match classify(line) {
            LineKind::Separator | LineKind::SystemMessage | LineKind::ErrorMessage => {
                builder.finish_capture();
                builder.flush_buffer();
                builder.emit_text(index, line);
            }
            LineKind::StatusLine { prefix, status } => {
                let summary = lines
                    .get(index + 1)
                    .map(AsRef::as_ref)
                    .filter(|next| is_suite_summary(next));
                if let Some(summary) = summary {
                    builder.close_suite(index, prefix, status, summary);
                    // The summary line belongs to the suite
                    index += 1;
                } else {
                    builder.close_test(index, line, prefix, status);
                }
            }
            LineKind::SuiteSummaryLine | LineKind::PlainText => builder.push_plain(index, line),
        }
        index += 1;
    }

    builder.finish()
}

#[derive(Default)]
struct LinearBuilder {
    output: Vec<LinearNode>,
    buffer: Vec<(NodeId, String)>,
    capture: FailCapture,
}

impl LinearBuilder {
    fn emit_text(&mut self, index: usize, line: &str) {
        self.output.push(LinearNode::Text {
            id: NodeId(index),
            content: line.to_string(),
        });
    }

    fn flush_buffer(&mut self) {
        let buffered = mem::take(&mut self.buffer);
        self.output.extend(
            buffered
                .into_iter()
                .map(|(id, content)| LinearNode::Text { id, content }),
        );
    }

    fn finish_capture(&mut self) {
        if let Some(test) = self.capture.finish() {
            self.output.push(LinearNode::Test(test));
        }
    }

    fn push_plain(&mut self, index: usize, line: &str) {
        if let Err(line) = self.capture.absorb(line.to_string()) {
            self.buffer.push((NodeId(index), line));
        }
    }

    fn close_suite(&mut self, index: usize, prefix: &str, status: Status, summary: &str) {
        self.finish_capture();
        self.flush_buffer();

        let (name, documentation) = split_documentation(prefix);
        debug!(suite = %name, %status, "suite closed");
        self.output.push(LinearNode::SuiteEnd(SuiteEnd {
            id: NodeId(index),
            name,
            documentation,
            status,
            summary: summary.to_string(),
        }));
    }

    fn close_test(&mut self, index: usize, line: &str, prefix: &str, status: Status) {
        self.finish_capture();

        let (status_name, status_doc) = split_documentation(prefix);
        let view: Vec<&str> = self.buffer.iter().map(|(_, l)| l.as_str()).collect();
        let resolution = resolve(&status_name, status_doc.as_deref(), &view);
        let logs_start = resolution.logs_start();

        let mut logs = Vec::new();
        for (pos, (id, content)) in mem::take(&mut self.buffer).into_iter().enumerate() {
            if pos >= logs_start {
                logs.push(content);
            } else if resolution.adopted && resolution.candidate == Some(pos) {
                // Consumed as the test name
            } else {
                self.output.push(LinearNode::Text { id, content });
            }
        }
        logs.push(line.to_string());

        let test = TestCase {
            id: NodeId(index),
            name: resolution.name,
            documentation: resolution.documentation,
            status,
            logs,
        };

        if status.is_fail() {
            self.capture.begin(test);
        } else {
            self.output.push(LinearNode::Test(test));
        }
    }

    fn finish(mut self) -> Vec<LinearNode> {
        self.finish_capture();
        self.flush_buffer();
        debug!(nodes = self.output.len(), "linear pass complete");
        self.output
    }
}
