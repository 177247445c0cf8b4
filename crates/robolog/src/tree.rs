// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Tree reduction
//!
//! Console output has no explicit suite-open marker. A suite's declaration is
//! just a text line carrying its name, so nesting is recovered by matching each
//! suite status line back to the closest preceding text line that looks like
//! its declaration.

use tracing::{debug, warn};

use crate::node::{LinearNode, LogNode, Suite, SuiteEnd};

const TRUNCATION_MARKER: &str = "...";

/// Fold the linear node list into a forest
#[must_use]
pub fn reduce(nodes: Vec<LinearNode>) -> Vec<LogNode> {
    let mut stack: Vec<LogNode> = Vec::with_capacity(nodes.len());

    for node in nodes {
        match node {
            LinearNode::SuiteEnd(end) => {
                let suite = close_suite(&mut stack, end);
                stack.push(LogNode::Suite(suite));
            }
            other => stack.push(LogNode::from(other)),
        }
    }

    debug!(roots = stack.len(), "tree reduced");
    stack
}

/// Strip the console's truncation marker from a suite name
#[must_use]
pub fn clean_suite_name(name: &str) -> &str {
    name.trim_end_matches(TRUNCATION_MARKER).trim()
}

/// Check whether a text line declares the suite named `clean_name`
///
/// Matches when the line contains the name, or, for multi-word names, when it
/// starts with the name's first word.
#[must_use]
pub fn declares_suite(content: &str, clean_name: &str) -> bool {
    if content.contains(clean_name) {
        return true;
    }
    clean_name.contains(' ')
        && clean_name
            .split_whitespace()
            .next()
            .is_some_and(|first| content.starts_with(first))
}

/// Display name of a suite: the last segment of a dotted name
#[must_use]
pub fn display_name(clean_name: &str) -> &str {
    clean_name.rsplit('.').next().unwrap_or(clean_name)
}

fn close_suite(stack: &mut Vec<LogNode>, end: SuiteEnd) -> Suite {
    let clean_name = clean_suite_name(&end.name);
    let mut collected = Vec::new();
    let mut matched = false;

    while let Some(node) = stack.pop() {
        let is_declaration = node
            .as_text()
            .is_some_and(|content| declares_suite(content, clean_name));
        collected.push(node);
        if is_declaration {
            matched = true;
            break;
        }
    }
    collected.reverse();

    if !matched {
        warn!(
            suite = %end.name,
            absorbed = collected.len(),
            "no declaration found for suite; absorbing all preceding nodes"
        );
    }

    let name = match display_name(clean_name) {
        "" => end.name.clone(),
        segment => segment.to_string(),
    };

    Suite {
        id: end.id,
        name,
        documentation: end.documentation,
        status: end.status,
        summary: end.summary,
        children: collected,
    }
}
