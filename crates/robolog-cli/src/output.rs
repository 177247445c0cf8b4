// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Text and JSON output of a rendered tree

use std::io::{self, Write};

use robolog::{Content, LogNode, RenderRow, RowKind, RunSummary, Status};
use serde::Serialize;

const INDENT: &str = "  ";

/// JSON document printed by `--format json`
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Aggregate counts
    pub summary: &'a RunSummary,
    /// The structured forest
    pub forest: &'a [LogNode],
}

/// Format a single row as a line of text
#[must_use]
pub fn format_row(row: &RenderRow) -> String {
    let mut line = INDENT.repeat(row.depth);

    match row.open {
        Some(true) => line.push_str("v "),
        Some(false) => line.push_str("> "),
        None => {}
    }

    if row.kind != RowKind::Line {
        if let Some(status) = row.tone {
            line.push_str(status_tag(status));
            line.push(' ');
        }
    }

    match &row.content {
        Content::Text { text } => line.push_str(text),
        Content::Link(link) => {
            line.push_str(&format!("{}: <{}>", link.label, link.path));
        }
    }

    if let Some(detail) = &row.detail {
        match row.kind {
            RowKind::SuiteHeader => line.push_str(&format!(" ({detail})")),
            _ => line.push_str(&format!(" :: {detail}")),
        }
    }

    line
}

/// Write rows as an indented tree followed by a one-line summary
///
/// # Errors
///
/// Returns any error from the writer.
pub fn write_text<W: Write>(
    out: &mut W,
    rows: &[RenderRow],
    summary: &RunSummary,
) -> io::Result<()> {
    for row in rows {
        writeln!(out, "{}", format_row(row))?;
    }
    writeln!(
        out,
        "{} tests, {} passed, {} failed",
        summary.tests, summary.tests_passed, summary.tests_failed
    )
}

/// Write the forest and summary as pretty JSON
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(
    out: &mut W,
    forest: &[LogNode],
    summary: &RunSummary,
) -> anyhow::Result<()> {
    let report = JsonReport { summary, forest };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn status_tag(status: Status) -> &'static str {
    match status {
        Status::Pass => "[PASS]",
        Status::Fail => "[FAIL]",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use robolog::{CollapseState, parse_lines, render};
    use similar_asserts::assert_eq;

    #[test]
    fn test_write_text_tree() {
        let forest = parse_lines(&[
            "Smoke",
            "Opens App :: Cold start | PASS |",
            "Taps Menu | FAIL |",
            "Element not found",
            "----------",
            "Smoke | FAIL |",
            "2 tests, 1 passed, 1 failed",
            "Report: /tmp/report.html",
        ]);
        let rows = render(&forest, &CollapseState::new());
        let summary = RunSummary::from_forest(&forest);

        let mut out = Vec::new();
        write_text(&mut out, &rows, &summary).expect("write should succeed");
        let text = String::from_utf8(out).expect("utf8");

        let expected = "\
v [FAIL] Smoke (2 tests, 1 passed, 1 failed)
  Smoke
  > [PASS] Opens App :: Cold start
  v [FAIL] Taps Menu
    Taps Menu | FAIL |
    Element not found
  ----------
Report: </tmp/report.html>
2 tests, 1 passed, 1 failed
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_write_json_report() {
        let forest = parse_lines(&["Only | PASS |"]);
        let summary = RunSummary::from_forest(&forest);

        let mut out = Vec::new();
        write_json(&mut out, &forest, &summary).expect("write should succeed");
        let value: serde_json::Value = serde_json::from_slice(&out).expect("valid json");

        assert_eq!(value["summary"]["tests"].as_u64(), Some(1));
        assert_eq!(value["forest"][0]["kind"].as_str(), Some("test"));
        assert_eq!(value["forest"][0]["name"].as_str(), Some("Only"));
    }
}
