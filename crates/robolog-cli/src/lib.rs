// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! robolog-cli library
//!
//! This module exports the viewer's configuration, output and the `run`
//! entry point for use by the binary and by integration tests.

use std::fs::File;
use std::io::{self, BufReader, Write};

use anyhow::{Context, bail};
use robolog::{LogNode, PathOpener, RunSummary, links, parse_reader, render_with};
use tracing::{debug, info};

pub mod config;
pub mod opener;
pub mod output;

use config::{Config, LinkLabel, OutputFormat};

/// Read console output from the configured file, or stdin
///
/// # Errors
///
/// Returns an error if the input cannot be opened or read.
pub fn load(config: &Config) -> anyhow::Result<Vec<LogNode>> {
    let forest = match &config.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            parse_reader(BufReader::new(file))
                .with_context(|| format!("Failed to read {}", path.display()))?
        }
        None => parse_reader(io::stdin().lock()).context("Failed to read stdin")?,
    };
    debug!(roots = forest.len(), "console output structured");
    Ok(forest)
}

/// Print a structured forest and open a link if requested
///
/// # Errors
///
/// Returns an error if writing fails, or if `--open` names a link that is not
/// in the output or cannot be opened.
pub fn report<W: Write>(
    config: &Config,
    forest: &[LogNode],
    opener: &dyn PathOpener,
    out: &mut W,
) -> anyhow::Result<RunSummary> {
    let summary = RunSummary::from_forest(forest);

    match config.format {
        OutputFormat::Text => {
            let rows = render_with(forest, &config.collapse_state(), config.render_options());
            output::write_text(out, &rows, &summary)?;
        }
        OutputFormat::Json => output::write_json(out, forest, &summary)?,
    }
    out.flush()?;

    if let Some(label) = config.open {
        open_link(forest, label, opener)?;
    }

    info!(
        tests = summary.tests,
        failed = summary.tests_failed,
        "run reported"
    );
    Ok(summary)
}

/// Load, print and report a run
///
/// # Errors
///
/// See [`load`] and [`report`].
pub fn run<W: Write>(
    config: &Config,
    opener: &dyn PathOpener,
    out: &mut W,
) -> anyhow::Result<RunSummary> {
    let forest = load(config)?;
    report(config, &forest, opener, out)
}

fn open_link(
    forest: &[LogNode],
    label: LinkLabel,
    opener: &dyn PathOpener,
) -> anyhow::Result<()> {
    let Some(link) = links(forest)
        .into_iter()
        .find(|link| link.label == label.as_str())
    else {
        bail!("No '{}:' line found in the console output", label.as_str());
    };
    link.activate(opener)
        .with_context(|| format!("Failed to open {} link", label.as_str()))
}
