// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the robolog viewer
//!
//! This module provides the command-line options for reading a captured
//! console log, choosing the output format, and presetting collapse toggles.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use robolog::{CollapseState, NodeId, RenderOptions};

/// Robolog - structured view of Robot Framework console output
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "robolog")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Console log to read
    ///
    /// Reads from stdin when omitted, so output can be piped straight from
    /// the runner: `robot tests/ | robolog`.
    #[arg(env = "ROBOLOG_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "ROBOLOG_FORMAT")]
    pub format: OutputFormat,

    /// Toggle a node away from its default open state
    ///
    /// Node ids are zero-based line numbers of the test or suite status
    /// line, as shown in `--format json`. May be repeated.
    #[arg(short, long = "toggle", value_name = "ID")]
    pub toggles: Vec<usize>,

    /// Only show failing tests and the suites containing them
    #[arg(long, default_value = "false")]
    pub failed_only: bool,

    /// Open the result file printed on the matching console line
    #[arg(long, value_enum, value_name = "LABEL")]
    pub open: Option<LinkLabel>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so they never mix with the rendered tree.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// How the structured tree is printed
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Indented tree with open/closed markers
    #[default]
    Text,
    /// Forest and summary as JSON
    Json,
}

/// Result file links printed at the end of a run
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkLabel {
    /// `Output:` (output.xml)
    Output,
    /// `Log:` (log.html)
    Log,
    /// `Report:` (report.html)
    Report,
}

impl LinkLabel {
    /// Label as printed on the console
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Output => "Output",
            Self::Log => "Log",
            Self::Report => "Report",
        }
    }
}

impl Config {
    /// Build the collapse state from `--toggle` ids
    #[must_use]
    pub fn collapse_state(&self) -> CollapseState {
        self.toggles.iter().copied().map(NodeId).collect()
    }

    /// Render options from the command line
    #[must_use]
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            failed_only: self.failed_only,
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the input path is specified but doesn't exist or
    /// is not a file.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref input) = self.input {
            if !input.exists() {
                return Err(ConfigError::InputNotFound(input.clone()));
            }
            if !input.is_file() {
                return Err(ConfigError::InputNotFile(input.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Input path not found
    #[error("Input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Input path is not a regular file
    #[error("Input path is not a file: {0}")]
    InputNotFile(PathBuf),
}
